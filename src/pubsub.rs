//! Generic publish/subscribe utility underlying the sensory pipeline.
//!
//! Sensors are publishers; [`crate::sensory::SensorySystem`] subscribes to
//! them to receive raw stimuli. Subscribers are held behind `Rc` so a
//! publisher can be shared without taking ownership of its subscribers.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives notifications of type `T` from a [`Publisher`].
pub trait Subscriber<T> {
    fn on_notification(&self, event: T);
}

/// Holds a list of subscribers and forwards notifications to all of them.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use nai_goap::pubsub::{Publisher, Subscriber};
///
/// struct Collector(RefCell<Vec<i32>>);
/// impl Subscriber<i32> for Collector {
///     fn on_notification(&self, event: i32) {
///         self.0.borrow_mut().push(event);
///     }
/// }
///
/// let mut publisher = Publisher::default();
/// assert!(!publisher.has_subscribers());
///
/// let collector = Rc::new(Collector(RefCell::new(Vec::new())));
/// assert!(publisher.subscribe(collector.clone()));
/// assert!(!publisher.subscribe(collector.clone()));
/// assert!(publisher.has_subscribers());
///
/// publisher.notify_all(7);
/// assert_eq!(*collector.0.borrow(), vec![7]);
///
/// publisher.unsubscribe(&collector);
/// assert!(!publisher.has_subscribers());
/// ```
pub struct Publisher<T> {
    subscribers: Vec<Rc<dyn Subscriber<T>>>,
}

impl<T> Default for Publisher<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }
}

impl<T> Publisher<T>
where
    T: Clone,
{
    pub fn has_subscribers(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Registers a subscriber. Returns `false` if it was already
    /// subscribed.
    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber<T>>) -> bool {
        if self
            .subscribers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &subscriber))
        {
            return false;
        }
        self.subscribers.push(subscriber);
        true
    }

    /// Removes a subscriber. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, subscriber: &Rc<dyn Subscriber<T>>) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|existing| !Rc::ptr_eq(existing, subscriber));
        self.subscribers.len() != before
    }

    /// Notifies every subscriber, in subscription order.
    pub fn notify_all(&self, event: T) {
        for subscriber in &self.subscribers {
            subscriber.on_notification(event.clone());
        }
    }
}

/// Wraps a [`RefCell`] so the publisher can be shared and mutated through
/// `Rc` without the caller needing to know about interior mutability.
pub type SharedPublisher<T> = Rc<RefCell<Publisher<T>>>;
