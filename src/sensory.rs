//! Sensory system: routes stimuli from sensors through per-class thresholds
//! into short-term memory.
//!
//! See [`SensorySystem`] for more info.

use crate::memory::ShortTermMemory;
use crate::stimulus::Stimulus;
use crate::Scalar;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Decides whether a raw stimulus of a given class is strong enough to be
/// perceived (and thus deposited into memory).
pub trait Threshold {
    fn is_perceived(&self, stimulus: &Stimulus) -> bool;
}

/// A threshold that always returns a fixed verdict, handy for tests and
/// for stimulus classes the agent always (or never) perceives.
#[derive(Debug, Copy, Clone)]
pub struct FixedThreshold(pub bool);

impl Threshold for FixedThreshold {
    fn is_perceived(&self, _stimulus: &Stimulus) -> bool {
        self.0
    }
}

/// Producer of stimuli. Implementors push sensed events into a
/// [`SensorySystem`] they have subscribed to.
///
/// Sensors hold only a [`Weak`] reference to the sensory system they
/// report to, so that a sensor outliving the agent's perception pipeline
/// never keeps the (possibly much larger) memory graph alive.
pub trait Sensor {
    /// Subscribes this sensor to a sensory system. Returns `false` if it
    /// was already subscribed to the same one.
    fn subscribe(&mut self, sensory: Weak<RefCell<SensorySystem>>) -> bool;

    /// Produces stimuli for this tick and notifies the subscribed sensory
    /// system, if it is still alive.
    fn update(&mut self, dt: Scalar);
}

/// Thin publish/subscribe hub: accumulates raw stimuli pushed by sensors
/// into a "received" buffer, then on each agent tick filters them through
/// per-class-name thresholds before depositing survivors into memory.
///
/// Stimuli processed in arrival order; deposition order into memory
/// follows processing order. A stimulus whose class has no registered
/// threshold is dropped silently. The received buffer is cleared after
/// every `update` call regardless of outcome.
pub struct SensorySystem {
    received: RefCell<Vec<Stimulus>>,
    thresholds: HashMap<String, Box<dyn Threshold>>,
}

impl Default for SensorySystem {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
            thresholds: HashMap::new(),
        }
    }
}

impl SensorySystem {
    /// Registers (or replaces) the threshold used to decide whether
    /// stimuli of the given class are perceived.
    pub fn set_threshold(&mut self, class_name: impl Into<String>, threshold: impl Threshold + 'static) {
        self.thresholds.insert(class_name.into(), Box::new(threshold));
    }

    /// Called by sensors (directly, or via `Weak::upgrade`) to deposit a
    /// raw stimulus into the received buffer.
    pub fn on_notification(&self, stimulus: Stimulus) {
        self.received.borrow_mut().push(stimulus);
    }

    pub fn received_count(&self) -> usize {
        self.received.borrow().len()
    }

    /// Drains the received buffer through thresholds into `memory`.
    pub fn update(&self, _dt: Scalar, memory: &mut ShortTermMemory<Stimulus>) {
        let received = self.received.borrow_mut().split_off(0);
        for stimulus in received {
            match self.thresholds.get(stimulus.class_name()) {
                Some(threshold) if threshold.is_perceived(&stimulus) => {
                    let ttl = stimulus_ttl(&stimulus);
                    memory.add_or_replace(stimulus, ttl);
                }
                Some(_) => {
                    log::trace!("stimulus {} below threshold, dropped", stimulus.id());
                }
                None => {
                    log::trace!(
                        "stimulus class {:?} has no registered threshold, dropped",
                        stimulus.class_name()
                    );
                }
            }
        }
    }
}

fn stimulus_ttl(stimulus: &Stimulus) -> Scalar {
    stimulus.duration_in_memory()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSensor {
        class_name: &'static str,
        subscriber: Option<Weak<RefCell<SensorySystem>>>,
        next_id: StimulusIdGen,
    }

    #[derive(Default)]
    struct StimulusIdGen(u32);
    impl StimulusIdGen {
        fn next(&mut self) -> u32 {
            self.0 += 1;
            self.0
        }
    }

    impl RecordingSensor {
        fn new(class_name: &'static str) -> Self {
            Self {
                class_name,
                subscriber: None,
                next_id: StimulusIdGen::default(),
            }
        }
    }

    impl Sensor for RecordingSensor {
        fn subscribe(&mut self, sensory: Weak<RefCell<SensorySystem>>) -> bool {
            let already = self.subscriber.is_some();
            self.subscriber = Some(sensory);
            !already
        }

        fn update(&mut self, _dt: Scalar) {
            if let Some(sensory) = self.subscriber.as_ref().and_then(Weak::upgrade) {
                let id = self.next_id.next();
                sensory
                    .borrow()
                    .on_notification(Stimulus::new(id, self.class_name, 1.0));
            }
        }
    }

    #[test]
    fn perceived_stimulus_reaches_memory() {
        let sensory = Rc::new(RefCell::new(SensorySystem::default()));
        sensory.borrow_mut().set_threshold("HEARING", FixedThreshold(true));

        let mut sensor = RecordingSensor::new("HEARING");
        sensor.subscribe(Rc::downgrade(&sensory));
        sensor.update(0.16);

        let mut memory = ShortTermMemory::default();
        sensory.borrow().update(0.16, &mut memory);

        assert!(!memory.is_empty());
        assert_eq!(sensory.borrow().received_count(), 0);
    }

    #[test]
    fn unperceived_stimulus_never_reaches_memory() {
        let sensory = Rc::new(RefCell::new(SensorySystem::default()));
        sensory.borrow_mut().set_threshold("HEARING", FixedThreshold(false));

        let mut sensor = RecordingSensor::new("HEARING");
        sensor.subscribe(Rc::downgrade(&sensory));
        sensor.update(0.16);

        let mut memory = ShortTermMemory::default();
        sensory.borrow().update(0.16, &mut memory);

        assert!(memory.is_empty());
    }

    #[test]
    fn stimulus_without_threshold_is_dropped() {
        let sensory = Rc::new(RefCell::new(SensorySystem::default()));
        // No threshold registered for "SMELL".
        let mut sensor = RecordingSensor::new("SMELL");
        sensor.subscribe(Rc::downgrade(&sensory));
        sensor.update(0.16);

        let mut memory = ShortTermMemory::default();
        sensory.borrow().update(0.16, &mut memory);

        assert!(memory.is_empty());
    }

    #[test]
    fn two_sensor_classes_are_dispatched_independently() {
        let sensory = Rc::new(RefCell::new(SensorySystem::default()));
        sensory.borrow_mut().set_threshold("HEARING", FixedThreshold(true));
        sensory.borrow_mut().set_threshold("VISION", FixedThreshold(true));

        let mut hearing = RecordingSensor::new("HEARING");
        hearing.subscribe(Rc::downgrade(&sensory));
        let mut vision = RecordingSensor::new("VISION");
        vision.subscribe(Rc::downgrade(&sensory));

        hearing.update(0.16);
        vision.update(0.16);

        let mut memory = ShortTermMemory::default();
        sensory.borrow().update(0.16, &mut memory);

        assert_eq!(memory.size(), 2);
    }
}
