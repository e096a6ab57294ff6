//! Indexed container for an agent's predicate set.
//!
//! See [`PredicatesHandler`] for more info.

use crate::error::GoapError;
use crate::predicate::{Predicate, PredicateId};

/// Holds the predicates an agent currently believes true.
///
/// Invariants: no two stored predicates share an id; insertion order is
/// preserved across every mutation except [`PredicatesHandler::reset`].
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
///
/// let mut handler = PredicatesHandler::default();
/// handler.add(Predicate::new(1, "I feel good"));
/// handler.add(Predicate::new(2, "I have an axe"));
///
/// assert_eq!(handler.list().len(), 2);
/// assert!(handler.find_by_text("I have an axe").is_some());
/// assert!(handler.find_by_id(1).is_some());
///
/// handler.remove(1);
/// assert!(handler.find_by_id(1).is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct PredicatesHandler {
    predicates: Vec<Predicate>,
}

impl PredicatesHandler {
    /// Appends a new predicate. Panics (via [`GoapError::DuplicatePredicateId`])
    /// if a predicate with the same id is already stored - use
    /// [`PredicatesHandler::add_or_replace`] when overwriting is intended.
    pub fn add(&mut self, predicate: Predicate) {
        if self.predicates.iter().any(|p| p.id() == predicate.id()) {
            panic!("{}", GoapError::DuplicatePredicateId(predicate.id()));
        }
        self.predicates.push(predicate);
    }

    /// Overwrites the predicate sharing `predicate`'s id in place
    /// (preserving its position) or appends it if no such id exists yet.
    pub fn add_or_replace(&mut self, predicate: Predicate) {
        if let Some(slot) = self.predicates.iter_mut().find(|p| p.id() == predicate.id()) {
            *slot = predicate;
        } else {
            self.predicates.push(predicate);
        }
    }

    /// Removes the predicate with the given id. No-op if absent.
    pub fn remove(&mut self, id: PredicateId) {
        self.predicates.retain(|p| p.id() != id);
    }

    pub fn find_by_id(&self, id: PredicateId) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.id() == id)
    }

    /// Returns the first predicate matching `name` in insertion order.
    pub fn find_by_text(&self, name: &str) -> Option<&Predicate> {
        self.predicates.iter().find(|p| p.matches_name(name))
    }

    /// Atomically replaces the entire contents.
    pub fn reset(&mut self, predicates: Vec<Predicate>) {
        self.predicates = predicates;
    }

    /// Stable-ordered view of all stored predicates.
    pub fn list(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }
}
