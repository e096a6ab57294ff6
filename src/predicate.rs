//! Predicates are the typed facts an agent believes about the world.
//!
//! See [`Predicate`] for more info.

use crate::Scalar;

/// Stable numeric identity of a [`Predicate`], unique within a single agent.
///
/// Callers assign these ids; the crate only asserts that they stay unique
/// inside one [`crate::predicates_handler::PredicatesHandler`].
pub type PredicateId = u32;

/// A position in world space, opaque to the planner and consulted only by
/// action handlers and navigation collaborators.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Position {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Position {
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Self) -> Scalar {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Structured data a predicate may carry alongside its name.
///
/// The planner never inspects this payload - two predicates match in
/// planning iff their [`Predicate::name`] is equal. Payload is read by
/// action process functions and navigation collaborators at execution
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicatePayload {
    /// No additional data (most predicates, e.g. `"FOOD"`, are bare facts).
    None,
    /// A place identifier, e.g. for `"GoTo"` predicates that point at
    /// distinct destinations while sharing the same name.
    Place(String),
    /// A world-space position, e.g. for `"PlaceIam"`.
    Position(Position),
    /// A numeric amount, e.g. hunger level or a stimulus-derived value.
    Amount(i64),
}

impl Default for PredicatePayload {
    fn default() -> Self {
        PredicatePayload::None
    }
}

/// An immutable world fact: a stable id, a textual name used for planning
/// matches, and an optional payload consulted by action handlers.
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
///
/// let food = Predicate::new(1, "FOOD");
/// let home = Predicate::with_payload(2, "PlaceIam", PredicatePayload::Place("home".to_owned()));
///
/// assert!(food.matches_name("FOOD"));
/// assert_eq!(home.payload(), &PredicatePayload::Place("home".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    id: PredicateId,
    name: String,
    payload: PredicatePayload,
}

impl Predicate {
    /// Constructs a predicate with no payload.
    pub fn new(id: PredicateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            payload: PredicatePayload::None,
        }
    }

    /// Constructs a predicate carrying a payload.
    pub fn with_payload(id: PredicateId, name: impl Into<String>, payload: PredicatePayload) -> Self {
        Self {
            id,
            name: name.into(),
            payload,
        }
    }

    pub fn id(&self) -> PredicateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &PredicatePayload {
        &self.payload
    }

    /// Planning-relevant equality: two predicates match iff their names are
    /// equal, regardless of id or payload.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }
}
