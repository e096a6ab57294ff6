//! Stimuli are raw sensed input, filtered through thresholds on their way
//! into [`crate::memory::ShortTermMemory`].

use crate::predicate::Position;
use crate::Scalar;

/// Stable numeric identity of a [`Stimulus`]. Repeated observations of the
/// same real-world event should reuse the same id so that
/// `add_or_replace` can refresh payload and time-to-live instead of
/// accumulating duplicate entries.
pub type StimulusId = u32;

/// A unit of sensed input.
///
/// `class_name` is the discriminator used both to route a stimulus through
/// [`crate::sensory::SensorySystem`] thresholds and, typically, by goals
/// matching stimuli of interest during [`crate::goal::Goal::transform`].
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
///
/// let stimulus = Stimulus::new(1, "FOOD", 3.0).with_value(42);
/// assert_eq!(stimulus.class_name(), "FOOD");
/// assert_eq!(stimulus.value(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stimulus {
    id: StimulusId,
    class_name: String,
    duration_in_memory: Scalar,
    position: Option<Position>,
    value: Option<i64>,
}

impl Stimulus {
    pub fn new(id: StimulusId, class_name: impl Into<String>, duration_in_memory: Scalar) -> Self {
        Self {
            id,
            class_name: class_name.into(),
            duration_in_memory,
            position: None,
            value: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a numeric payload, used by dynamic stimuli whose value
    /// changes tick to tick while keeping a stable id (see the end-to-end
    /// "stimulus carries a changing value" scenario in `tests.rs`).
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn id(&self) -> StimulusId {
        self.id
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn duration_in_memory(&self) -> Scalar {
        self.duration_in_memory
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

/// Marker for types that can be stored in [`crate::memory::ShortTermMemory`]
/// keyed by a stable id, used by `add_or_replace` to find the entry to
/// refresh.
pub trait Identifiable {
    fn id(&self) -> StimulusId;
}

impl Identifiable for Stimulus {
    fn id(&self) -> StimulusId {
        self.id
    }
}
