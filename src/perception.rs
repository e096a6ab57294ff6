//! Thin per-tick composer gluing sensing, memory and cognition together.
//!
//! See [`PerceptionSystem`] for more info.

use crate::cognitive::CognitiveSystem;
use crate::goal::Goal;
use crate::memory::ShortTermMemory;
use crate::predicate::Predicate;
use crate::sensory::SensorySystem;
use crate::stimulus::Stimulus;
use crate::Scalar;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the sensory system and short-term memory, and drives both plus the
/// cognitive stage in the fixed order the engine relies on: stimuli reach
/// memory before memory ages them, and memory is only ever read by the
/// cognitive stage after that tick's aging has happened.
///
/// Shared via `Rc<RefCell<_>>` between the agent and whatever external
/// producers push stimuli into its sensory system.
#[derive(Default)]
pub struct PerceptionSystem {
    sensory: Rc<RefCell<SensorySystem>>,
    memory: ShortTermMemory<Stimulus>,
}

impl PerceptionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the sensory system, handed to sensors via
    /// `Rc::downgrade` when they subscribe.
    pub fn sensory(&self) -> &Rc<RefCell<SensorySystem>> {
        &self.sensory
    }

    pub fn memory(&self) -> &ShortTermMemory<Stimulus> {
        &self.memory
    }

    /// Runs, in order: drain sensed stimuli into memory, age memory,
    /// transform memory into predicates for every goal. Returns the
    /// predicates goals produced this tick; the caller (normally
    /// [`crate::agent::Agent`]) is responsible for delivering them.
    pub fn update(&mut self, dt: Scalar, goals: &[Rc<RefCell<dyn Goal>>]) -> Vec<Predicate> {
        self.sensory.borrow().update(dt, &mut self.memory);
        self.memory.update(dt);
        CognitiveSystem::update(goals, &self.memory)
    }
}
