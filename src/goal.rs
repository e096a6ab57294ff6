//! Goals bundle candidate actions with the cognitive and lifecycle hooks
//! the agent and planner call into.
//!
//! See [`Goal`] for more info.

use crate::action::Action;
use crate::agent::Agent;
use crate::memory::ShortTermMemory;
use crate::predicate::Predicate;
use crate::predicates_handler::PredicatesHandler;
use crate::stimulus::Stimulus;
use std::cell::RefCell;
use std::rc::Weak;

/// A named bundle of candidate actions plus the rules for turning sensed
/// stimuli into predicates.
///
/// Goals hold only a [`Weak`] back-reference to their owning [`Agent`]
/// (set in [`Goal::on_create`]) to avoid an ownership cycle; upgrading it
/// after the agent has been dropped is a fatal invariant violation (see
/// [`crate::error::GoapError::AgentGone`]).
pub trait Goal {
    /// The candidate actions this goal currently offers to the planner.
    /// Regenerated each planning round by [`Goal::reset`], so
    /// implementations are free to rebuild their action list here from
    /// scratch rather than caching it.
    fn actions(&self) -> Vec<Action>;

    /// A goal-level score used to rank candidate goals when more than one
    /// reaches a plan; `None` disables this goal for the current tick
    /// (e.g. "not hungry" disables a "find food" goal).
    fn cost(&self, predicates: &[Predicate]) -> Option<u32> {
        let _ = predicates;
        Some(0)
    }

    /// One-shot initialization, called once when the agent starts up.
    fn on_create(&mut self, agent: Weak<RefCell<Agent>>) {
        let _ = agent;
    }

    /// Restores this goal's action list ahead of the next planning round.
    fn reset(&mut self) {}

    /// Called when this goal's plan runs to completion; typically removes
    /// the predicate that triggered the goal.
    fn on_accomplished(&mut self, predicates: &mut PredicatesHandler) {
        let _ = predicates;
    }

    /// Called when this goal's active plan is aborted mid-flight.
    fn on_cancel(&mut self, predicates: &mut PredicatesHandler) {
        let _ = predicates;
    }

    /// Cognitive hook: given read-only access to memory, produce at most
    /// one new predicate this tick.
    fn transform(&mut self, memory: &ShortTermMemory<Stimulus>) -> Option<Predicate> {
        let _ = memory;
        None
    }
}
