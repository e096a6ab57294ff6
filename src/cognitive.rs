//! Turns remembered stimuli into new predicates, once per tick.
//!
//! See [`CognitiveSystem`] for more info.

use crate::goal::Goal;
use crate::memory::ShortTermMemory;
use crate::predicate::Predicate;
use crate::stimulus::Stimulus;
use std::cell::RefCell;
use std::rc::Rc;

/// Stateless composer: every tick, asks each goal to transform the current
/// short-term memory into at most one new predicate, and collects whatever
/// comes back.
///
/// The produced predicates are not written to the predicate handler here -
/// [`crate::agent::Agent`] delivers each one through
/// [`crate::agent::Agent::on_new_predicate`] so that a predicate surfacing
/// mid-plan triggers the same abort path as any other freshly sensed fact.
/// Goals that want to retract a predicate do so directly against the
/// `&mut PredicatesHandler` they already receive in
/// [`crate::goal::Goal::on_accomplished`] / [`crate::goal::Goal::on_cancel`].
pub struct CognitiveSystem;

impl CognitiveSystem {
    pub fn update(goals: &[Rc<RefCell<dyn Goal>>], memory: &ShortTermMemory<Stimulus>) -> Vec<Predicate> {
        let mut produced = Vec::new();
        for goal in goals {
            if let Some(predicate) = goal.borrow_mut().transform(memory) {
                log::trace!("cognitive system produced predicate {:?}", predicate.name());
                produced.push(predicate);
            }
        }
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::predicate::Predicate;

    struct AlwaysReports(&'static str);
    impl Goal for AlwaysReports {
        fn actions(&self) -> Vec<Action> {
            Vec::new()
        }

        fn transform(&mut self, _memory: &ShortTermMemory<Stimulus>) -> Option<Predicate> {
            Some(Predicate::new(1, self.0))
        }
    }

    struct NeverReports;
    impl Goal for NeverReports {
        fn actions(&self) -> Vec<Action> {
            Vec::new()
        }
    }

    #[test]
    fn transformed_predicate_is_collected() {
        let goals: Vec<Rc<RefCell<dyn Goal>>> = vec![Rc::new(RefCell::new(AlwaysReports("Hungry")))];
        let memory = ShortTermMemory::default();

        let produced = CognitiveSystem::update(&goals, &memory);

        assert_eq!(produced.len(), 1);
        assert_eq!(produced[0].name(), "Hungry");
    }

    #[test]
    fn goal_with_no_transformation_produces_nothing() {
        let goals: Vec<Rc<RefCell<dyn Goal>>> = vec![Rc::new(RefCell::new(NeverReports))];
        let memory = ShortTermMemory::default();

        let produced = CognitiveSystem::update(&goals, &memory);

        assert!(produced.is_empty());
    }
}
