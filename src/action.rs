//! Actions are preconditioned/postconditioned operators the planner chains
//! together and the agent executes one at a time.
//!
//! See [`Action`] for more info.

use crate::predicate::Predicate;
use crate::Scalar;

/// An operator over the agent's predicate set.
///
/// Applicable under a set of predicates `P` iff every one of its
/// [`Action::preconditions`] (matched by name) appears in `P`. Applying it
/// conceptually yields `P` minus the matched preconditions, plus its
/// [`Action::postconditions`]; only the planner simulates this, real
/// predicate mutation happens only for the action the agent is actually
/// executing.
///
/// `process` is called once per tick while this action is active; it
/// returns `true` once the action is accomplished, at which point the
/// agent applies its postconditions and advances to the next action in the
/// plan.
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
///
/// let action = Action::new(vec!["A".to_owned()], vec![Predicate::new(2, "B")])
///     .with_cost(3)
///     .with_process(|_dt, _bound| true);
///
/// assert_eq!(action.cost(), 3);
/// assert!(action.preconditions().iter().any(|p| p == "A"));
/// ```
pub struct Action {
    preconditions: Vec<String>,
    postconditions: Vec<Predicate>,
    cost: u32,
    accomplished: bool,
    bound: Vec<Option<Predicate>>,
    process: Box<dyn FnMut(Scalar, &[Option<Predicate>]) -> bool>,
}

impl Action {
    /// Constructs an action that accomplishes itself immediately (the
    /// first tick it is processed), suitable as a placeholder or for
    /// actions whose whole effect is the postcondition itself.
    pub fn new(preconditions: Vec<String>, postconditions: Vec<Predicate>) -> Self {
        Self {
            preconditions,
            postconditions,
            cost: 0,
            accomplished: false,
            bound: Vec::new(),
            process: Box::new(|_dt, _bound| true),
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Supplies the function called each tick this action is active. It
    /// receives the elapsed time and the concrete predicate instances
    /// bound to each precondition (in precondition order), and returns
    /// whether the action is now accomplished.
    pub fn with_process<F>(mut self, process: F) -> Self
    where
        F: FnMut(Scalar, &[Option<Predicate>]) -> bool + 'static,
    {
        self.process = Box::new(process);
        self
    }

    pub fn preconditions(&self) -> &[String] {
        &self.preconditions
    }

    pub fn postconditions(&self) -> &[Predicate] {
        &self.postconditions
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn accomplished(&self) -> bool {
        self.accomplished
    }

    /// The concrete predicate instance bound to the precondition at
    /// `index`, if binding has happened (see [`crate::planner::Planner`]).
    pub fn bound_predicate(&self, index: usize) -> Option<&Predicate> {
        self.bound.get(index).and_then(|p| p.as_ref())
    }

    /// Binds the concrete predicate instances that matched each
    /// precondition, in precondition order. Called by the planner once a
    /// chain is finalized, and rebound by the agent at plan-start time.
    pub fn bind(&mut self, bound: Vec<Option<Predicate>>) {
        self.bound = bound;
    }

    /// Resets the `accomplished` flag, done by the agent every time a new
    /// plan containing this action starts.
    pub fn reset_accomplished(&mut self) {
        self.accomplished = false;
    }

    /// Advances this action by one tick. Returns whether it is now
    /// accomplished.
    pub fn process(&mut self, dt: Scalar) -> bool {
        if !self.accomplished {
            self.accomplished = (self.process)(dt, &self.bound);
        }
        self.accomplished
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("preconditions", &self.preconditions)
            .field("postconditions", &self.postconditions)
            .field("cost", &self.cost)
            .field("accomplished", &self.accomplished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_with_no_process_set_accomplishes_immediately() {
        let mut action = Action::new(vec!["A".to_owned()], vec![Predicate::new(1, "B")]);
        assert!(action.process(0.0));
    }

    #[test]
    fn action_stays_unaccomplished_until_process_says_so() {
        let mut calls = 0;
        let mut action = Action::new(vec![], vec![]).with_process(move |_dt, _bound| {
            calls += 1;
            calls >= 3
        });

        assert!(!action.process(0.16));
        assert!(!action.process(0.16));
        assert!(action.process(0.16));
    }

    #[test]
    fn bound_predicates_are_visible_to_process() {
        let action = Action::new(vec!["A".to_owned()], vec![]).with_process(|_dt, bound| {
            bound[0].as_ref().map(|p| p.name() == "A").unwrap_or(false)
        });
        let mut action = action;
        action.bind(vec![Some(Predicate::new(1, "A"))]);
        assert!(action.process(0.0));
    }
}
