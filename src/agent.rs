//! The agent state machine: the single owner of the predicate set, driving
//! the planner and executing the active plan one action at a time.
//!
//! See [`Agent`] for more info.

use crate::goal::Goal;
use crate::perception::PerceptionSystem;
use crate::plan::Plan;
use crate::planner::Planner;
use crate::predicate::{Predicate, PredicateId, PredicatePayload};
use crate::predicates_handler::PredicatesHandler;
use crate::Scalar;
use std::cell::RefCell;
use std::rc::Rc;

/// Where an [`Agent`] currently sits in its plan/execute cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AgentState {
    /// No active plan; the planner runs every tick until one is found.
    Planning,
    /// A plan is active; its current action is processed every tick.
    Processing,
}

/// Drives planning and execution against a set of goals.
///
/// Holds the only owning references to its predicate handler and active
/// plan. Goals are reached through `Rc` so the agent can hand each of them
/// a [`std::rc::Weak`] back-reference to itself (via
/// [`crate::goal::Goal::on_create`]) without creating a reference cycle.
///
/// # Example
/// ```
/// use nai_goap::prelude::*;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct ChopWood;
/// impl Goal for ChopWood {
///     fn actions(&self) -> Vec<Action> {
///         vec![Action::new(vec![], vec![Predicate::new(1, "HasWood")])]
///     }
/// }
///
/// let agent = Rc::new(RefCell::new(Agent::new(vec![Rc::new(RefCell::new(ChopWood))])));
/// Agent::startup(&agent);
///
/// agent.borrow_mut().update(0.16);
/// assert_eq!(agent.borrow().current_state(), AgentState::Processing);
///
/// agent.borrow_mut().update(0.16);
/// assert_eq!(agent.borrow().current_state(), AgentState::Planning);
/// assert!(agent.borrow().has_predicate(1));
/// ```
pub struct Agent {
    predicates: PredicatesHandler,
    goals: Vec<Rc<RefCell<dyn Goal>>>,
    planner: Planner,
    perception: Option<Rc<RefCell<PerceptionSystem>>>,
    plan: Option<Plan>,
    state: AgentState,
    abort_requested: bool,
}

impl Agent {
    pub fn new(goals: Vec<Rc<RefCell<dyn Goal>>>) -> Self {
        Self {
            predicates: PredicatesHandler::default(),
            goals,
            planner: Planner::new(),
            perception: None,
            plan: None,
            state: AgentState::Planning,
            abort_requested: false,
        }
    }

    pub fn set_perception(&mut self, perception: Rc<RefCell<PerceptionSystem>>) {
        self.perception = Some(perception);
    }

    pub fn perception(&self) -> Option<&Rc<RefCell<PerceptionSystem>>> {
        self.perception.as_ref()
    }

    /// One-shot initialization: hands every goal a weak back-reference to
    /// this agent. Requires the agent already be behind an `Rc` so that
    /// reference can be created.
    pub fn startup(agent: &Rc<RefCell<Agent>>) {
        let weak = Rc::downgrade(agent);
        let goals = agent.borrow().goals.clone();
        for goal in &goals {
            goal.borrow_mut().on_create(weak.clone());
        }
    }

    /// Advances the agent by one tick: runs perception (if attached), then
    /// the PLANNING/PROCESSING state machine.
    pub fn update(&mut self, dt: Scalar) {
        if let Some(perception) = self.perception.clone() {
            let produced = perception.borrow_mut().update(dt, &self.goals);
            for predicate in produced {
                self.on_new_predicate(predicate);
            }
        }

        match self.state {
            AgentState::Planning => self.plan(),
            AgentState::Processing => self.process(dt),
        }
    }

    fn plan(&mut self) {
        for goal in &self.goals {
            goal.borrow_mut().reset();
        }

        if let Some(plan) = self.planner.get_plan(&self.goals, self.predicates.list()) {
            log::debug!(
                "agent found a plan for goal {} with cost {}",
                plan.goal_index(),
                plan.cost()
            );

            let mut reordered = self.predicates.list().to_vec();
            Planner::reorder_consumed(&mut reordered, plan.consumed_ids());
            self.predicates.reset(reordered);

            self.plan = Some(plan);
            self.state = AgentState::Processing;
        }
    }

    fn process(&mut self, dt: Scalar) {
        if self.abort_requested {
            self.abort_requested = false;
            if let Some(plan) = self.plan.take() {
                if let Some(goal) = self.goals.get(plan.goal_index()) {
                    goal.borrow_mut().on_cancel(&mut self.predicates);
                }
            }
            log::debug!("agent aborted its active plan");
            self.state = AgentState::Planning;
            return;
        }

        let Some(plan) = self.plan.as_mut() else {
            self.state = AgentState::Planning;
            return;
        };

        if let Some(action) = plan.current_action_mut() {
            if action.process(dt) {
                let postconditions = action.postconditions().to_vec();
                for postcondition in postconditions {
                    self.predicates.add_or_replace(postcondition);
                }
                plan.advance();
            }
        }

        if plan.is_finished() {
            let goal_index = plan.goal_index();
            if let Some(goal) = self.goals.get(goal_index) {
                goal.borrow_mut().on_accomplished(&mut self.predicates);
            }
            log::debug!("agent accomplished goal {goal_index}");
            self.plan = None;
            self.state = AgentState::Planning;
        }
    }

    /// Adds (or replaces) a predicate from outside the tick loop, e.g. a
    /// one-off fact seeded by the host program. If the agent is currently
    /// PROCESSING and this predicate was not already held (by id and
    /// content), this requests an abort of the active plan on the next
    /// tick, since the world it was planned against has just changed. A
    /// goal that re-affirms a still-true belief every tick (as the
    /// cognitive stage does) does not repeatedly abort its own plan.
    pub fn on_new_predicate(&mut self, predicate: Predicate) {
        let already_held = self.predicates.find_by_id(predicate.id()) == Some(&predicate);
        self.predicates.add_or_replace(predicate);
        if self.state == AgentState::Processing && !already_held {
            self.abort_requested = true;
        }
    }

    pub fn current_state(&self) -> AgentState {
        self.state
    }

    pub fn has_predicate(&self, id: PredicateId) -> bool {
        self.predicates.find_by_id(id).is_some()
    }

    pub fn predicates(&self) -> &[Predicate] {
        self.predicates.list()
    }

    /// Reads the special `PlaceIam` predicate's `Place` payload, or an empty
    /// string if it is absent or carries a different payload shape.
    pub fn where_i_am(&self) -> String {
        match self.predicates.find_by_text("PlaceIam").map(Predicate::payload) {
            Some(PredicatePayload::Place(place)) => place.clone(),
            _ => String::new(),
        }
    }
}
