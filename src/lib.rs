//! __A Goal-Oriented Action Planning engine for autonomous agents.__
//!
//! Main concepts
//! ---
//! - __Predicate__ / __Action__ - typed world facts and the preconditioned,
//!   postconditioned operators that transform them ([`crate::predicate`],
//!   [`crate::action`])
//! - __Goal__ - a named bundle of candidate actions, plus the rules for
//!   turning sensed stimuli into predicates ([`crate::goal`])
//! - __Planner__ - searches an agent's goals for a minimum-cost chain of
//!   actions ([`crate::planner`], [`crate::plan`])
//! - __Agent__ - the state machine that drives planning and executes the
//!   chosen plan one action per tick ([`crate::agent`])
//! - __Sensory / Memory / Cognitive__ - the pipeline that turns raw stimuli
//!   into predicates, with time-to-live retention in between
//!   ([`crate::sensory`], [`crate::memory`], [`crate::cognitive`],
//!   [`crate::perception`])
//!
//! This crate has no opinion on navigation or domain-specific actions; see
//! [`crate::navigation`] for the trait-only boundary a host program
//! implements to plug a pathfinding service in.

pub mod action;
pub mod agent;
pub mod cognitive;
pub mod error;
pub mod goal;
pub mod memory;
pub mod navigation;
pub mod perception;
pub mod plan;
pub mod planner;
pub mod predicate;
pub mod predicates_handler;
pub mod pubsub;
pub mod sensory;
pub mod stimulus;


#[cfg(not(feature = "scalar64"))]
pub type Scalar = f32;
#[cfg(feature = "scalar64")]
pub type Scalar = f64;

pub mod prelude {
    pub use crate::{
        action::Action,
        agent::{Agent, AgentState},
        cognitive::CognitiveSystem,
        error::GoapError,
        goal::Goal,
        memory::ShortTermMemory,
        navigation::{NavigationPath, NavigationPlanner},
        perception::PerceptionSystem,
        plan::Plan,
        planner::Planner,
        predicate::{Position, Predicate, PredicateId, PredicatePayload},
        predicates_handler::PredicatesHandler,
        pubsub::{Publisher, SharedPublisher, Subscriber},
        sensory::{FixedThreshold, Sensor, SensorySystem, Threshold},
        stimulus::{Identifiable, Stimulus, StimulusId},
        Scalar,
    };
}
