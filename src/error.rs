//! Fail-fast errors for programmer-error invariant violations.
//!
//! Everything in this crate that represents an *expected* absence (no plan,
//! no path, no predicate found) is modeled as `Option`/`bool`, never as an
//! `Err`. The only errors this crate defines are for states that should
//! never happen if the caller respects the documented contracts; they exist
//! to give a clear panic message rather than to be recovered from.

use crate::predicate::PredicateId;
use thiserror::Error;

/// Programmer-error conditions that this crate fails fast on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GoapError {
    /// [`crate::predicates_handler::PredicatesHandler::add`] was called with
    /// an id that is already present. Callers that intend to overwrite must
    /// use `add_or_replace` instead.
    #[error("predicate id {0} already exists in the predicates handler")]
    DuplicatePredicateId(PredicateId),
    /// A `Weak` back-reference to the owning agent could not be upgraded,
    /// meaning the agent was dropped while one of its actions or goals was
    /// still alive. This can only happen if a goal or action outlives its
    /// agent, which violates the crate's ownership contract.
    #[error("action or goal outlived its agent")]
    AgentGone,
}
