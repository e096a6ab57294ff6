//! Collaborator contracts for path-finding services the engine consumes.
//!
//! Navigation and pathfinding are explicitly out of scope for this crate;
//! these traits exist only so that action `process` closures and goals can
//! depend on a navigation collaborator without this crate providing (or
//! depending on) a concrete implementation.

use crate::predicate::Position;
use crate::Scalar;

/// A concrete path previously computed by a [`NavigationPlanner`].
pub trait NavigationPath {
    /// Whether the agent, standing at `position`, has reached the point at
    /// `index` along this path, within `epsilon` distance.
    fn has_reached_point(&self, index: usize, position: Position, epsilon: Scalar) -> bool;

    /// The world-space point at `index`, or `None` past the end of the path.
    fn get_point(&self, index: usize) -> Option<Position>;

    fn is_end_of_path(&self, index: usize) -> bool;

    /// Whether this path contains no points at all.
    fn empty(&self) -> bool;
}

/// Produces and estimates the cost of paths between world-space points.
///
/// Requests are asynchronous via callback rather than returning a future:
/// implementations invoke `on_ready` synchronously from within their own
/// update, once a path (or no path) has been found, so this crate never
/// needs its own task scheduling to consume one.
pub trait NavigationPlanner {
    /// Resolves a named place (as carried by a `PlaceIam`/`GoTo` predicate
    /// payload) to a concrete world-space position.
    fn fill_location_for(&self, place: &str) -> Option<Position>;

    /// Requests a path from `origin` to `destination`; `on_ready` receives
    /// the path, or `None` if the destination is unreachable.
    fn path_from_to(
        &mut self,
        origin: Position,
        destination: Position,
        on_ready: Box<dyn FnOnce(Option<Box<dyn NavigationPath>>)>,
    );

    /// A cheap upper-bound cost estimate, used by goals to rank candidate
    /// destinations without committing to a full path request.
    fn approx_cost(&self, origin: Position, destination: Position) -> u32;
}
