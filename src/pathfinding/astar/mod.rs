//! Promotion-weighted A* search.
//!
//! Implements A* over the aisle adjacency graph with:
//! - Manhattan-distance heuristic on store grid positions
//! - Edge costs discounted by active-promotion density, floored so
//!   weights stay positive
//! - Deterministic tie-breaking by ascending aisle id

mod planner;
mod types;

pub use planner::RoutePlanner;
pub use types::{AStarConfig, PathFailure, RoutePlan, RouteStep};

use std::collections::HashMap;

use crate::error::Result;
use crate::store::StoreTopology;

/// Quick route finding with default configuration
pub fn find_path(
    topology: &StoreTopology,
    density: &HashMap<u32, u32>,
    start: u32,
    goal: u32,
) -> Result<RoutePlan> {
    let planner = RoutePlanner::with_defaults(topology, density);
    planner.find_path(start, goal)
}

/// Check if a route exists (same search, result discarded)
pub fn path_exists(
    topology: &StoreTopology,
    density: &HashMap<u32, u32>,
    start: u32,
    goal: u32,
) -> bool {
    find_path(topology, density, start, goal)
        .map(|plan| plan.success())
        .unwrap_or(false)
}
