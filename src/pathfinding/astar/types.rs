//! A* route planning types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A node in the A* search
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub aisle_id: u32,
    pub g_cost: f32, // Cost from start
    pub f_cost: f32, // g_cost + heuristic
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.aisle_id == other.aisle_id
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; equal costs fall back
        // to ascending aisle id so results are reproducible
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.aisle_id.cmp(&self.aisle_id))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* route planning configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarConfig {
    /// Edge cost reduction per active promotion at the destination aisle
    pub discount_per_promotion: f32,
    /// Lower bound on the edge cost multiplier (keeps weights positive)
    pub min_cost_factor: f32,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            discount_per_promotion: 0.1,
            min_cost_factor: 0.5,
            max_iterations: 10_000,
        }
    }
}

impl AStarConfig {
    /// Edge cost multiplier for a hop into an aisle with `promotions`
    /// active promotions. Never below `min_cost_factor`.
    #[inline]
    pub fn cost_factor(&self, promotions: u32) -> f32 {
        (1.0 - self.discount_per_promotion * promotions as f32).max(self.min_cost_factor)
    }
}

/// One aisle visited along a computed route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Aisle identifier
    pub aisle_id: u32,
    /// Aisle display name
    pub name: String,
    /// Grid X coordinate (0 when the aisle has no recorded position)
    pub x: i32,
    /// Grid Y coordinate (0 when the aisle has no recorded position)
    pub y: i32,
    /// Active promotions in this aisle
    pub promotions_count: u32,
}

/// Result of A* route planning
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    /// Ordered steps from start to goal inclusive (empty if no route found)
    pub steps: Vec<RouteStep>,
    /// Hop count along the route (steps − 1, or 0 for an empty route)
    pub total_distance: u32,
    /// Sum of active promotions over all steps
    pub total_promotions: u32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Why no route was produced, if the plan is empty
    pub failure: Option<PathFailure>,
}

impl RoutePlan {
    /// Create an empty plan for an unreachable goal.
    ///
    /// An unreachable goal is a normal outcome, not an error; callers that
    /// care about the distinction can inspect [`RoutePlan::failure`].
    pub(super) fn unreachable(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            steps: Vec::new(),
            total_distance: 0,
            total_promotions: 0,
            nodes_expanded,
            failure: Some(reason),
        }
    }

    /// Whether a route was found
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Whether the plan has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Reason no route was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// No route exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}
