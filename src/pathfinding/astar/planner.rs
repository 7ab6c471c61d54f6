//! A* route planner implementation.

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::error::{NavError, Result};
use crate::store::StoreTopology;

use super::types::{AStarConfig, PathFailure, RoutePlan, RouteStep, SearchNode};

/// Promotion-weighted A* route planner.
///
/// Borrows a topology snapshot and a per-aisle active-promotion density
/// map assembled by the caller. Planning is a pure computation: no
/// writes, no shared state, safe to run concurrently on shared borrows.
pub struct RoutePlanner<'a> {
    topology: &'a StoreTopology,
    density: &'a HashMap<u32, u32>,
    config: AStarConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new route planner
    pub fn new(
        topology: &'a StoreTopology,
        density: &'a HashMap<u32, u32>,
        config: AStarConfig,
    ) -> Self {
        Self {
            topology,
            density,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(topology: &'a StoreTopology, density: &'a HashMap<u32, u32>) -> Self {
        Self::new(topology, density, AStarConfig::default())
    }

    /// Find a route from start to goal aisle.
    ///
    /// Unknown aisle ids are errors. An unreachable goal is not: it
    /// yields an empty plan flagged with [`PathFailure::NoPath`].
    pub fn find_path(&self, start: u32, goal: u32) -> Result<RoutePlan> {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        if !self.topology.contains(start) {
            debug!("[AStar] FAILED: unknown start aisle {}", start);
            return Err(NavError::UnknownAisle(start));
        }
        if !self.topology.contains(goal) {
            debug!("[AStar] FAILED: unknown goal aisle {}", goal);
            return Err(NavError::UnknownAisle(goal));
        }

        // Already there: single-step plan, no search
        if start == goal {
            let step = self.make_step(start);
            let total_promotions = step.promotions_count;
            return Ok(RoutePlan {
                steps: vec![step],
                total_distance: 0,
                total_promotions,
                nodes_expanded: 0,
                failure: None,
            });
        }

        // A* search
        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<u32, u32> = HashMap::new();
        let mut g_scores: HashMap<u32, f32> = HashMap::new();

        let h_start = self.heuristic(start, goal);
        open_set.push(SearchNode {
            aisle_id: start,
            g_cost: 0.0,
            f_cost: h_start,
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return Ok(RoutePlan::unreachable(
                    PathFailure::MaxIterationsExceeded,
                    nodes_expanded,
                ));
            }

            // Goal reached
            if current.aisle_id == goal {
                return Ok(self.reconstruct_path(came_from, start, goal, current.g_cost, nodes_expanded));
            }

            if closed_set.contains(&current.aisle_id) {
                continue;
            }
            closed_set.insert(current.aisle_id);

            for &neighbor in self.topology.neighbors(current.aisle_id) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                // Base hop cost of 1, discounted by promotion density at
                // the destination aisle
                let promotions = self.density.get(&neighbor).copied().unwrap_or(0);
                let edge_cost = self.config.cost_factor(promotions);

                let tentative_g = g_scores[&current.aisle_id] + edge_cost;

                let current_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < current_g {
                    came_from.insert(neighbor, current.aisle_id);
                    g_scores.insert(neighbor, tentative_g);

                    let h = self.heuristic(neighbor, goal);
                    open_set.push(SearchNode {
                        aisle_id: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + h,
                    });
                }
            }
        }

        debug!(
            "[AStar] no route from {} to {} after expanding {} nodes",
            start, goal, nodes_expanded
        );
        Ok(RoutePlan::unreachable(PathFailure::NoPath, nodes_expanded))
    }

    /// Heuristic function: Manhattan distance on the store floor plan.
    ///
    /// Aisles without a recorded position get an infinite estimate, which
    /// disables heuristic guidance for that node; the search still
    /// terminates through the closed set.
    fn heuristic(&self, from: u32, to: u32) -> f32 {
        match (self.topology.position(from), self.topology.position(to)) {
            (Some(a), Some(b)) => a.manhattan_distance(b) as f32,
            _ => f32::INFINITY,
        }
    }

    /// Annotate one aisle as a route step
    fn make_step(&self, aisle_id: u32) -> RouteStep {
        let name = self
            .topology
            .aisle(aisle_id)
            .map(|a| a.name.clone())
            .unwrap_or_default();
        let (x, y) = self
            .topology
            .position(aisle_id)
            .map(|p| (p.x, p.y))
            .unwrap_or((0, 0));
        let promotions_count = self.density.get(&aisle_id).copied().unwrap_or(0);

        RouteStep {
            aisle_id,
            name,
            x,
            y,
            promotions_count,
        }
    }

    /// Reconstruct the route from the came_from map
    fn reconstruct_path(
        &self,
        came_from: HashMap<u32, u32>,
        start: u32,
        goal: u32,
        cost: f32,
        nodes_expanded: usize,
    ) -> RoutePlan {
        let mut aisle_ids = Vec::new();
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            aisle_ids.push(current);
            current = prev;
        }
        aisle_ids.push(start);
        aisle_ids.reverse();

        let steps: Vec<RouteStep> = aisle_ids.iter().map(|&id| self.make_step(id)).collect();
        let total_promotions = steps.iter().map(|s| s.promotions_count).sum();
        let total_distance = (steps.len() - 1) as u32;

        trace!(
            "[AStar] SUCCESS: route length={} hops, cost={:.2}, nodes_expanded={}",
            total_distance, cost, nodes_expanded
        );

        RoutePlan {
            steps,
            total_distance,
            total_promotions,
            nodes_expanded,
            failure: None,
        }
    }
}
