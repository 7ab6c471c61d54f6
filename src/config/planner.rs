//! Route planner configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::AStarConfig;

use super::defaults;

/// Planner settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Edge cost reduction per active promotion at the destination aisle
    #[serde(default = "defaults::discount_per_promotion")]
    pub discount_per_promotion: f32,

    /// Lower bound on the edge cost multiplier
    #[serde(default = "defaults::min_cost_factor")]
    pub min_cost_factor: f32,

    /// Maximum nodes to expand per search
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            discount_per_promotion: defaults::discount_per_promotion(),
            min_cost_factor: defaults::min_cost_factor(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl PlannerSection {
    /// Convert to the planner's runtime configuration
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            discount_per_promotion: self.discount_per_promotion,
            min_cost_factor: self.min_cost_factor,
            max_iterations: self.max_iterations,
        }
    }
}
