//! Route planning over the store graph.
//!
//! This module computes promotion-weighted routes between aisles:
//!
//! - **A* Search**: shortest path over the aisle adjacency graph, with
//!   edge costs discounted by active-promotion density at the
//!   destination aisle
//!
//! ## Finding a route
//!
//! ```rust,ignore
//! use vipani_nav::pathfinding::{AStarConfig, RoutePlanner};
//!
//! let planner = RoutePlanner::new(&topology, &density, AStarConfig::default());
//! let plan = planner.find_path(start, goal)?;
//! if plan.success() {
//!     println!("Route found with {} hops", plan.total_distance);
//! }
//! ```

pub mod astar;

pub use astar::{AStarConfig, PathFailure, RoutePlan, RoutePlanner, RouteStep, find_path, path_exists};
