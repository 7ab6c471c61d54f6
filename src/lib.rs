//! # VipaniNav: Promotion-Weighted In-Store Navigation
//!
//! Route planning for smart retail carts: given a shopper's current aisle
//! and a target promotion's aisle, compute a path over the store graph
//! using A* search where edge costs are discounted by the number of
//! active promotions at the destination aisle — routes are biased to pass
//! shoppers by promotion-dense aisles, with the discount capped at 50% so
//! edge weights stay positive.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vipani_nav::{Navigator, core::{Aisle, GridPosition}};
//!
//! let mut nav = Navigator::new();
//! nav.topology_mut().insert_aisle(Aisle::new(1, "Produce"));
//! nav.topology_mut().insert_aisle(Aisle::new(2, "Dairy"));
//! nav.topology_mut().set_position(1, GridPosition::new(0, 0)).unwrap();
//! nav.topology_mut().set_position(2, GridPosition::new(1, 0)).unwrap();
//! nav.topology_mut().connect(1, 2).unwrap();
//!
//! let plan = nav.find_path(1, 2).unwrap();
//! println!("Route: {} hops, {} promotions passed",
//!     plan.total_distance, plan.total_promotions);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types (Aisle, GridPosition, Promotion, LocationFix)
//! - [`store`]: In-memory providers (topology, promotion catalog, session locations)
//! - [`pathfinding`]: Promotion-weighted A* route planning
//! - [`config`]: YAML configuration loading
//!
//! The [`Navigator`] facade ties them together: topology is held resident
//! between requests while the promotion-density snapshot is recomputed per
//! request, since promotion activity is a pure function of the calendar.
//!
//! Planning is a pure read-and-compute operation with no shared mutable
//! state; concurrent requests on a shared `&Navigator` need no
//! coordination.

pub mod config;
pub mod core;
pub mod error;
pub mod navigator;
pub mod pathfinding;
pub mod store;

// Re-export main types at crate root
pub use config::{ConfigLoadError, NavConfig};
pub use error::{NavError, Result};
pub use navigator::{NavigationRoute, Navigator};
pub use pathfinding::{AStarConfig, PathFailure, RoutePlan, RoutePlanner, RouteStep};
pub use store::{PromotionCatalog, SessionLocationLog, StoreTopology};
