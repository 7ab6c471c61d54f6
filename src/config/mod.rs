//! Unified configuration loading for VipaniNav.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod planner;
mod vipani;

pub use error::ConfigLoadError;
pub use planner::PlannerSection;
pub use vipani::NavConfig;
