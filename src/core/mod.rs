//! Fundamental domain types.
//!
//! Small value types shared across the crate: aisles and their grid
//! positions, promotions, and session location fixes.

mod aisle;
mod location;
mod promotion;

pub use aisle::{Aisle, GridPosition};
pub use location::LocationFix;
pub use promotion::Promotion;
