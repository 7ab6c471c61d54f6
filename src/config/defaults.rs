//! Default value functions for serde deserialization.

pub fn discount_per_promotion() -> f32 {
    0.1
}

pub fn min_cost_factor() -> f32 {
    0.5
}

pub fn max_iterations() -> usize {
    10_000
}
