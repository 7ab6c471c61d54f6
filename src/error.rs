//! Error types for VipaniNav

use thiserror::Error;

/// VipaniNav error type
///
/// Every variant is a per-request "not found" condition; nothing here is
/// fatal to the process. An unreachable target is *not* an error — the
/// planner returns an empty plan for that case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown aisle {0}")]
    UnknownAisle(u32),

    #[error("unknown promotion {0}")]
    UnknownPromotion(u32),

    #[error("promotion {0} is not assigned to an aisle")]
    PromotionWithoutAisle(u32),

    #[error("session {0} has no recorded location")]
    SessionWithoutLocation(u32),
}

pub type Result<T> = std::result::Result<T, NavError>;
