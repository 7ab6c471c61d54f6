//! Session location fixes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded sighting of a shopping session in an aisle.
///
/// Fixes are append-only: hardware carts report locations throughout a
/// session, and newer fixes supersede older ones without mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Shopping session identifier
    pub session_id: u32,
    /// Aisle the session was seen in
    pub aisle_id: u32,
    /// When the fix was recorded
    pub recorded_at: DateTime<Utc>,
}

impl LocationFix {
    /// Create a new location fix
    pub fn new(session_id: u32, aisle_id: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            aisle_id,
            recorded_at,
        }
    }
}
