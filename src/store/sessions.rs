//! Append-only session location log.

use chrono::{DateTime, Utc};

use crate::core::LocationFix;

/// Location fixes reported by hardware carts, in append order.
///
/// A session's current aisle is its most recent fix by `recorded_at`;
/// when two fixes carry the same timestamp the later append wins. A
/// session with no fixes has no current aisle — unknown location is
/// `None`, never aisle 0.
#[derive(Clone, Debug, Default)]
pub struct SessionLocationLog {
    fixes: Vec<LocationFix>,
}

impl SessionLocationLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a location fix
    pub fn record(&mut self, session_id: u32, aisle_id: u32, recorded_at: DateTime<Utc>) {
        self.fixes
            .push(LocationFix::new(session_id, aisle_id, recorded_at));
    }

    /// Append a location fix stamped with the current time
    pub fn record_now(&mut self, session_id: u32, aisle_id: u32) {
        self.record(session_id, aisle_id, Utc::now());
    }

    /// The aisle the session was last seen in, if any fix exists
    pub fn current_aisle(&self, session_id: u32) -> Option<u32> {
        let mut latest: Option<&LocationFix> = None;
        for fix in self.fixes.iter().filter(|f| f.session_id == session_id) {
            match latest {
                Some(best) if fix.recorded_at < best.recorded_at => {}
                _ => latest = Some(fix),
            }
        }
        latest.map(|fix| fix.aisle_id)
    }

    /// Number of recorded fixes across all sessions
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    /// Whether the log has no fixes
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_no_fixes_means_unknown() {
        let log = SessionLocationLog::new();
        assert_eq!(log.current_aisle(5), None);
    }

    #[test]
    fn test_latest_fix_wins() {
        let mut log = SessionLocationLog::new();
        log.record(5, 1, ts(100));
        log.record(5, 2, ts(300));
        log.record(5, 3, ts(200));

        assert_eq!(log.current_aisle(5), Some(2));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut log = SessionLocationLog::new();
        log.record(5, 1, ts(100));
        log.record(6, 9, ts(500));

        assert_eq!(log.current_aisle(5), Some(1));
        assert_eq!(log.current_aisle(6), Some(9));
        assert_eq!(log.current_aisle(7), None);
    }

    #[test]
    fn test_equal_timestamps_later_append_wins() {
        let mut log = SessionLocationLog::new();
        log.record(5, 1, ts(100));
        log.record(5, 2, ts(100));

        assert_eq!(log.current_aisle(5), Some(2));
    }
}
