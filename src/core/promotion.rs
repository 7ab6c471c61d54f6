//! Promotion records and active-window checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A product promotion, optionally pinned to an aisle.
///
/// A promotion is *active* on a given day when that day falls inside the
/// inclusive `[start_date, end_date]` window. There is no explicit state
/// transition; activity is purely a function of the calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Unique promotion identifier
    pub id: u32,
    /// Product the promotion applies to
    pub product_id: u32,
    /// Aisle where the promoted product is shelved, if assigned
    pub aisle_id: Option<u32>,
    /// Human-readable description
    pub description: Option<String>,
    /// Absolute discount amount
    pub discount_amount: f32,
    /// First day the promotion is active (inclusive)
    pub start_date: NaiveDate,
    /// Last day the promotion is active (inclusive)
    pub end_date: NaiveDate,
}

impl Promotion {
    /// Create a promotion pinned to an aisle
    pub fn new(
        id: u32,
        product_id: u32,
        aisle_id: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            product_id,
            aisle_id: Some(aisle_id),
            description: None,
            discount_amount: 0.0,
            start_date,
            end_date,
        }
    }

    /// Whether the promotion is active on `day` (inclusive bounds)
    #[inline]
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_active_window_inclusive() {
        let promo = Promotion::new(1, 100, 3, date(2026, 8, 10), date(2026, 8, 20));

        assert!(!promo.is_active_on(date(2026, 8, 9)));
        assert!(promo.is_active_on(date(2026, 8, 10)));
        assert!(promo.is_active_on(date(2026, 8, 15)));
        assert!(promo.is_active_on(date(2026, 8, 20)));
        assert!(!promo.is_active_on(date(2026, 8, 21)));
    }

    #[test]
    fn test_single_day_window() {
        let promo = Promotion::new(1, 100, 3, date(2026, 8, 10), date(2026, 8, 10));
        assert!(promo.is_active_on(date(2026, 8, 10)));
        assert!(!promo.is_active_on(date(2026, 8, 11)));
    }
}
