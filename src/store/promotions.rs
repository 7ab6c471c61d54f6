//! Promotion catalog and per-aisle density queries.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::core::Promotion;
use crate::error::{NavError, Result};

/// All known promotions, indexed by id.
///
/// The catalog answers two questions for the path engine: which aisle a
/// promotion lives in, and how many promotions are active per aisle on a
/// given day (the density snapshot that biases edge costs).
#[derive(Clone, Debug, Default)]
pub struct PromotionCatalog {
    promotions: BTreeMap<u32, Promotion>,
}

impl PromotionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a promotion, replacing any existing record with the same id
    pub fn insert(&mut self, promotion: Promotion) {
        self.promotions.insert(promotion.id, promotion);
    }

    /// Look up a promotion by id
    pub fn get(&self, promotion_id: u32) -> Option<&Promotion> {
        self.promotions.get(&promotion_id)
    }

    /// Resolve the aisle a promotion is shelved in.
    pub fn aisle_of(&self, promotion_id: u32) -> Result<u32> {
        let promotion = self
            .promotions
            .get(&promotion_id)
            .ok_or(NavError::UnknownPromotion(promotion_id))?;
        promotion
            .aisle_id
            .ok_or(NavError::PromotionWithoutAisle(promotion_id))
    }

    /// Count promotions active on `day` in one aisle
    pub fn active_count(&self, aisle_id: u32, day: NaiveDate) -> u32 {
        self.promotions
            .values()
            .filter(|p| p.aisle_id == Some(aisle_id) && p.is_active_on(day))
            .count() as u32
    }

    /// Active-promotion count per aisle on `day`.
    ///
    /// Aisles without active promotions are absent from the map; readers
    /// treat absence as zero.
    pub fn active_counts(&self, day: NaiveDate) -> HashMap<u32, u32> {
        let mut counts = HashMap::new();
        for promotion in self.promotions.values() {
            if let Some(aisle_id) = promotion.aisle_id {
                if promotion.is_active_on(day) {
                    *counts.entry(aisle_id).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Number of promotions in the catalog
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> PromotionCatalog {
        let mut catalog = PromotionCatalog::new();
        catalog.insert(Promotion::new(1, 10, 5, date(2026, 8, 1), date(2026, 8, 31)));
        catalog.insert(Promotion::new(2, 11, 5, date(2026, 8, 1), date(2026, 8, 10)));
        catalog.insert(Promotion::new(3, 12, 7, date(2026, 8, 1), date(2026, 8, 31)));
        let mut unassigned = Promotion::new(4, 13, 0, date(2026, 8, 1), date(2026, 8, 31));
        unassigned.aisle_id = None;
        catalog.insert(unassigned);
        catalog
    }

    #[test]
    fn test_active_counts_respect_window() {
        let catalog = catalog();

        let counts = catalog.active_counts(date(2026, 8, 5));
        assert_eq!(counts.get(&5), Some(&2));
        assert_eq!(counts.get(&7), Some(&1));

        let counts = catalog.active_counts(date(2026, 8, 20));
        assert_eq!(counts.get(&5), Some(&1));
    }

    #[test]
    fn test_unassigned_promotions_not_counted() {
        let counts = catalog().active_counts(date(2026, 8, 5));
        assert_eq!(counts.get(&0), None);
    }

    #[test]
    fn test_inactive_day_has_no_entries() {
        let counts = catalog().active_counts(date(2026, 9, 1));
        assert!(counts.is_empty());
    }

    #[test]
    fn test_active_count_single_aisle() {
        let catalog = catalog();
        assert_eq!(catalog.active_count(5, date(2026, 8, 5)), 2);
        assert_eq!(catalog.active_count(5, date(2026, 8, 11)), 1);
        assert_eq!(catalog.active_count(9, date(2026, 8, 5)), 0);
    }

    #[test]
    fn test_aisle_of() {
        let catalog = catalog();
        assert_eq!(catalog.aisle_of(1), Ok(5));
        assert_eq!(catalog.aisle_of(4), Err(NavError::PromotionWithoutAisle(4)));
        assert_eq!(catalog.aisle_of(99), Err(NavError::UnknownPromotion(99)));
    }
}
