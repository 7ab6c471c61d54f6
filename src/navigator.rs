//! High-level navigation facade.
//!
//! Ties the store providers to the route planner: resolves a session to
//! its current aisle and a promotion to its target aisle, assembles the
//! day's promotion-density snapshot, and runs the search.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::pathfinding::{AStarConfig, RoutePlan, RoutePlanner, RouteStep};
use crate::store::{PromotionCatalog, SessionLocationLog, StoreTopology};

/// A computed route to a promotion, shaped for API responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationRoute {
    /// Ordered steps from the shopper's aisle to the target, inclusive
    pub path: Vec<RouteStep>,
    /// Hop count along the route
    pub total_distance: u32,
    /// Sum of active promotions over all steps
    pub total_promotions: u32,
    /// The promotion that was navigated to
    pub target_promotion_id: u32,
    /// The aisle that promotion resolves to
    pub target_aisle_id: u32,
}

/// Store navigator: topology, promotions, and session locations behind
/// one planning API.
///
/// Topology stays resident between requests; only the promotion-density
/// snapshot is recomputed per request, since activity shifts with the
/// calendar while the floor plan rarely changes.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    topology: StoreTopology,
    promotions: PromotionCatalog,
    locations: SessionLocationLog,
    config: AStarConfig,
}

impl Navigator {
    /// Create an empty navigator with default planner settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with explicit planner settings
    pub fn with_config(config: AStarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create from a loaded configuration file
    pub fn from_config(config: &NavConfig) -> Self {
        Self::with_config(config.planner_config())
    }

    /// Store topology (read)
    pub fn topology(&self) -> &StoreTopology {
        &self.topology
    }

    /// Store topology (write, for administrative setup)
    pub fn topology_mut(&mut self) -> &mut StoreTopology {
        &mut self.topology
    }

    /// Promotion catalog (read)
    pub fn promotions(&self) -> &PromotionCatalog {
        &self.promotions
    }

    /// Promotion catalog (write)
    pub fn promotions_mut(&mut self) -> &mut PromotionCatalog {
        &mut self.promotions
    }

    /// Session location log (read)
    pub fn locations(&self) -> &SessionLocationLog {
        &self.locations
    }

    /// Session location log (write, fed by hardware location updates)
    pub fn locations_mut(&mut self) -> &mut SessionLocationLog {
        &mut self.locations
    }

    /// Find a route between two aisles using today's promotion activity
    pub fn find_path(&self, start_aisle_id: u32, target_aisle_id: u32) -> Result<RoutePlan> {
        self.find_path_on(start_aisle_id, target_aisle_id, Local::now().date_naive())
    }

    /// Find a route between two aisles as of a specific day
    pub fn find_path_on(
        &self,
        start_aisle_id: u32,
        target_aisle_id: u32,
        day: NaiveDate,
    ) -> Result<RoutePlan> {
        let density = self.promotions.active_counts(day);
        let planner = RoutePlanner::new(&self.topology, &density, self.config.clone());
        planner.find_path(start_aisle_id, target_aisle_id)
    }

    /// Route a session to a promotion using today's promotion activity
    pub fn route_to_promotion(&self, session_id: u32, promotion_id: u32) -> Result<NavigationRoute> {
        self.route_to_promotion_on(session_id, promotion_id, Local::now().date_naive())
    }

    /// Route a session to a promotion as of a specific day.
    ///
    /// Resolves the promotion to its aisle and the session to its last
    /// recorded aisle, then plans between them. An unreachable target
    /// yields a route with an empty `path`, matching [`RoutePlan`]'s
    /// empty-plan behavior.
    pub fn route_to_promotion_on(
        &self,
        session_id: u32,
        promotion_id: u32,
        day: NaiveDate,
    ) -> Result<NavigationRoute> {
        let target_aisle_id = self.promotions.aisle_of(promotion_id)?;
        let start_aisle_id = self
            .locations
            .current_aisle(session_id)
            .ok_or(NavError::SessionWithoutLocation(session_id))?;

        let plan = self.find_path_on(start_aisle_id, target_aisle_id, day)?;

        Ok(NavigationRoute {
            path: plan.steps,
            total_distance: plan.total_distance,
            total_promotions: plan.total_promotions,
            target_promotion_id: promotion_id,
            target_aisle_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Aisle, GridPosition, Promotion};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Row of aisles 1..=7, each connected to the next
    fn store() -> Navigator {
        let mut nav = Navigator::new();
        for id in 1..=7 {
            nav.topology_mut()
                .insert_aisle(Aisle::new(id, format!("Aisle {id}")));
            nav.topology_mut()
                .set_position(id, GridPosition::new(id as i32, 0))
                .unwrap();
        }
        for id in 1..=6 {
            nav.topology_mut().connect(id, id + 1).unwrap();
        }
        nav
    }

    #[test]
    fn test_route_to_promotion() {
        let mut nav = store();
        nav.promotions_mut().insert(Promotion::new(
            42,
            500,
            7,
            date(2026, 8, 1),
            date(2026, 8, 31),
        ));
        nav.locations_mut()
            .record(5, 3, Utc.timestamp_opt(1000, 0).unwrap());

        let route = nav.route_to_promotion_on(5, 42, date(2026, 8, 26)).unwrap();

        assert_eq!(route.target_promotion_id, 42);
        assert_eq!(route.target_aisle_id, 7);
        let ids: Vec<u32> = route.path.iter().map(|s| s.aisle_id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);
        assert_eq!(route.total_distance, 4);
        assert_eq!(route.total_promotions, 1);
    }

    #[test]
    fn test_route_when_already_at_target() {
        let mut nav = store();
        nav.promotions_mut().insert(Promotion::new(
            42,
            500,
            3,
            date(2026, 8, 1),
            date(2026, 8, 31),
        ));
        nav.locations_mut()
            .record(5, 3, Utc.timestamp_opt(1000, 0).unwrap());

        let route = nav.route_to_promotion_on(5, 42, date(2026, 8, 26)).unwrap();

        assert_eq!(route.path.len(), 1);
        assert_eq!(route.path[0].aisle_id, 3);
        assert_eq!(route.total_distance, 0);
        assert_eq!(route.total_promotions, 1);
    }

    #[test]
    fn test_session_without_location() {
        let mut nav = store();
        nav.promotions_mut().insert(Promotion::new(
            42,
            500,
            7,
            date(2026, 8, 1),
            date(2026, 8, 31),
        ));

        assert_eq!(
            nav.route_to_promotion_on(5, 42, date(2026, 8, 26)),
            Err(NavError::SessionWithoutLocation(5))
        );
    }

    #[test]
    fn test_promotion_resolution_errors() {
        let mut nav = store();
        let mut unassigned = Promotion::new(8, 500, 1, date(2026, 8, 1), date(2026, 8, 31));
        unassigned.aisle_id = None;
        nav.promotions_mut().insert(unassigned);
        nav.locations_mut().record_now(5, 3);

        assert_eq!(
            nav.route_to_promotion_on(5, 99, date(2026, 8, 26)),
            Err(NavError::UnknownPromotion(99))
        );
        assert_eq!(
            nav.route_to_promotion_on(5, 8, date(2026, 8, 26)),
            Err(NavError::PromotionWithoutAisle(8))
        );
    }

    #[test]
    fn test_density_snapshot_follows_the_day() {
        let mut nav = store();
        nav.promotions_mut().insert(Promotion::new(
            1,
            500,
            4,
            date(2026, 8, 1),
            date(2026, 8, 31),
        ));

        let during = nav.find_path_on(3, 5, date(2026, 8, 15)).unwrap();
        assert_eq!(during.total_promotions, 1);

        let after = nav.find_path_on(3, 5, date(2026, 9, 15)).unwrap();
        assert_eq!(after.total_promotions, 0);
    }

    #[test]
    fn test_latest_location_fix_is_used() {
        let mut nav = store();
        nav.promotions_mut().insert(Promotion::new(
            42,
            500,
            7,
            date(2026, 8, 1),
            date(2026, 8, 31),
        ));
        nav.locations_mut()
            .record(5, 1, Utc.timestamp_opt(1000, 0).unwrap());
        nav.locations_mut()
            .record(5, 6, Utc.timestamp_opt(2000, 0).unwrap());

        let route = nav.route_to_promotion_on(5, 42, date(2026, 8, 26)).unwrap();
        assert_eq!(route.path[0].aisle_id, 6);
        assert_eq!(route.total_distance, 1);
    }
}
