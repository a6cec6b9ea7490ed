//! End-to-end pipeline tests with stub adapters
//!
//! Exercises the planner against in-memory service implementations to
//! verify the degradation contract: adapter failures never abort the
//! plan, and the budget breakdown is always produced.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use wandermate::inventory::InventoryProvider;
use wandermate::models::{CurrencyCode, Location, TripRequest, TripType};
use wandermate::{
    GeocodeService, RateService, SampleInventory, TipsService, TripPlanner, WanderMateError,
};

struct StaticGeocoder;

#[async_trait]
impl GeocodeService for StaticGeocoder {
    async fn resolve(&self, _query: &str) -> wandermate::Result<Vec<Location>> {
        Ok(vec![Location::with_country(
            48.8566,
            2.3522,
            "Paris".to_string(),
            "France".to_string(),
        )])
    }
}

struct FailingGeocoder;

#[async_trait]
impl GeocodeService for FailingGeocoder {
    async fn resolve(&self, query: &str) -> wandermate::Result<Vec<Location>> {
        Err(WanderMateError::geocoding(format!(
            "Location not found: {query}"
        )))
    }
}

struct StaticRates(f64);

#[async_trait]
impl RateService for StaticRates {
    async fn usd_rate(&self, _currency: CurrencyCode) -> wandermate::Result<f64> {
        Ok(self.0)
    }
}

struct FailingRates;

#[async_trait]
impl RateService for FailingRates {
    async fn usd_rate(&self, _currency: CurrencyCode) -> wandermate::Result<f64> {
        Err(WanderMateError::currency("connection refused"))
    }
}

struct StaticTips;

#[async_trait]
impl TipsService for StaticTips {
    async fn travel_tips(&self, _request: &TripRequest) -> wandermate::Result<String> {
        Ok("Book ahead. Pack light. Learn a few phrases.".to_string())
    }
}

struct FailingTips;

#[async_trait]
impl TipsService for FailingTips {
    async fn travel_tips(&self, _request: &TripRequest) -> wandermate::Result<String> {
        Err(WanderMateError::tips("HTTP 401"))
    }
}

fn planner(
    geocoder: Arc<dyn GeocodeService>,
    rates: Arc<dyn RateService>,
    tips: Arc<dyn TipsService>,
) -> TripPlanner {
    let inventory: Arc<dyn InventoryProvider> = Arc::new(SampleInventory::new());
    TripPlanner::new(geocoder, rates, tips, inventory)
}

fn request() -> TripRequest {
    TripRequest {
        origin: "New Delhi".to_string(),
        destination: "Paris, France".to_string(),
        trip_type: TripType::Honeymoon,
        departure_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
        budget: 1000.0,
        currency: CurrencyCode::Usd,
        include_taxi: true,
    }
}

#[tokio::test]
async fn plan_renders_all_sections() {
    let planner = planner(
        Arc::new(StaticGeocoder),
        Arc::new(StaticRates(1.0)),
        Arc::new(StaticTips),
    );

    let plan = planner.plan(&request()).await.unwrap();

    let destination = plan.destination.unwrap();
    assert_eq!(destination.name, "Paris");
    assert_eq!(plan.flights.len(), 3);
    assert_eq!(plan.hotels.len(), 3);
    assert_eq!(plan.fare_trend.len(), 7);
    assert!(plan.tips.contains("Pack light"));
    assert!(plan.warnings.is_empty());

    // The reference scenario: 3 nights, taxi included
    assert_eq!(plan.breakdown.nights, 3);
    assert_eq!(plan.breakdown.hotel_cost, 540.0);
    assert_eq!(plan.breakdown.flight_cost, 580.0);
    assert_eq!(plan.breakdown.taxi_cost, 50.0);
    assert_eq!(plan.breakdown.total_estimate, 1170.0);
    assert_eq!(plan.breakdown.remaining_budget, -170.0);
}

#[tokio::test]
async fn plan_converts_budget_with_resolved_rate() {
    let planner = planner(
        Arc::new(StaticGeocoder),
        Arc::new(StaticRates(83.0)),
        Arc::new(StaticTips),
    );

    let mut req = request();
    req.currency = CurrencyCode::Inr;
    req.budget = 83000.0;

    let plan = planner.plan(&req).await.unwrap();
    assert_eq!(plan.breakdown.rate, 83.0);
    assert_eq!(plan.breakdown.budget_usd, 1000.0);
}

#[tokio::test]
async fn currency_failure_degrades_to_unit_rate() {
    let planner = planner(
        Arc::new(StaticGeocoder),
        Arc::new(FailingRates),
        Arc::new(StaticTips),
    );

    let mut req = request();
    req.currency = CurrencyCode::Eur;

    let plan = planner.plan(&req).await.unwrap();

    // Full breakdown is still produced at the degraded 1:1 rate
    assert_eq!(plan.breakdown.rate, 1.0);
    assert_eq!(plan.breakdown.budget_usd, 1000.0);
    assert_eq!(plan.breakdown.total_estimate, 1170.0);
    assert!(
        plan.warnings
            .iter()
            .any(|w| w.contains("default 1:1 rate"))
    );
}

#[tokio::test]
async fn tips_failure_degrades_to_fixed_message() {
    let planner = planner(
        Arc::new(StaticGeocoder),
        Arc::new(StaticRates(1.0)),
        Arc::new(FailingTips),
    );

    let plan = planner.plan(&request()).await.unwrap();

    assert!(plan.tips.contains("Travel tips are unavailable"));
    // Everything else still renders
    assert!(plan.destination.is_some());
    assert_eq!(plan.flights.len(), 3);
    assert_eq!(plan.breakdown.total_estimate, 1170.0);
}

#[tokio::test]
async fn geocode_failure_skips_map_and_continues() {
    let planner = planner(
        Arc::new(FailingGeocoder),
        Arc::new(StaticRates(1.0)),
        Arc::new(StaticTips),
    );

    let plan = planner.plan(&request()).await.unwrap();

    assert!(plan.destination.is_none());
    assert!(
        plan.warnings
            .iter()
            .any(|w| w.contains("Could not locate the destination"))
    );
    assert_eq!(plan.hotels.len(), 3);
    assert_eq!(plan.breakdown.total_estimate, 1170.0);
}

#[tokio::test]
async fn misordered_dates_are_rejected_before_adapters() {
    let planner = planner(
        Arc::new(FailingGeocoder),
        Arc::new(FailingRates),
        Arc::new(FailingTips),
    );

    let mut req = request();
    req.return_date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

    let err = planner.plan(&req).await.unwrap_err();
    assert!(matches!(err, WanderMateError::Validation { .. }));
}

#[tokio::test]
async fn same_day_trip_floors_to_one_night() {
    let planner = planner(
        Arc::new(StaticGeocoder),
        Arc::new(StaticRates(1.0)),
        Arc::new(StaticTips),
    );

    let mut req = request();
    req.return_date = req.departure_date;
    req.include_taxi = false;

    let plan = planner.plan(&req).await.unwrap();
    assert_eq!(plan.breakdown.nights, 1);
    assert_eq!(plan.breakdown.hotel_cost, 180.0);
}
