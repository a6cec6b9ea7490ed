//! Fixed sample inventory
//!
//! Constant, hard-coded listings standing in for a real inventory service:
//! three flights, three hotels, and a 7-day fare trend anchored to today.
//! Not configurable, not randomized, not fetched.

use async_trait::async_trait;
use chrono::{Days, Utc};

use super::{FareTrendPoint, FlightOption, HotelOption, InventoryProvider, InventoryQuery};
use crate::Result;

/// Average fares for the 7-day trend, starting today
const TREND_FARES_USD: [f64; 7] = [800.0, 780.0, 820.0, 770.0, 790.0, 760.0, 805.0];

/// Inventory provider backed by fixed sample data
#[derive(Debug, Default, Clone)]
pub struct SampleInventory;

impl SampleInventory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InventoryProvider for SampleInventory {
    async fn flights(&self, query: &InventoryQuery) -> Result<Vec<FlightOption>> {
        let route = |airline: &str, stops: &str, price_usd: f64, duration: &str| FlightOption {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            airline: airline.to_string(),
            stops: stops.to_string(),
            price_usd,
            duration: duration.to_string(),
        };

        Ok(vec![
            route("Air Demo", "Non-stop", 800.0, "9h"),
            route("FlySample", "1 Stop", 650.0, "12h"),
            route("TestWings", "2 Stops", 580.0, "15h"),
        ])
    }

    async fn hotels(&self, _query: &InventoryQuery) -> Result<Vec<HotelOption>> {
        let hotel = |name: &str, rating: f64, nightly_rate_usd: f64| HotelOption {
            name: name.to_string(),
            rating,
            nightly_rate_usd,
        };

        Ok(vec![
            hotel("Dream Stay", 4.7, 220.0),
            hotel("Comfort Suites", 4.3, 180.0),
            hotel("Budget Inn", 4.0, 140.0),
        ])
    }

    async fn fare_trend(&self, _query: &InventoryQuery) -> Result<Vec<FareTrendPoint>> {
        let today = Utc::now().date_naive();
        Ok(TREND_FARES_USD
            .iter()
            .enumerate()
            .map(|(i, &avg_fare_usd)| FareTrendPoint {
                date: today + Days::new(i as u64),
                avg_fare_usd,
            })
            .collect())
    }
}
