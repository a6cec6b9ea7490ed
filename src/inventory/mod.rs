//! Travel inventory module
//!
//! This module provides the listing types shown to the user and the
//! provider seam behind them. The estimator only sees priced options, so a
//! real flight/hotel integration can replace [`SampleInventory`] without
//! touching any downstream code.

pub mod sample;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Result;

pub use sample::SampleInventory;

/// A priced flight listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOption {
    pub origin: String,
    pub destination: String,
    pub airline: String,
    /// Stop count descriptor, e.g. "Non-stop" or "1 Stop"
    pub stops: String,
    pub price_usd: f64,
    /// Total travel time, e.g. "9h"
    pub duration: String,
}

/// A priced hotel listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOption {
    pub name: String,
    pub rating: f64,
    pub nightly_rate_usd: f64,
}

/// One point of the average-fare time series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTrendPoint {
    pub date: NaiveDate,
    pub avg_fare_usd: f64,
}

/// Route and dates an inventory lookup is scoped to
#[derive(Debug, Clone)]
pub struct InventoryQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

/// Source of priced travel options for a route.
///
/// Implementations must return non-empty listings for any query they
/// accept; the estimator treats the tables as exhaustive.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// Priced flight options for the route
    async fn flights(&self, query: &InventoryQuery) -> Result<Vec<FlightOption>>;

    /// Priced hotel options at the destination
    async fn hotels(&self, query: &InventoryQuery) -> Result<Vec<HotelOption>>;

    /// Recent average-fare trend for the route
    async fn fare_trend(&self, query: &InventoryQuery) -> Result<Vec<FareTrendPoint>>;
}
