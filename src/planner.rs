//! Trip planning pipeline
//!
//! Runs one submission through the fixed sequence: validate, geocode,
//! fetch listings, resolve the exchange rate, estimate the budget,
//! generate tips. The three network adapters are each attempted once; the
//! currency and tips lookups degrade gracefully, and an unresolved
//! destination skips the map section instead of aborting the plan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::estimator::{self, BudgetBreakdown};
use crate::geocoding::GeocodeService;
use crate::inventory::{
    FareTrendPoint, FlightOption, HotelOption, InventoryProvider, InventoryQuery,
};
use crate::models::{Location, TripRequest};
use crate::tips::TipsService;
use crate::{RateService, Result};

/// Everything rendered for one submission, sections in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    /// Resolved destination for the map; `None` when geocoding failed
    pub destination: Option<Location>,
    /// Flight listings
    pub flights: Vec<FlightOption>,
    /// Hotel listings
    pub hotels: Vec<HotelOption>,
    /// 7-day fare trend
    pub fare_trend: Vec<FareTrendPoint>,
    /// Budget breakdown at full precision
    pub breakdown: BudgetBreakdown,
    /// Travel tips, or the fallback message when the lookup failed
    pub tips: String,
    /// Non-fatal degradations surfaced to the user
    pub warnings: Vec<String>,
}

/// Orchestrates one trip submission across the adapter seams
pub struct TripPlanner {
    geocoder: Arc<dyn GeocodeService>,
    rates: Arc<dyn RateService>,
    tips: Arc<dyn TipsService>,
    inventory: Arc<dyn InventoryProvider>,
}

impl TripPlanner {
    pub fn new(
        geocoder: Arc<dyn GeocodeService>,
        rates: Arc<dyn RateService>,
        tips: Arc<dyn TipsService>,
        inventory: Arc<dyn InventoryProvider>,
    ) -> Self {
        Self {
            geocoder,
            rates,
            tips,
            inventory,
        }
    }

    /// Plan a trip. The only hard error is input validation; adapter
    /// failures degrade into warnings or fallback text.
    #[instrument(skip(self, request), fields(destination = %request.destination))]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        request.validate()?;

        let mut warnings = Vec::new();

        let destination = match self.geocoder.resolve(&request.destination).await {
            Ok(locations) => locations.into_iter().next(),
            Err(e) => {
                warn!("Geocoding failed: {}", e);
                warnings.push(e.user_message());
                None
            }
        };

        let query = InventoryQuery {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            departure_date: request.departure_date,
            return_date: request.return_date,
        };
        let flights = self.inventory.flights(&query).await?;
        let hotels = self.inventory.hotels(&query).await?;
        let fare_trend = self.inventory.fare_trend(&query).await?;

        let rate = match self.rates.usd_rate(request.currency).await {
            Ok(rate) => rate,
            Err(e) => {
                warn!("Exchange-rate lookup failed: {}", e);
                warnings.push(e.user_message());
                1.0
            }
        };

        let breakdown = estimator::estimate(
            request.budget,
            rate,
            request.departure_date,
            request.return_date,
            request.include_taxi,
            &flights,
            &hotels,
        );

        let tips = match self.tips.travel_tips(request).await {
            Ok(tips) => tips,
            Err(e) => {
                warn!("Tips lookup failed: {}", e);
                e.user_message()
            }
        };

        info!(
            "Planned trip to {}: total estimate {:.2} USD, {} warning(s)",
            request.destination,
            breakdown.total_estimate,
            warnings.len()
        );

        Ok(TripPlan {
            destination,
            flights,
            hotels,
            fare_trend,
            breakdown,
            tips,
            warnings,
        })
    }
}
