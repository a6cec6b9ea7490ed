//! Budget estimation
//!
//! Combines the priced listings, the stay length, and the converted budget
//! into a [`BudgetBreakdown`]. This is a pure function: no I/O, no
//! fallibility, same inputs always produce the same output. All adapter
//! failures are resolved by the caller before this point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::inventory::{FlightOption, HotelOption};

/// Flat airport-taxi fee in USD
pub const TAXI_FEE_USD: f64 = 50.0;

/// Cost components and totals computed for one submission.
///
/// All amounts are USD at full `f64` precision; rounding happens only in
/// [`BudgetBreakdown::rounded`] at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    /// Nights of hotel stay, floored at 1
    pub nights: i64,
    /// USD-to-target conversion factor used (1.0 when degraded)
    pub rate: f64,
    /// Budget converted to USD
    pub budget_usd: f64,
    /// Cheapest listed flight
    pub flight_cost: f64,
    /// Mean nightly rate times nights
    pub hotel_cost: f64,
    /// Flat taxi fee, or zero
    pub taxi_cost: f64,
    /// Sum of the three cost components
    pub total_estimate: f64,
    /// Converted budget minus the total estimate; may be negative
    pub remaining_budget: f64,
}

impl BudgetBreakdown {
    /// Copy with all monetary amounts rounded to 2 decimal places, for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        let round2 = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            nights: self.nights,
            rate: self.rate,
            budget_usd: round2(self.budget_usd),
            flight_cost: round2(self.flight_cost),
            hotel_cost: round2(self.hotel_cost),
            taxi_cost: round2(self.taxi_cost),
            total_estimate: round2(self.total_estimate),
            remaining_budget: round2(self.remaining_budget),
        }
    }
}

/// Whole nights between departure and return, floored at 1.
///
/// The floor covers same-day trips; misordered pairs are rejected upstream
/// but would floor to 1 here as well rather than go negative.
#[must_use]
pub fn nights_between(departure_date: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - departure_date).num_days().max(1)
}

/// Estimate the trip budget.
///
/// `rate` is the USD-to-target conversion factor (> 0); a degraded rate of
/// exactly 1.0 from a failed lookup is a valid input, not an error.
/// `flights` and `hotels` are expected to be non-empty; an empty table
/// contributes zero cost.
#[must_use]
pub fn estimate(
    budget: f64,
    rate: f64,
    departure_date: NaiveDate,
    return_date: NaiveDate,
    include_taxi: bool,
    flights: &[FlightOption],
    hotels: &[HotelOption],
) -> BudgetBreakdown {
    let budget_usd = budget / rate;
    let nights = nights_between(departure_date, return_date);

    let hotel_cost = if hotels.is_empty() {
        0.0
    } else {
        let mean_rate: f64 =
            hotels.iter().map(|h| h.nightly_rate_usd).sum::<f64>() / hotels.len() as f64;
        nights as f64 * mean_rate
    };

    let flight_cost = flights
        .iter()
        .map(|f| f.price_usd)
        .reduce(f64::min)
        .unwrap_or(0.0);

    let taxi_cost = if include_taxi { TAXI_FEE_USD } else { 0.0 };

    let total_estimate = hotel_cost + flight_cost + taxi_cost;
    let remaining_budget = budget_usd - total_estimate;

    BudgetBreakdown {
        nights,
        rate,
        budget_usd,
        flight_cost,
        hotel_cost,
        taxi_cost,
        total_estimate,
        remaining_budget,
    }
}
