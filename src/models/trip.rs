//! Trip request parameters and enumerations

use crate::{Result, WanderMateError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted total budget, in the selected currency
pub const MIN_BUDGET: f64 = 100.0;

/// User-selected trip category, used only in the tips prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    Honeymoon,
    Solo,
    Family,
    Adventure,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TripType::Honeymoon => "Honeymoon",
            TripType::Solo => "Solo",
            TripType::Family => "Family",
            TripType::Adventure => "Adventure",
        };
        write!(f, "{name}")
    }
}

/// Supported budget currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Inr,
    Eur,
    Gbp,
    Jpy,
}

impl CurrencyCode {
    /// ISO 4217 code as sent to the exchange-rate API
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single trip-planning submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin city, free text
    pub origin: String,
    /// Destination city and country, free text
    pub destination: String,
    /// Trip category
    pub trip_type: TripType,
    /// Departure date
    pub departure_date: NaiveDate,
    /// Return date
    pub return_date: NaiveDate,
    /// Total budget in the selected currency
    pub budget: f64,
    /// Budget currency
    pub currency: CurrencyCode,
    /// Whether to include an airport taxi in the estimate
    #[serde(default)]
    pub include_taxi: bool,
}

impl TripRequest {
    /// Validate the request before any adapter is called.
    ///
    /// Misordered dates are rejected here rather than silently floored
    /// downstream; the estimator's floor still guards same-day trips.
    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() {
            return Err(WanderMateError::validation("Origin cannot be empty"));
        }
        if self.destination.trim().is_empty() {
            return Err(WanderMateError::validation("Destination cannot be empty"));
        }
        if !self.budget.is_finite() || self.budget < MIN_BUDGET {
            return Err(WanderMateError::validation(format!(
                "Budget must be at least {MIN_BUDGET:.0} {}",
                self.currency
            )));
        }
        if self.return_date < self.departure_date {
            return Err(WanderMateError::validation(
                "Return date cannot be before departure date",
            ));
        }
        Ok(())
    }
}
