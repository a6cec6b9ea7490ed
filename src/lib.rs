//! `WanderMate` - Smart travel planning service
//!
//! This library provides the core functionality for trip planning:
//! destination geocoding, sample flight and hotel listings, currency-aware
//! budget estimation, and AI-generated travel tips.

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod estimator;
pub mod geocoding;
pub mod inventory;
pub mod models;
pub mod planner;
pub mod tips;
pub mod web;

// Re-export core types for public API
pub use config::WanderMateConfig;
pub use currency::{CurrencyClient, RateService};
pub use error::WanderMateError;
pub use estimator::BudgetBreakdown;
pub use geocoding::{GeocodeService, GeocodingClient};
pub use inventory::{FareTrendPoint, FlightOption, HotelOption, InventoryProvider, SampleInventory};
pub use models::{CurrencyCode, Location, TripRequest, TripType};
pub use planner::{TripPlan, TripPlanner};
pub use tips::{TipsClient, TipsService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WanderMateError>;
