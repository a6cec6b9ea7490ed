//! Data models for the `WanderMate` application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Trip: Trip request parameters and enumerations

pub mod location;
pub mod trip;

// Re-export all public types for convenient access
pub use location::Location;
pub use trip::{CurrencyCode, TripRequest, TripType};
