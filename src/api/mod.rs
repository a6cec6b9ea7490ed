use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::estimator::BudgetBreakdown;
use crate::inventory::{FareTrendPoint, FlightOption, HotelOption};
use crate::models::TripRequest;
use crate::planner::{TripPlan, TripPlanner};
use crate::{VERSION, WanderMateError};

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
}

/// Map section of the response
#[derive(Serialize, Deserialize)]
pub struct ApiMapSection {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Embeddable map URL centered on the destination
    pub embed_url: String,
}

/// Budget section of the response, amounts rounded to 2 decimal places
#[derive(Serialize, Deserialize)]
pub struct ApiBudgetSection {
    pub nights: i64,
    pub rate: f64,
    pub budget_usd: f64,
    pub flight_cost: f64,
    pub hotel_cost: f64,
    pub taxi_cost: f64,
    pub total_estimate: f64,
    pub remaining_budget: f64,
}

impl From<&BudgetBreakdown> for ApiBudgetSection {
    fn from(breakdown: &BudgetBreakdown) -> Self {
        let rounded = breakdown.rounded();
        Self {
            nights: rounded.nights,
            rate: rounded.rate,
            budget_usd: rounded.budget_usd,
            flight_cost: rounded.flight_cost,
            hotel_cost: rounded.hotel_cost,
            taxi_cost: rounded.taxi_cost,
            total_estimate: rounded.total_estimate,
            remaining_budget: rounded.remaining_budget,
        }
    }
}

/// Full plan response; field order matches the rendered section order
#[derive(Serialize, Deserialize)]
pub struct ApiTripPlan {
    pub map: Option<ApiMapSection>,
    pub flights: Vec<FlightOption>,
    pub hotels: Vec<HotelOption>,
    pub fare_trend: Vec<FareTrendPoint>,
    pub budget: ApiBudgetSection,
    pub tips: String,
    pub warnings: Vec<String>,
}

impl From<&TripPlan> for ApiTripPlan {
    fn from(plan: &TripPlan) -> Self {
        Self {
            map: plan.destination.as_ref().map(|location| ApiMapSection {
                name: location.name.clone(),
                country: location.country.clone(),
                latitude: location.latitude,
                longitude: location.longitude,
                embed_url: location.map_url(),
            }),
            flights: plan.flights.clone(),
            hotels: plan.hotels.clone(),
            fare_trend: plan.fare_trend.clone(),
            budget: ApiBudgetSection::from(&plan.breakdown),
            tips: plan.tips.clone(),
            warnings: plan.warnings.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub version: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(plan_trip))
        .route("/health", get(health))
        .with_state(state)
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<ApiTripPlan>, (StatusCode, String)> {
    let plan = state.planner.plan(&request).await.map_err(|e| match e {
        WanderMateError::Validation { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.user_message())
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.user_message()),
    })?;

    Ok(Json(ApiTripPlan::from(&plan)))
}

async fn health() -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::{CurrencyClient, GeocodingClient, SampleInventory, TipsClient, WanderMateConfig};

    fn breakdown() -> BudgetBreakdown {
        BudgetBreakdown {
            nights: 3,
            rate: 3.0,
            budget_usd: 1000.0 / 3.0,
            flight_cost: 580.0,
            hotel_cost: 540.0,
            taxi_cost: 50.0,
            total_estimate: 1170.0,
            remaining_budget: 1000.0 / 3.0 - 1170.0,
        }
    }

    #[test]
    fn test_budget_section_rounds_to_two_decimals() {
        let section = ApiBudgetSection::from(&breakdown());
        assert_eq!(section.budget_usd, 333.33);
        assert_eq!(section.remaining_budget, -836.67);
        assert_eq!(section.total_estimate, 1170.0);
    }

    #[test]
    fn test_plan_response_section_order() {
        let plan = TripPlan {
            destination: Some(Location::new(48.8566, 2.3522, "Paris".to_string())),
            flights: vec![],
            hotels: vec![],
            fare_trend: vec![],
            breakdown: breakdown(),
            tips: "Pack light.".to_string(),
            warnings: vec![],
        };

        let api_plan = ApiTripPlan::from(&plan);
        let json = serde_json::to_string(&api_plan).unwrap();

        let order = ["\"map\"", "\"flights\"", "\"hotels\"", "\"fare_trend\"", "\"budget\"", "\"tips\""];
        let positions: Vec<usize> = order.iter().map(|key| json.find(key).unwrap()).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let config = WanderMateConfig::default();
        let planner = TripPlanner::new(
            Arc::new(GeocodingClient::new(config.geocoding.clone()).unwrap()),
            Arc::new(CurrencyClient::new(config.currency.clone()).unwrap()),
            Arc::new(TipsClient::new(config.tips.clone()).unwrap()),
            Arc::new(SampleInventory::new()),
        );
        let app = router(AppState {
            planner: Arc::new(planner),
        });

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_missing_destination_renders_without_map() {
        let plan = TripPlan {
            destination: None,
            flights: vec![],
            hotels: vec![],
            fare_trend: vec![],
            breakdown: breakdown(),
            tips: String::new(),
            warnings: vec!["Could not locate the destination on the map.".to_string()],
        };

        let api_plan = ApiTripPlan::from(&plan);
        assert!(api_plan.map.is_none());
        assert_eq!(api_plan.warnings.len(), 1);
    }
}
