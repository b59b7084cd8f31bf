//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::PricingError;
use crate::input::{InputError, parse_search_input};
use crate::output::format_amount;
use crate::planner::{Criterion, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes/search", post(search_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find the best route for a criterion.
async fn search_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchRoutesResponse>, AppError> {
    // Parse JSON manually so malformed bodies get our error format
    let req: SearchRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid search body");
        AppError::BadRequest {
            message: format!("invalid JSON: {e}"),
        }
    })?;

    let request = parse_search_input(&req.origin, &req.destination, &req.criteria)?;

    let planner = state.catalog.planner(&state.config);
    let result = planner.search(&request)?;
    let tied_routes = result.routes.len();

    let response = match result.best() {
        Some(route) => {
            let total_cost = match planner.summarize(route) {
                Ok(summary) => Some(format_amount(summary.total_cost)),
                // Fastest selection never priced the route
                Err(e) if request.criterion == Criterion::Fastest => {
                    warn!(error = %e, "fastest route has no total cost");
                    None
                }
                Err(e) => return Err(e.into()),
            };

            SearchRoutesResponse {
                criteria: request.criterion.to_string(),
                route: route
                    .legs()
                    .iter()
                    .map(|leg| LegResult::new(leg, state.catalog.rates.get(&leg.code)))
                    .collect(),
                total_cost,
                currency: state.config.base_currency.clone(),
                duration_days: route.duration_days(),
                tied_routes,
            }
        }
        None => SearchRoutesResponse {
            criteria: request.criterion.to_string(),
            route: Vec::new(),
            total_cost: None,
            currency: state.config.base_currency.clone(),
            duration_days: None,
            tied_routes,
        },
    };

    info!(
        origin = %request.origin,
        destination = %request.destination,
        criterion = %request.criterion,
        legs = response.route.len(),
        "route search served"
    );

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(e: PricingError) -> Self {
        AppError::Unprocessable {
            message: e.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidArgument(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Pricing(failure) => failure.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
