//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::domain::{InvalidCoordinate, Itinerary};
use crate::editor::{EditError, incomplete_days};
use crate::geocode::{GeocodeError, MapClick};
use crate::payload::{DayPayload, LocationPayload, PayloadError};
use crate::route::derive_route;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/itinerary/route", post(itinerary_route))
        .route("/api/itinerary/edit", post(edit_itinerary))
        .route("/api/itinerary/validate", post(validate_itinerary))
        .route("/api/locations/search", get(search_locations))
        .route("/api/locations/click", post(resolve_click))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body ourselves so malformed input gets our error shape.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "unparseable request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Markers, segments and framing for an itinerary.
async fn itinerary_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, AppError> {
    let req: ItineraryRequest = parse_body(&body)?;
    let itinerary = Itinerary::try_from(req.itinerary)?;

    let geometry = derive_route(&itinerary);
    Ok(Json(RouteResponse::new(&geometry, &state.map)))
}

/// Apply one edit and return the edited itinerary.
async fn edit_itinerary(body: Bytes) -> Result<Json<ItineraryResponse>, AppError> {
    let req: EditRequest = parse_body(&body)?;
    let itinerary = Itinerary::try_from(req.itinerary)?;

    let edited = req.op.apply(&itinerary)?;
    Ok(Json(ItineraryResponse {
        itinerary: Vec::<DayPayload>::from(&edited),
    }))
}

/// Report every day that blocks saving.
async fn validate_itinerary(body: Bytes) -> Result<Json<ValidateResponse>, AppError> {
    let req: ItineraryRequest = parse_body(&body)?;
    let itinerary = Itinerary::try_from(req.itinerary)?;

    let issues = incomplete_days(&itinerary);
    Ok(Json(ValidateResponse::from_errors(&issues)))
}

/// Search places by name.
async fn search_locations(
    State(state): State<AppState>,
    query: Result<Query<LocationSearchRequest>, QueryRejection>,
) -> Result<Json<LocationSearchResponse>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: format!("Invalid query: {e}"),
    })?;
    let limit = state.geocoder.clamp_limit(req.limit);
    let candidates = state.resolver.search(&req.q, limit).await?;

    let results = candidates.into_iter().map(LocationResult::from).collect();
    Ok(Json(LocationSearchResponse { results }))
}

/// Turn a map click into a coordinate.
async fn resolve_click(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LocationPayload>, AppError> {
    let click: MapClick = parse_body(&body)?;
    let coordinate = state.resolver.resolve_click(click)?;
    Ok(Json(coordinate.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    UnprocessableEntity { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<PayloadError> for AppError {
    fn from(e: PayloadError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidCoordinate> for AppError {
    fn from(e: InvalidCoordinate) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<EditError> for AppError {
    fn from(e: EditError) -> Self {
        match e {
            EditError::Domain(_) => AppError::UnprocessableEntity {
                message: e.to_string(),
            },
            EditError::Coordinate(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::Config(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::UnprocessableEntity { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
