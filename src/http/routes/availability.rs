//! Player availability endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::required;
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody};
use crate::http::server::AppState;
use crate::storage::{AvailabilityStatus, NewAvailability};
use crate::types::{MatchId, PlayerId};

/// Create availability request. `disponible` must be present and not null;
/// `false` is a valid value.
#[derive(Deserialize)]
pub struct CreateAvailabilityRequest {
    pub jugador_id: Option<PlayerId>,
    pub partido_id: Option<MatchId>,
    pub disponible: Option<bool>,
    pub lesion_tipo: Option<String>,
}

/// POST /estado_jugadores
async fn create_availability(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<AvailabilityStatus>), ApiError> {
    let new = NewAvailability {
        player_id: required(req.jugador_id, "jugador_id")?,
        match_id: required(req.partido_id, "partido_id")?,
        available: required(req.disponible, "disponible")?,
        injury_type: req.lesion_tipo,
    };
    let status = state.with_db(move |db| db.create_availability(new)).await?;

    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /partidos/{id}/estado_jugadores
async fn list_match_availability(
    State(state): State<AppState>,
    IdPath(id): IdPath<MatchId>,
) -> Result<Json<Vec<AvailabilityStatus>>, ApiError> {
    state
        .with_db(move |db| db.list_match_availability(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Match"))
}

/// Availability routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/estado_jugadores", post(create_availability))
        .route("/partidos/{id}/estado_jugadores", get(list_match_availability))
}
