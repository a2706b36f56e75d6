//! Statistic endpoints

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
use crate::storage::{NewStatistic, Statistic};
use crate::types::{MatchId, PlayerId};

/// Create statistic request; absent counters are recorded as zero
#[derive(Deserialize)]
pub struct CreateStatisticRequest {
    pub jugador_id: Option<PlayerId>,
    pub partido_id: Option<MatchId>,
    #[serde(default)]
    pub puntos: u32,
    #[serde(default)]
    pub bloqueos: u32,
    #[serde(default)]
    pub saques: u32,
    #[serde(default)]
    pub recepciones: u32,
}

/// POST /estadisticas
async fn create_statistic(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateStatisticRequest>,
) -> Result<(StatusCode, Json<Statistic>), ApiError> {
    let new = NewStatistic {
        points: req.puntos,
        blocks: req.bloqueos,
        serves: req.saques,
        receptions: req.recepciones,
        ..NewStatistic::new(
            required(req.jugador_id, "jugador_id")?,
            required(req.partido_id, "partido_id")?,
        )
    };
    let statistic = state.with_db(move |db| db.create_statistic(new)).await?;

    Ok((StatusCode::CREATED, Json(statistic)))
}

/// GET /partidos/{id}/estadisticas
async fn list_match_statistics(
    State(state): State<AppState>,
    IdPath(id): IdPath<MatchId>,
) -> Result<Json<Vec<Statistic>>, ApiError> {
    state
        .with_db(move |db| db.list_match_statistics(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Match"))
}

/// Statistic routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/estadisticas", post(create_statistic))
        .route("/partidos/{id}/estadisticas", get(list_match_statistics))
}
