//! Match endpoints

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
use crate::storage::{Match, NewMatch};
use crate::types::{MatchId, TeamId};

/// Create match request
#[derive(Deserialize)]
pub struct CreateMatchRequest {
    pub fecha: Option<String>,
    pub hora: Option<String>,
    pub equipo_local_id: Option<TeamId>,
    pub equipo_visitante_id: Option<TeamId>,
}

/// POST /partidos
async fn create_match(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMatchRequest>,
) -> Result<(StatusCode, Json<Match>), ApiError> {
    let new = NewMatch {
        date: required(req.fecha, "fecha")?,
        time: required(req.hora, "hora")?,
        home_team_id: required(req.equipo_local_id, "equipo_local_id")?,
        away_team_id: required(req.equipo_visitante_id, "equipo_visitante_id")?,
    };
    let created = state.with_db(move |db| db.create_match(new)).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /partidos/{id}
async fn get_match(
    State(state): State<AppState>,
    IdPath(id): IdPath<MatchId>,
) -> Result<Json<Match>, ApiError> {
    state
        .with_db(move |db| db.get_match(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Match"))
}

/// Match routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/partidos", post(create_match))
        .route("/partidos/{id}", get(get_match))
}
