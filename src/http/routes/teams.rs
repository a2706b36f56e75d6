//! Team endpoints

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
use crate::storage::{Match, NewTeam, Player, Team};
use crate::types::TeamId;

/// Create team request
#[derive(Deserialize)]
pub struct CreateTeamRequest {
    pub nombre: Option<String>,
    pub ciudad: Option<String>,
    pub entrenador: Option<String>,
}

/// POST /equipos
async fn create_team(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateTeamRequest>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let new = NewTeam {
        name: required(req.nombre, "nombre")?,
        city: required(req.ciudad, "ciudad")?,
        coach: required(req.entrenador, "entrenador")?,
    };
    let team = state.with_db(move |db| db.create_team(new)).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /equipos/{id}
async fn get_team(
    State(state): State<AppState>,
    IdPath(id): IdPath<TeamId>,
) -> Result<Json<Team>, ApiError> {
    state
        .with_db(move |db| db.get_team(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

/// GET /equipos/{id}/jugadores
async fn list_team_players(
    State(state): State<AppState>,
    IdPath(id): IdPath<TeamId>,
) -> Result<Json<Vec<Player>>, ApiError> {
    state
        .with_db(move |db| db.list_team_players(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

/// GET /equipos/{id}/partidos
async fn list_team_matches(
    State(state): State<AppState>,
    IdPath(id): IdPath<TeamId>,
) -> Result<Json<Vec<Match>>, ApiError> {
    state
        .with_db(move |db| db.list_team_matches(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

/// Team routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/equipos", post(create_team))
        .route("/equipos/{id}", get(get_team))
        .route("/equipos/{id}/jugadores", get(list_team_players))
        .route("/equipos/{id}/partidos", get(list_team_matches))
}
