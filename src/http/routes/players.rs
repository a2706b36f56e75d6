//! Player endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::required;
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody};
use crate::http::server::AppState;
use crate::storage::{NewPlayer, Player, PlayerUpdate};
use crate::types::{PlayerId, TeamId};

/// Create player request
#[derive(Deserialize)]
pub struct CreatePlayerRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub posicion: Option<String>,
    pub numero: Option<u32>,
    pub equipo_id: Option<TeamId>,
}

/// Update player request; absent fields stay as they are
#[derive(Deserialize)]
pub struct UpdatePlayerRequest {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub posicion: Option<String>,
    pub numero: Option<u32>,
    pub equipo_id: Option<TeamId>,
}

impl From<UpdatePlayerRequest> for PlayerUpdate {
    fn from(req: UpdatePlayerRequest) -> Self {
        Self {
            first_name: req.nombre,
            last_name: req.apellido,
            position: req.posicion,
            number: req.numero,
            team_id: req.equipo_id,
        }
    }
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub mensaje: String,
}

/// POST /jugadores
async fn create_player(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let new = NewPlayer {
        first_name: required(req.nombre, "nombre")?,
        last_name: required(req.apellido, "apellido")?,
        position: required(req.posicion, "posicion")?,
        number: required(req.numero, "numero")?,
        team_id: required(req.equipo_id, "equipo_id")?,
    };
    let player = state.with_db(move |db| db.create_player(new)).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /jugadores
async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(state.with_db(move |db| db.list_players()).await?))
}

/// GET /jugadores/{id}
async fn get_player(
    State(state): State<AppState>,
    IdPath(id): IdPath<PlayerId>,
) -> Result<Json<Player>, ApiError> {
    state
        .with_db(move |db| db.get_player(id)).await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Player"))
}

/// PUT /jugadores/{id}
async fn update_player(
    State(state): State<AppState>,
    IdPath(id): IdPath<PlayerId>,
    JsonBody(req): JsonBody<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let player = state.with_db(move |db| db.update_player(id, req.into())).await?;
    Ok(Json(player))
}

/// DELETE /jugadores/{id}
async fn delete_player(
    State(state): State<AppState>,
    IdPath(id): IdPath<PlayerId>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.with_db(move |db| db.delete_player(id)).await? {
        return Err(ApiError::BadRequest {
            message: format!("Player {} could not be deleted: it does not exist", id),
        });
    }

    Ok(Json(DeletedResponse {
        mensaje: format!("Player {} deleted", id),
    }))
}

/// Player routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jugadores", get(list_players).post(create_player))
        .route(
            "/jugadores/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}
