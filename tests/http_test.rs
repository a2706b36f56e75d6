//! Integration tests for the HTTP routes, driven without a socket

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use superliga::http::{build_router, AppState, ServerConfig};
use superliga::storage::LeagueDatabase;
use tower::ServiceExt;

fn test_app() -> Router {
    let db = LeagueDatabase::new_in_memory().unwrap();
    build_router(AppState::new(db), &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_team(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/equipos",
        Some(json!({"nombre": name, "ciudad": "Bogotá", "entrenador": "Carlos Pérez"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_player(app: &Router, team_id: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/jugadores",
        Some(json!({
            "nombre": "Juan",
            "apellido": "Pérez",
            "posicion": "Opuesto",
            "numero": 1,
            "equipo_id": team_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_match(app: &Router, home: i64, away: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/partidos",
        Some(json!({
            "fecha": "2024-05-20",
            "hora": "8:00 PM",
            "equipo_local_id": home,
            "equipo_visitante_id": away
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_and_fetch_team() {
    let app = test_app();
    let id = create_team(&app, "Los Leones").await;

    let (status, body) = send(&app, "GET", &format!("/equipos/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": id, "nombre": "Los Leones", "ciudad": "Bogotá", "entrenador": "Carlos Pérez"})
    );
}

#[tokio::test]
async fn create_team_missing_field_is_400() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/equipos",
        Some(json!({"nombre": "Los Leones", "ciudad": "Bogotá"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("entrenador"));
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/equipos")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_ids_are_404_and_bad_ids_are_400() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/equipos/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/jugadores/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/partidos/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/equipos/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn player_with_unknown_team_is_400() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/jugadores",
        Some(json!({
            "nombre": "Juan",
            "apellido": "Pérez",
            "posicion": "Opuesto",
            "numero": 1,
            "equipo_id": 9999
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "The team with id 9999 does not exist");

    let (_, players) = send(&app, "GET", "/jugadores", None).await;
    assert_eq!(players, json!([]));
}

#[tokio::test]
async fn update_player_fields() {
    let app = test_app();
    let team_id = create_team(&app, "Los Leones").await;
    let player_id = create_player(&app, team_id).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/jugadores/{}", player_id),
        Some(json!({"nombre": "Juan Carlos", "numero": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Juan Carlos");
    assert_eq!(body["apellido"], "Pérez");
    assert_eq!(body["numero"], 0);
    assert_eq!(body["equipo_id"], team_id);
}

#[tokio::test]
async fn update_missing_player_is_400() {
    let app = test_app();
    let (status, _) = send(&app, "PUT", "/jugadores/9999", Some(json!({"nombre": "X"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_player() {
    let app = test_app();
    let team_id = create_team(&app, "Los Leones").await;
    let player_id = create_player(&app, team_id).await;

    let uri = format!("/jugadores/{}", player_id);
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["mensaje"].is_string());

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn match_with_unknown_away_team_is_400() {
    let app = test_app();
    let home = create_team(&app, "Los Leones").await;

    let (status, body) = send(
        &app,
        "POST",
        "/partidos",
        Some(json!({
            "fecha": "2024-05-20",
            "hora": "8:00 PM",
            "equipo_local_id": home,
            "equipo_visitante_id": 9999
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("away team"));
}

#[tokio::test]
async fn statistics_flow() {
    let app = test_app();
    let home = create_team(&app, "Los Leones").await;
    let away = create_team(&app, "Las Panteras").await;
    let player = create_player(&app, home).await;
    let game = create_match(&app, home, away).await;

    let (status, body) = send(
        &app,
        "POST",
        "/estadisticas",
        Some(json!({"jugador_id": player, "partido_id": game, "puntos": 20, "bloqueos": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["saques"], 0);
    assert_eq!(body["recepciones"], 0);

    let (status, body) = send(&app, "GET", &format!("/partidos/{}/estadisticas", game), None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = body.as_array().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["puntos"], 20);
}

#[tokio::test]
async fn availability_requires_explicit_flag() {
    let app = test_app();
    let home = create_team(&app, "Los Leones").await;
    let away = create_team(&app, "Las Panteras").await;
    let player = create_player(&app, home).await;
    let game = create_match(&app, home, away).await;

    let (status, body) = send(
        &app,
        "POST",
        "/estado_jugadores",
        Some(json!({"jugador_id": player, "partido_id": game, "disponible": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("disponible"));

    let (status, body) = send(
        &app,
        "POST",
        "/estado_jugadores",
        Some(json!({
            "jugador_id": player,
            "partido_id": game,
            "disponible": false,
            "lesion_tipo": "Esguince de tobillo"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["disponible"], false);

    let (status, body) =
        send(&app, "GET", &format!("/partidos/{}/estado_jugadores", game), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["lesion_tipo"], "Esguince de tobillo");
}

#[tokio::test]
async fn availability_with_unknown_references_is_400() {
    let app = test_app();
    let home = create_team(&app, "Los Leones").await;
    let away = create_team(&app, "Las Panteras").await;
    let player = create_player(&app, home).await;
    let game = create_match(&app, home, away).await;

    let (status, body) = send(
        &app,
        "POST",
        "/estado_jugadores",
        Some(json!({"jugador_id": 9999, "partido_id": game, "disponible": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "The player with id 9999 does not exist");

    let (status, body) = send(
        &app,
        "POST",
        "/estado_jugadores",
        Some(json!({"jugador_id": player, "partido_id": 9999, "disponible": true})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "The match with id 9999 does not exist");

    let (_, body) = send(&app, "GET", &format!("/partidos/{}/estado_jugadores", game), None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn available_player_with_blank_injury_is_created() {
    let app = test_app();
    let home = create_team(&app, "Los Leones").await;
    let away = create_team(&app, "Las Panteras").await;
    let player = create_player(&app, home).await;
    let game = create_match(&app, home, away).await;

    let (status, body) = send(
        &app,
        "POST",
        "/estado_jugadores",
        Some(json!({"jugador_id": player, "partido_id": game, "disponible": true, "lesion_tipo": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["disponible"], true);
    assert_eq!(body["lesion_tipo"], Value::Null);
}

#[tokio::test]
async fn match_with_same_team_on_both_sides_is_created() {
    let app = test_app();
    let team = create_team(&app, "Los Leones").await;
    let game = create_match(&app, team, team).await;

    let (status, body) = send(&app, "GET", &format!("/equipos/{}/partidos", team), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], game);
}

#[tokio::test]
async fn listings_separate_missing_parent_from_empty() {
    let app = test_app();
    let team = create_team(&app, "Los Leones").await;

    let (status, body) = send(&app, "GET", &format!("/equipos/{}/jugadores", team), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "GET", &format!("/equipos/{}/partidos", team), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, "GET", "/equipos/9999/jugadores", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/partidos/9999/estado_jugadores", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn team_matches_include_home_and_away() {
    let app = test_app();
    let a = create_team(&app, "Los Leones").await;
    let b = create_team(&app, "Las Panteras").await;
    let first = create_match(&app, a, b).await;
    let second = create_match(&app, b, a).await;

    let (status, body) = send(&app, "GET", &format!("/equipos/{}/partidos", a), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}
