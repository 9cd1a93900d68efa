use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::lineup::{validate_roster, LineupRequest, LineupStore};
use crate::rotation::{
    available_positions, category_stats, plan_rotation, player_stats, validate_batting_orders,
    Player, Position, PositionCategory, RotationSettings,
};

pub struct AppState {
    pub lineups: LineupStore,
    pub max_innings: u32,
}

impl AppState {
    pub fn new(max_innings: u32) -> Self {
        AppState {
            lineups: LineupStore::new(max_innings),
            max_innings,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsQuery {
    use_pitcher: Option<bool>,
    use_catcher: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationRequest {
    players: Vec<Player>,
    #[serde(default)]
    rotation_settings: RotationSettings,
}

#[derive(Deserialize)]
pub struct BattingOrderRequest {
    players: Vec<Player>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    player_id: String,
    positions: BTreeMap<Position, u32>,
    categories: BTreeMap<PositionCategory, u32>,
}

async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({"status": "ok"})))
}

async fn get_positions(query: web::Query<PositionsQuery>) -> Result<HttpResponse> {
    let settings = RotationSettings {
        use_pitcher: query.use_pitcher.unwrap_or(true),
        use_catcher: query.use_catcher.unwrap_or(true),
        ..RotationSettings::default()
    };
    Ok(HttpResponse::Ok().json(available_positions(&settings)))
}

// Plans a rotation without storing anything
async fn post_rotation(
    req: web::Json<RotationRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    validate_roster(&req.players, &req.rotation_settings, state.max_innings)?;
    let plan = plan_rotation(&req.players, &req.rotation_settings);
    Ok(HttpResponse::Ok().json(plan))
}

async fn post_validate_batting_orders(req: web::Json<BattingOrderRequest>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "valid": validate_batting_orders(&req.players)
    })))
}

async fn list_lineups(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.lineups.list()))
}

async fn create_lineup(
    req: web::Json<LineupRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let lineup = state.lineups.create(req.into_inner())?;
    Ok(HttpResponse::Created().json(lineup))
}

async fn get_lineup(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.lineups.get(&id)?))
}

async fn update_lineup(
    id: web::Path<String>,
    req: web::Json<LineupRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let lineup = state.lineups.update(&id, req.into_inner())?;
    Ok(HttpResponse::Ok().json(lineup))
}

async fn delete_lineup(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    state.lineups.delete(&id)?;
    Ok(HttpResponse::NoContent().finish())
}

async fn get_player_stats(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (lineup_id, player_id) = path.into_inner();
    let lineup = state.lineups.get(&lineup_id)?;

    let rotation = &lineup.data.rotation;
    Ok(HttpResponse::Ok().json(PlayerStatsResponse {
        positions: player_stats(&player_id, rotation),
        categories: category_stats(&player_id, rotation),
        player_id,
    }))
}

/// Registers every API route; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health))
        .route("/api/positions", web::get().to(get_positions))
        .route("/api/rotation", web::post().to(post_rotation))
        .route(
            "/api/batting-orders/validate",
            web::post().to(post_validate_batting_orders),
        )
        .service(
            web::resource("/api/lineups")
                .route(web::get().to(list_lineups))
                .route(web::post().to(create_lineup)),
        )
        .service(
            web::resource("/api/lineups/{id}")
                .route(web::get().to(get_lineup))
                .route(web::put().to(update_lineup))
                .route(web::delete().to(delete_lineup)),
        )
        .service(
            web::resource("/api/lineups/{id}/players/{player_id}/stats")
                .route(web::get().to(get_player_stats)),
        );
}

pub async fn start_server(config: &AppConfig) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(config.max_innings));

    info!(host = %config.host, port = config.port, "starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
