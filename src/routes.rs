use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::languages;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system.static_dir.clone();

    Router::new()
        // WebSocket
        .route("/client-ws", get(websocket_handler))
        // REST API routes
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))
        // The page itself
        .fallback_service(ServeDir::new(static_dir))
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.config.groq.api_key.is_some(),
        "model": state.config.groq.model,
    }))
}

async fn get_languages(State(_state): State<AppState>) -> Json<Value> {
    let defaults = crate::languages::LanguageSelection::default();
    Json(json!({
        "origins": languages::origin_catalog(),
        "destinations": languages::destination_catalog(),
        "defaults": defaults,
    }))
}
