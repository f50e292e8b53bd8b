use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use groq_translator::config::Config;
use groq_translator::routes;
use groq_translator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win either way.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groq_translator=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    if config.groq.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; the page will show a configuration error on submit");
    }

    let app_state = AppState::new(config.clone());

    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system.host, config.system.port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
