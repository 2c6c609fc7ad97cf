mod cli;
mod handlers;

pub use cli::App;

use crate::cohere::CohereClient;
use crate::prelude::{eprintln, *};
use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Per-process state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub client: CohereClient,
    pub log_file: PathBuf,
    pub verbose: bool,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/summarize", post(handlers::summarize))
        .layer(cors)
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Starting DataSniper server on {addr}...");
        eprintln!("Config: {:?}", app.config);
    }

    let state = Arc::new(AppState {
        client: CohereClient::new(&app.config)?,
        log_file: app.config.log_file.clone(),
        verbose: global.verbose,
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
