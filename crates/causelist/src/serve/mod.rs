mod cli;
mod routes;
mod storage;

pub use cli::App;
pub use storage::UploadStore;

use crate::prelude::{eprintln, *};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct ServerState {
    pub store: UploadStore,
    pub preview_len: usize,
}

pub fn router(state: Arc<ServerState>, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/upload", post(routes::upload_handler))
        .route("/api/debug/{filename}", get(routes::debug_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(routes::log_request))
        .layer(cors)
        .with_state(state)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let store = UploadStore::open(&app.uploads_dir)?;
    log::info!("Storing uploads in {}", store.dir().display());

    let state = Arc::new(ServerState {
        store,
        preview_len: app.preview_len,
    });

    let addr = format!("{}:{}", app.host, app.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server running on http://{addr}");
    if global.verbose {
        eprintln!("Causelist server listening on http://{}", addr);
        eprintln!("Upload endpoint: http://{}/api/upload", addr);
        eprintln!("Debug endpoint: http://{}/api/debug/{{filename}}", addr);
    }

    axum::serve(listener, router(state, app.max_upload_bytes))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
