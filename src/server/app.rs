//! Axum application setup.

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;
use super::web::form_page;

/// Uploads above this size are rejected before the pipeline runs.
/// 50 MB comfortably covers scanned multi-hundred-page PDFs.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/polish", post(handlers::polish_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .nest("/api", api_routes)
        .fallback(form_page)
        .layer(cors)
        .with_state(state)
}

/// Start the web server on localhost.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    println!("docpolish form at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
