pub mod pages;
pub mod state;
pub mod templates;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_root);
    Router::new()
        .route("/", get(pages::home))
        .route("/gallery", get(pages::gallery))
        .route("/message", get(pages::message))
        // Client assets plus the music and photo folders the pages link to
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
