//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered work page, a health probe and
//! the static asset tree. `/` redirects to `/work`; unknown paths get the
//! site's 404 document.

pub mod work;

use axum::Router;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::site;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    // Missing static files get the same 404 document as unknown routes.
    let images = ServeDir::new(state.config.assets_dir.join("images"))
        .not_found_service(not_found.with_state(state.clone()));
    let assets = ServeDir::new(state.config.assets_dir.join("assets"))
        .not_found_service(not_found.with_state(state.clone()));

    Router::new()
        .route("/", get(redirect_root_to_work))
        .route("/work", get(work::work_page))
        .route("/healthz", get(healthz))
        .nest_service("/images", images)
        .nest_service("/assets", assets)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_work() -> Redirect {
    Redirect::temporary("/work")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let html = site::render_error_page(
        &state.config.site_name,
        StatusCode::NOT_FOUND.as_u16(),
        "Not Found",
        "The page you are looking for does not exist.",
    );
    (StatusCode::NOT_FOUND, Html(html))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
