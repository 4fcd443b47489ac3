//! `GET /work` — the "Our Work" page.
//!
//! ERROR HANDLING
//! ==============
//! Case studies are the page's primary content, so a failed or slow load
//! aborts the render with an error document instead of showing an empty
//! list. An empty collection is not a failure and renders normally.

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::content::{CaseStudy, ContentError};
use crate::site;
use crate::state::AppState;

/// Failures that abort a page render.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The content source returned an error.
    #[error("case study load failed: {0}")]
    Content(#[from] ContentError),

    /// The content source did not answer within the configured timeout.
    #[error("case study load timed out after {0:?}")]
    Timeout(Duration),
}

/// Map a page error to its HTTP status.
pub(crate) fn page_error_status(err: &PageError) -> StatusCode {
    match err {
        PageError::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PageError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn page_error_message(err: &PageError) -> &'static str {
    match err {
        PageError::Content(_) => "Our case studies could not be loaded. Please try again shortly.",
        PageError::Timeout(_) => "Our case studies took too long to load. Please try again shortly.",
    }
}

/// Error response carrying the site name for the error document.
pub struct PageFailure {
    site_name: String,
    error: PageError,
}

impl IntoResponse for PageFailure {
    fn into_response(self) -> Response {
        let status = page_error_status(&self.error);
        tracing::error!(error = %self.error, status = status.as_u16(), "work page render failed");

        let html = site::render_error_page(
            &self.site_name,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            page_error_message(&self.error),
        );
        (status, Html(html)).into_response()
    }
}

/// Load case studies with the configured timeout.
///
/// # Errors
///
/// Returns [`PageError::Timeout`] if the source does not answer in time and
/// [`PageError::Content`] if it fails.
pub(crate) async fn load_case_studies(state: &AppState) -> Result<Vec<CaseStudy>, PageError> {
    let timeout = Duration::from_secs(state.config.content_load_timeout_secs);
    let case_studies = tokio::time::timeout(timeout, state.content.load_case_studies())
        .await
        .map_err(|_| PageError::Timeout(timeout))??;
    Ok(case_studies)
}

/// `GET /work` — render the page with freshly loaded case studies.
pub async fn work_page(State(state): State<AppState>) -> Result<Html<String>, PageFailure> {
    let case_studies = load_case_studies(&state)
        .await
        .map_err(|error| PageFailure { site_name: state.config.site_name.clone(), error })?;

    tracing::debug!(count = case_studies.len(), "rendering work page");
    Ok(Html(site::render_work_page(&state.config.site_name, case_studies)))
}

#[cfg(test)]
#[path = "work_test.rs"]
mod tests;
