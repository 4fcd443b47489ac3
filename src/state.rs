//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the case study source and the site config. Nothing in it is mutated
//! after startup, so requests never contend on it.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::CaseStudySource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn CaseStudySource>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(content: Arc<dyn CaseStudySource>, config: SiteConfig) -> Self {
        Self { content, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
