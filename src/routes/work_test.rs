use std::path::PathBuf;
use std::sync::Arc;

use super::*;
use crate::config::SiteConfig;
use crate::state::test_helpers::{MockSource, sample_case_study, test_app_state};

#[test]
fn page_error_status_maps_content_to_internal_error() {
    let err = PageError::Content(ContentError::InvalidDate("soon".into()));
    assert_eq!(page_error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn page_error_status_maps_timeout_to_gateway_timeout() {
    let err = PageError::Timeout(Duration::from_secs(5));
    assert_eq!(page_error_status(&err), StatusCode::GATEWAY_TIMEOUT);
}

#[test]
fn page_error_display_includes_cause() {
    let err = PageError::from(ContentError::MissingFrontmatter { path: PathBuf::from("work/bloc.md") });
    let message = err.to_string();
    assert!(message.contains("case study load failed"));
    assert!(message.contains("work/bloc.md"));
}

#[tokio::test]
async fn load_case_studies_passes_records_through_in_order() {
    let state = test_app_state(MockSource::Records(vec![
        sample_case_study("Stride"),
        sample_case_study("Bloc"),
    ]));
    let loaded = load_case_studies(&state).await.unwrap();
    let clients: Vec<&str> = loaded.iter().map(|cs| cs.client.as_str()).collect();
    assert_eq!(clients, vec!["Stride", "Bloc"]);
}

#[tokio::test]
async fn load_case_studies_propagates_source_failure() {
    let state = test_app_state(MockSource::Fails);
    let err = load_case_studies(&state).await.unwrap_err();
    assert!(matches!(err, PageError::Content(ContentError::DuplicateClient(_))));
}

#[tokio::test(start_paused = true)]
async fn load_case_studies_times_out_stalled_source() {
    let config = SiteConfig { content_load_timeout_secs: 1, ..SiteConfig::default() };
    let state = AppState::new(Arc::new(MockSource::Stalls), config);
    let err = load_case_studies(&state).await.unwrap_err();
    assert!(matches!(err, PageError::Timeout(d) if d == Duration::from_secs(1)));
}

#[test]
fn page_failure_response_uses_error_status() {
    let failure = PageFailure {
        site_name: "Techveda".into(),
        error: PageError::Timeout(Duration::from_secs(1)),
    };
    let response = failure.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}
