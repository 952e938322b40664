//! National monitor routes.
//!
//! Serves the closure dashboard assembled over a filtered subset of the
//! collection, plus the simulated executive report.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::AppState;
use sisrc_core::advisory::{AdvisoryService, ExecutiveReport};
use sisrc_core::aggregate::RecordFilter;
use sisrc_core::dashboard::{DashboardService, MonitorDashboard};
use sisrc_core::school::{Dependence, Region};
use sisrc_shared::AppError;
use sisrc_shared::types::money::format_clp_compact;
use sisrc_store::StoreError;

/// Creates the national monitor routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/monitor/dashboard", get(get_dashboard))
        .route("/monitor/executive-report", post(generate_executive_report))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the monitor dashboard.
#[derive(Debug, Deserialize)]
pub struct MonitorDashboardQuery {
    /// Region name, or `Todas` for all regions.
    pub region: Option<String>,
    /// RBD or establishment-name substring.
    pub q: Option<String>,
    /// Dependence display name.
    pub dependence: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for the monitor dashboard.
#[derive(Debug, Serialize)]
pub struct MonitorDashboardResponse {
    /// Assembled dashboard payload.
    pub dashboard: MonitorDashboard,
    /// Headline figures preformatted for the KPI cards.
    pub headline: HeadlineLabels,
}

/// Compact CLP labels for the headline cards.
#[derive(Debug, Serialize)]
pub struct HeadlineLabels {
    /// Universe total, e.g. `$72M`.
    pub total_transferred: String,
    /// Declared total, e.g. `$62M`.
    pub total_reported: String,
    /// Presumed-debt figure, e.g. `$4,5B`.
    pub presumed_debt: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds the record filter from raw query values.
///
/// Absent values and the `Todas` region are wildcards; unknown region or
/// dependence names are validation errors.
fn parse_filter(
    region: Option<&str>,
    query: Option<&str>,
    dependence: Option<&str>,
) -> Result<RecordFilter, axum::response::Response> {
    let mut filter = RecordFilter::new();

    if let Some(raw) = region.filter(|raw| *raw != "Todas") {
        match raw.parse::<Region>() {
            Ok(region) => filter = filter.in_region(region),
            Err(message) => return Err(validation_error(&AppError::Validation(message))),
        }
    }

    if let Some(q) = query.filter(|q| !q.is_empty()) {
        filter = filter.with_query(q);
    }

    if let Some(raw) = dependence {
        match raw.parse::<Dependence>() {
            Ok(dependence) => filter = filter.with_dependence(dependence),
            Err(message) => return Err(validation_error(&AppError::Validation(message))),
        }
    }

    Ok(filter)
}

/// Builds the JSON envelope for a rejected filter value.
fn validation_error(err: &AppError) -> axum::response::Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// Builds the JSON envelope for a failed store operation.
fn store_error(err: &StoreError) -> axum::response::Response {
    if err.status_code() >= 500 {
        error!(error = %err, "Store operation failed");
    }
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /monitor/dashboard - Assemble the national closure dashboard.
#[axum::debug_handler]
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<MonitorDashboardQuery>,
) -> impl IntoResponse {
    let filter = match parse_filter(
        query.region.as_deref(),
        query.q.as_deref(),
        query.dependence.as_deref(),
    ) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let records = match state.store.list() {
        Ok(records) => records,
        Err(err) => return store_error(&err),
    };

    let dashboard = DashboardService::build(&records, &filter);
    let headline = HeadlineLabels {
        total_transferred: format_clp_compact(dashboard.universe.total_transferred),
        total_reported: format_clp_compact(dashboard.universe.total_reported),
        presumed_debt: format_clp_compact(dashboard.kpis.presumed_debt),
    };

    (
        StatusCode::OK,
        Json(MonitorDashboardResponse {
            dashboard,
            headline,
        }),
    )
        .into_response()
}

/// POST /monitor/executive-report - Generate the simulated executive report.
///
/// Waits out the configured advisory delay before answering.
async fn generate_executive_report(State(state): State<AppState>) -> Json<ExecutiveReport> {
    tokio::time::sleep(Duration::from_millis(state.advisory_delay_ms)).await;
    Json(AdvisoryService::executive_report())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use sisrc_store::SchoolStore;
    use tower::ServiceExt;

    use super::*;

    /// Builds a router over the demo seed with the advisory delay disabled.
    fn test_app() -> Router {
        let state = AppState {
            store: Arc::new(SchoolStore::from_seed()),
            advisory_delay_ms: 0,
        };
        Router::new().merge(routes()).with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_dashboard_over_full_collection() {
        let (status, json) = get_json(test_app(), "/monitor/dashboard").await;

        assert_eq!(status, StatusCode::OK);

        let kpis = &json["dashboard"]["kpis"];
        assert_eq!(kpis["closure_rate"], "40.0");
        assert_eq!(kpis["submitted_count"], 2);
        assert_eq!(kpis["total_count"], 5);

        let universe = &json["dashboard"]["universe"];
        assert_eq!(universe["total_transferred"], "72000000");
        assert_eq!(universe["total_reported"], "62000000");
        assert_eq!(universe["execution_percent"], "86.1");

        assert_eq!(json["dashboard"]["status_chart"]["open"], 2);
        assert_eq!(json["dashboard"]["status_chart"]["flagged"], 1);
        assert_eq!(
            json["dashboard"]["subvention_chart"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
        assert_eq!(
            json["dashboard"]["regional_progress"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }

    #[tokio::test]
    async fn test_dashboard_headline_uses_compact_clp() {
        let (_, json) = get_json(test_app(), "/monitor/dashboard").await;

        assert_eq!(json["headline"]["total_transferred"], "$72M");
        assert_eq!(json["headline"]["total_reported"], "$62M");
        assert_eq!(json["headline"]["presumed_debt"], "$4,5B");
    }

    #[tokio::test]
    async fn test_dashboard_respects_filters() {
        let (status, json) = get_json(test_app(), "/monitor/dashboard?region=Metropolitana").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dashboard"]["kpis"]["total_count"], 1);
        assert_eq!(json["dashboard"]["universe"]["total_transferred"], "15000000");
        assert_eq!(json["headline"]["total_transferred"], "$15M");
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unknown_region() {
        let (status, json) = get_json(test_app(), "/monitor/dashboard?region=Atlantis").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_executive_report_is_canned() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/monitor/executive-report")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let expected = AdvisoryService::executive_report();
        assert_eq!(json["summary"], expected.summary);
        assert_eq!(json["alerts"].as_array().unwrap().len(), 2);
        assert_eq!(json["recommendation"], expected.recommendation);
        assert!(json["generated_at"].is_string());
    }
}
