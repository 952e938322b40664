//! Oversight console routes.
//!
//! Serves the risk-prioritized case matrix, the per-school smart dossier,
//! and the simulated national sweep.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::AppState;
use sisrc_core::aggregate::RecordFilter;
use sisrc_core::oversight::{DEFAULT_RISK_THRESHOLD, OversightService};
use sisrc_core::school::{Dependence, Region};
use sisrc_shared::AppError;
use sisrc_shared::types::SchoolId;
use sisrc_store::StoreError;

/// Creates the oversight console routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/oversight/cases", get(list_cases))
        .route("/oversight/schools/{school_id}/dossier", get(get_dossier))
        .route("/oversight/sweep", post(run_sweep))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the prioritized case list.
#[derive(Debug, Deserialize)]
pub struct ListCasesQuery {
    /// Region name, or `Todas` for all regions.
    pub region: Option<String>,
    /// RBD or establishment-name substring.
    pub q: Option<String>,
    /// Dependence display name.
    pub dependence: Option<String>,
    /// Risk score cutoff; defaults to the console threshold.
    pub threshold: Option<u8>,
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

/// GET /oversight/cases - Rank cases above the risk threshold.
async fn list_cases(
    State(state): State<AppState>,
    Query(query): Query<ListCasesQuery>,
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

    let threshold = query.threshold.unwrap_or(DEFAULT_RISK_THRESHOLD);
    let cases = OversightService::prioritized_cases(&records, &filter, threshold);

    (StatusCode::OK, Json(cases)).into_response()
}

/// GET `/oversight/schools/{school_id}/dossier` - Build the smart dossier.
async fn get_dossier(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> impl IntoResponse {
    match state.store.find(&SchoolId::new(school_id.as_str())) {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(OversightService::dossier(&record))).into_response()
        }
        Ok(None) => store_error(&StoreError::SchoolNotFound(school_id)),
        Err(err) => store_error(&err),
    }
}

/// POST /oversight/sweep - Run the simulated national sweep.
///
/// Waits out the configured advisory delay before answering.
async fn run_sweep(State(state): State<AppState>) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(state.advisory_delay_ms)).await;
    Json(OversightService::sweep_alert())
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
    async fn test_cases_ranked_with_default_threshold() {
        let (status, json) = get_json(test_app(), "/oversight/cases").await;

        assert_eq!(status, StatusCode::OK);

        let cases = json["cases"].as_array().unwrap();
        let ids: Vec<&str> = cases.iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["4", "1", "3", "2"]);

        assert_eq!(cases[0]["risk_score"], 92);
        assert_eq!(cases[0]["review_kind"], "Automated");
        assert_eq!(cases[1]["review_kind"], "Automated");
        assert_eq!(cases[2]["review_kind"], "Manual");
        assert_eq!(cases[3]["review_kind"], "Manual");
    }

    #[tokio::test]
    async fn test_cases_console_context() {
        let (_, json) = get_json(test_app(), "/oversight/cases").await;

        assert_eq!(json["capacity"]["active_bots"], 12);
        assert_eq!(json["capacity"]["auditors"], 5);
        assert!(
            json["priority_hint"]
                .as_str()
                .unwrap()
                .contains("RRHH focus")
        );
    }

    #[tokio::test]
    async fn test_cases_with_explicit_threshold() {
        let (status, json) = get_json(test_app(), "/oversight/cases?threshold=50").await;

        assert_eq!(status, StatusCode::OK);
        let cases = json["cases"].as_array().unwrap();
        let ids: Vec<&str> = cases.iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["4", "1"]);
    }

    #[tokio::test]
    async fn test_cases_filter_narrows_before_ranking() {
        let (status, json) =
            get_json(test_app(), "/oversight/cases?dependence=Municipal").await;

        assert_eq!(status, StatusCode::OK);
        let cases = json["cases"].as_array().unwrap();
        let ids: Vec<&str> = cases.iter().map(|c| c["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["3", "2"]);
    }

    #[tokio::test]
    async fn test_cases_malformed_threshold_is_rejected() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/oversight/cases?threshold=high")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dossier_names_the_school() {
        let (status, json) = get_json(test_app(), "/oversight/schools/4/dossier").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["school_id"], "4");
        assert_eq!(json["school_name"], "Colegio Tecnológico del Norte");
        assert_eq!(json["origin"], "Generado automáticamente por Motor SISRC");
        assert!(json["hypothesis"].as_str().unwrap().contains("35%"));

        let evidence = json["evidence"].as_array().unwrap();
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0]["document"], "Libro de Remuneraciones Octubre 2025");
        assert_eq!(evidence[0]["status"], "No Revisado");
        assert_eq!(evidence[1]["status"], "No Revisado");
    }

    #[tokio::test]
    async fn test_dossier_unknown_school_is_not_found() {
        let (status, json) = get_json(test_app(), "/oversight/schools/99/dossier").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "SCHOOL_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_sweep_returns_the_canned_alert() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/oversight/sweep")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["title"], "Nueva Alerta Crítica Detectada");
        assert!(
            json["detail"]
                .as_str()
                .unwrap()
                .contains("Colegio Santa María")
        );
    }
}
