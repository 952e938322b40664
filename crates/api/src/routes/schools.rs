//! School listing routes.
//!
//! Serves the record collection in the ingestion wire format, filtered
//! with the same semantics every role view uses.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::AppState;
use sisrc_core::aggregate::{AggregatorService, RecordFilter};
use sisrc_core::school::{Dependence, Region};
use sisrc_shared::AppError;
use sisrc_shared::types::SchoolId;
use sisrc_store::StoreError;

/// Creates the school listing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schools", get(list_schools))
        .route("/schools/{school_id}", get(get_school))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for listing schools.
#[derive(Debug, Deserialize)]
pub struct ListSchoolsQuery {
    /// Region name, or `Todas` for all regions.
    pub region: Option<String>,
    /// RBD or establishment-name substring.
    pub q: Option<String>,
    /// Dependence display name.
    pub dependence: Option<String>,
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

/// GET /schools - List school records matching the filter.
async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<ListSchoolsQuery>,
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

    let schools = AggregatorService::filter_records(&records, &filter);
    let total = schools.len();

    (
        StatusCode::OK,
        Json(json!({ "schools": schools, "total": total })),
    )
        .into_response()
}

/// GET `/schools/{school_id}` - Get one school record.
async fn get_school(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> impl IntoResponse {
    match state.store.find(&SchoolId::new(school_id.as_str())) {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => store_error(&StoreError::SchoolNotFound(school_id)),
        Err(err) => store_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use sisrc_store::SchoolStore;
    use tower::ServiceExt;

    use super::*;

    /// Builds a router over the demo seed.
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
    async fn test_list_schools_returns_all_by_default() {
        let (status, json) = get_json(test_app(), "/schools").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 5);
        assert_eq!(json["schools"].as_array().unwrap().len(), 5);
        assert_eq!(json["schools"][0]["name"], "Colegio Santa María");
    }

    #[tokio::test]
    async fn test_list_schools_region_wildcard() {
        let (status, json) = get_json(test_app(), "/schools?region=Todas").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 5);
    }

    #[tokio::test]
    async fn test_list_schools_filters_by_region() {
        let (status, json) = get_json(test_app(), "/schools?region=Metropolitana").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["schools"][0]["id"], "1");
    }

    #[rstest]
    #[case("Municipal", 2)]
    #[case("SLEP", 1)]
    #[case("Particular%20Subvencionado", 2)]
    #[tokio::test]
    async fn test_list_schools_filters_by_dependence(
        #[case] dependence: &str,
        #[case] expected: u64,
    ) {
        let uri = format!("/schools?dependence={dependence}");
        let (status, json) = get_json(test_app(), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], expected);
    }

    #[tokio::test]
    async fn test_list_schools_query_matches_rbd_and_name() {
        let (status, json) = get_json(test_app(), "/schools?q=12345").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["schools"][0]["rbd"], "12345-6");

        let (status, json) = get_json(test_app(), "/schools?q=santa").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["schools"][0]["name"], "Colegio Santa María");
    }

    #[tokio::test]
    async fn test_list_schools_rejects_unknown_region() {
        let (status, json) = get_json(test_app(), "/schools?region=Narnia").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_schools_rejects_unknown_dependence() {
        let (status, json) = get_json(test_app(), "/schools?dependence=Privado").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_school_returns_wire_format() {
        let (status, json) = get_json(test_app(), "/schools/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["rbd"], "12345-6");
        assert_eq!(json["totalGrant"], "15000000");
        assert_eq!(json["dependence"], "Particular Subvencionado");
        assert_eq!(json["expenses"][0]["source"], "DT (LRE)");
    }

    #[tokio::test]
    async fn test_get_school_unknown_id_is_not_found() {
        let (status, json) = get_json(test_app(), "/schools/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "SCHOOL_NOT_FOUND");
        assert_eq!(json["message"], "School 99 not found");
    }
}
