//! School-holder portal routes.
//!
//! Serves the holder's own record with its financial summary and advisor
//! content, and carries the two store mutations: rendición submission and
//! set-once justification attachment.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use sisrc_core::advisory::{AdvisoryService, ChatMessage};
use sisrc_core::holder::{FinancialSummary, HolderService};
use sisrc_core::school::SchoolRecord;
use sisrc_shared::types::money::format_clp;
use sisrc_shared::types::{ExpenseId, SchoolId};
use sisrc_store::StoreError;

/// Creates the holder portal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/holder/{school_id}", get(get_portal))
        .route("/holder/{school_id}/submission", post(submit_rendicion))
        .route(
            "/holder/{school_id}/expenses/{expense_id}/justification",
            post(generate_justification),
        )
        .route("/holder/{school_id}/chat", post(chat_with_advisor))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for the advisor chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The holder's question.
    pub message: String,
}

/// Response for the holder portal view.
#[derive(Debug, Serialize)]
pub struct HolderPortalResponse {
    /// The school record in wire format.
    pub school: SchoolRecord,
    /// Financial summary over the expense lines.
    pub summary: FinancialSummary,
    /// Summary figures preformatted as full CLP.
    pub labels: PortalLabels,
    /// Advisor greeting opening the chat.
    pub greeting: ChatMessage,
    /// Proactive advisor hint shown next to the chat launcher.
    pub teaser_hint: &'static str,
}

/// Full CLP labels for the portal summary cards.
#[derive(Debug, Serialize)]
pub struct PortalLabels {
    /// Grant total, e.g. `$15.000.000`.
    pub total_grant: String,
    /// Expensed total to date.
    pub total_expensed: String,
    /// Projected execution amount.
    pub projected_amount: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

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

/// GET `/holder/{school_id}` - Assemble the holder portal view.
async fn get_portal(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> impl IntoResponse {
    match state.store.find(&SchoolId::new(school_id.as_str())) {
        Ok(Some(record)) => {
            let summary = HolderService::financial_summary(&record);
            let labels = PortalLabels {
                total_grant: format_clp(summary.total_grant),
                total_expensed: format_clp(summary.total_expensed),
                projected_amount: format_clp(summary.projected_amount),
            };

            (
                StatusCode::OK,
                Json(HolderPortalResponse {
                    school: record,
                    summary,
                    labels,
                    greeting: AdvisoryService::greeting(),
                    teaser_hint: AdvisoryService::teaser_hint(),
                }),
            )
                .into_response()
        }
        Ok(None) => store_error(&StoreError::SchoolNotFound(school_id)),
        Err(err) => store_error(&err),
    }
}

/// POST `/holder/{school_id}/submission` - Submit the rendición.
async fn submit_rendicion(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> impl IntoResponse {
    match state.store.submit(&SchoolId::new(school_id.as_str())) {
        Ok(receipt) => {
            info!(school_id = %school_id, folio = %receipt.folio, "Rendición submitted");
            (StatusCode::OK, Json(receipt)).into_response()
        }
        Err(err) => store_error(&err),
    }
}

/// POST `/holder/{school_id}/expenses/{expense_id}/justification` -
/// Generate and attach the advisory justification for one expense.
///
/// Waits out the configured advisory delay before answering.
async fn generate_justification(
    State(state): State<AppState>,
    Path((school_id, expense_id)): Path<(String, String)>,
) -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(state.advisory_delay_ms)).await;

    match state.store.attach_justification(
        &SchoolId::new(school_id.as_str()),
        &ExpenseId::new(expense_id.as_str()),
    ) {
        Ok(record) => {
            info!(school_id = %school_id, expense_id = %expense_id, "Justification attached");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => store_error(&err),
    }
}

/// POST `/holder/{school_id}/chat` - Ask the simulated advisor.
///
/// Waits out the configured advisory delay before answering.
async fn chat_with_advisor(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    match state.store.find(&SchoolId::new(school_id.as_str())) {
        Ok(Some(_)) => {
            tokio::time::sleep(Duration::from_millis(state.advisory_delay_ms)).await;
            Json(AdvisoryService::chat_reply(&request.message)).into_response()
        }
        Ok(None) => store_error(&StoreError::SchoolNotFound(school_id)),
        Err(err) => store_error(&err),
    }
}
