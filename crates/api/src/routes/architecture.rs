//! Static architecture view route.
//!
//! Describes the platform's data flow (external sources, consolidation
//! core, actor views) so the front end can render the diagram without
//! hardcoding it.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Creates the architecture routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/architecture/flow", get(get_flow))
}

// ============================================================================
// Response Types
// ============================================================================

/// Full data-flow description.
#[derive(Debug, Serialize)]
pub struct DataFlowResponse {
    /// Diagram title.
    pub title: &'static str,
    /// Diagram subtitle.
    pub subtitle: &'static str,
    /// External ingestion sources, left column.
    pub sources: Vec<FlowNode>,
    /// Consolidation core, middle column.
    pub core: CoreStage,
    /// Actor-facing views, right column.
    pub views: Vec<FlowNode>,
    /// Platform guarantees shown under the diagram.
    pub guarantees: Vec<Guarantee>,
}

/// One source or view node.
#[derive(Debug, Serialize)]
pub struct FlowNode {
    /// Node name.
    pub name: &'static str,
    /// One-line description.
    pub detail: &'static str,
}

/// The consolidation core node.
#[derive(Debug, Serialize)]
pub struct CoreStage {
    /// Core name.
    pub name: &'static str,
    /// One-line description.
    pub detail: &'static str,
    /// Processing capabilities listed inside the node.
    pub capabilities: Vec<&'static str>,
}

/// One platform guarantee badge.
#[derive(Debug, Serialize)]
pub struct Guarantee {
    /// Headline figure, e.g. `99.9%`.
    pub figure: &'static str,
    /// What the figure stands for.
    pub label: &'static str,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/architecture/flow` - Describe the platform data flow.
async fn get_flow() -> Json<DataFlowResponse> {
    Json(DataFlowResponse {
        title: "Arquitectura Funcional & Flujo de Datos",
        subtitle: "Visualización del ecosistema SISRC: Integración de fuentes externas, \
                   procesamiento en el Núcleo y distribución a los distintos actores.",
        sources: vec![
            FlowNode {
                name: "DT (LRE) + Previred",
                detail: "Gastos en Personal",
            },
            FlowNode {
                name: "SII (DTE)",
                detail: "Facturas y Boletas",
            },
            FlowNode {
                name: "Legacy SIE",
                detail: "Datos Históricos",
            },
        ],
        core: CoreStage {
            name: "NÚCLEO SISRC",
            detail: "Motor de Consolidación",
            capabilities: vec![
                "Cruce Masivo (Transf. vs Gasto)",
                "Validación Normativa (Circular 30)",
                "Microservicios Docker/K8s",
            ],
        },
        views: vec![
            FlowNode {
                name: "Front Sostenedor",
                detail: "Validación Pre-Carga, Asesor Virtual",
            },
            FlowNode {
                name: "Admin MINEDUC",
                detail: "Gestión Regional, Monitor Cierre",
            },
            FlowNode {
                name: "Fiscalización (SIE)",
                detail: "Fiscalización Digital (Bots), Matrices Riesgo",
            },
        ],
        guarantees: vec![
            Guarantee {
                figure: "99.9%",
                label: "SLA Disponibilidad",
            },
            Guarantee {
                figure: "ISO 27001",
                label: "Estándar Seguridad",
            },
            Guarantee {
                figure: "0% Papel",
                label: "Transformación Digital",
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sisrc_store::SchoolStore;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_flow_describes_all_three_columns() {
        let state = AppState {
            store: Arc::new(SchoolStore::from_seed()),
            advisory_delay_ms: 0,
        };
        let app = Router::new().merge(routes()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/architecture/flow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["title"], "Arquitectura Funcional & Flujo de Datos");
        assert_eq!(json["sources"].as_array().unwrap().len(), 3);
        assert_eq!(json["views"].as_array().unwrap().len(), 3);
        assert_eq!(json["guarantees"].as_array().unwrap().len(), 3);

        assert_eq!(json["core"]["name"], "NÚCLEO SISRC");
        assert_eq!(
            json["core"]["capabilities"][1],
            "Validación Normativa (Circular 30)"
        );
        assert_eq!(json["sources"][0]["name"], "DT (LRE) + Previred");
        assert_eq!(json["guarantees"][0]["figure"], "99.9%");
    }
}
