//! HTTP surface: one inbound request maps to one analysis or audit-store call.

pub mod dtos;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    analysis::SeoReport,
    app_state::AppState,
    entities::Audit,
    extractor::SeoSignals,
    health::{self, HealthResponse},
    scoring::{Rule, RuleOutcome},
};
use dtos::{ErrorResponse, SaveAuditRequest, SaveAuditResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::analyze,
        handlers::save_audit,
        handlers::get_audits,
        health::health_check
    ),
    components(schemas(
        SeoReport,
        SeoSignals,
        Rule,
        RuleOutcome,
        Audit,
        ErrorResponse,
        SaveAuditRequest,
        SaveAuditResponse,
        HealthResponse
    )),
    tags(
        (name = "analysis", description = "On-page and robots.txt SEO analysis"),
        (name = "audits", description = "Saved audit history"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", get(handlers::analyze))
        .route("/save-audit", post(handlers::save_audit))
        .route("/get-audits", get(handlers::get_audits))
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
