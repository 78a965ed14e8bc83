use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    analysis::{AnalysisErrorKind, SeoReport},
    api::dtos::{AnalyzeQuery, AuditsQuery, ErrorResponse, SaveAuditRequest, SaveAuditResponse},
    app_state::AppState,
    entities::Audit,
};

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

#[utoipa::path(
    get,
    path = "/analyze",
    tag = "analysis",
    params(AnalyzeQuery),
    responses(
        (status = 200, description = "SEO report for the page", body = SeoReport),
        (status = 400, description = "Missing or invalid URL", body = ErrorResponse),
        (status = 500, description = "The page could not be fetched", body = ErrorResponse)
    )
)]
pub async fn analyze(State(state): State<AppState>, Query(query): Query<AnalyzeQuery>) -> Response {
    let Some(url) = query.url.filter(|url| !url.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "URL is required");
    };

    match state.analyzer.analyze(&url).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => match err.kind() {
            AnalysisErrorKind::InvalidUrl => {
                info!(error = %err, "rejected analysis request");
                error_response(StatusCode::BAD_REQUEST, "Invalid URL")
            }
            AnalysisErrorKind::FetchFailed => {
                error!(error = %err, "analysis failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch and analyze page.",
                )
            }
        },
    }
}

#[utoipa::path(
    post,
    path = "/save-audit",
    tag = "audits",
    request_body = SaveAuditRequest,
    responses(
        (status = 200, description = "Audit stored", body = SaveAuditResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn save_audit(
    State(state): State<AppState>,
    Json(payload): Json<SaveAuditRequest>,
) -> Response {
    if let Err(message) = payload.validate() {
        return error_response(StatusCode::BAD_REQUEST, &message);
    }

    match state.audit_repo.save(payload.into_new_audit()).await {
        Ok(audit) => {
            info!(audit_id = %audit.id, "audit saved");
            (StatusCode::OK, Json(SaveAuditResponse { success: true })).into_response()
        }
        Err(err) => {
            error!(error = %err, "failed to save audit");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save audit")
        }
    }
}

#[utoipa::path(
    get,
    path = "/get-audits",
    tag = "audits",
    params(AuditsQuery),
    responses(
        (status = 200, description = "Saved audits, newest first", body = Vec<Audit>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_audits(State(state): State<AppState>, Query(query): Query<AuditsQuery>) -> Response {
    match state.audit_repo.list(query.email_filter()).await {
        Ok(audits) => (StatusCode::OK, Json(audits)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to load audits");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load audits")
        }
    }
}
