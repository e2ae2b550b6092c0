use crate::infra::{AppState, ComplianceSnapshotRequest};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use raffle_audit::compliance::export::{default_export_file_name, ensure_exportable};
use raffle_audit::compliance::{
    export_json, identify_critical_issues, raffles_to_csv, ComplianceAlert, ComplianceReport,
    ReportInputs,
};
use raffle_audit::error::AppError;
use serde_json::json;
use tracing::info;

pub(crate) fn compliance_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/compliance/report", post(report_endpoint))
        .route("/api/v1/compliance/alerts", post(alerts_endpoint))
        .route("/api/v1/compliance/export/csv", post(export_csv_endpoint))
        .route("/api/v1/compliance/export/json", post(export_json_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn report_endpoint(
    Json(payload): Json<ComplianceSnapshotRequest>,
) -> Json<ComplianceReport> {
    let ComplianceSnapshotRequest {
        operator,
        summary,
        raffles,
        chain_integrity,
    } = payload;

    let issues = identify_critical_issues(&raffles);
    let report = ComplianceReport::generate(ReportInputs {
        operator: &operator,
        summary: &summary,
        raffles: &raffles,
        chain_integrity,
        critical_issues: &issues,
    });

    info!(
        operator = %operator.name,
        raffles = raffles.len(),
        issues = issues.len(),
        "compliance report generated"
    );

    Json(report)
}

pub(crate) async fn alerts_endpoint(
    Json(payload): Json<ComplianceSnapshotRequest>,
) -> Json<Vec<ComplianceAlert>> {
    Json(identify_critical_issues(&payload.raffles))
}

pub(crate) async fn export_csv_endpoint(
    Json(payload): Json<ComplianceSnapshotRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_exportable(&payload.raffles)?;
    let body = raffles_to_csv(&payload.raffles)?;
    let file_name = default_export_file_name(&payload.operator, "csv", Utc::now());

    info!(operator = %payload.operator.name, rows = payload.raffles.len(), "csv export served");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

pub(crate) async fn export_json_endpoint(
    Json(payload): Json<ComplianceSnapshotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ComplianceSnapshotRequest {
        operator,
        summary,
        raffles,
        ..
    } = payload;

    ensure_exportable(&raffles)?;
    let now = Utc::now();
    let body = export_json(&operator, &summary, &raffles, now)?;
    let file_name = default_export_file_name(&operator, "json", now);

    info!(operator = %operator.name, rows = raffles.len(), "json export served");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}
