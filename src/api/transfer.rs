//! CSV import and export routes

use super::error::{messages, ApiError, ApiResult, OrApiError};
use super::state::AppState;
use crate::core::import::ImportSummary;
use crate::domain::{ImportError, LeadFilter};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Pull the CSV text out of an import body
///
/// Anything other than a non-empty string under `csvData` is treated as
/// a missing payload.
fn csv_payload(body: &Value) -> Result<&str, ImportError> {
    body.get("csvData")
        .and_then(Value::as_str)
        .filter(|csv| !csv.is_empty())
        .ok_or(ImportError::MissingPayload)
}

async fn import_leads(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ImportSummary>> {
    let Json(body) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let csv = csv_payload(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let summary = state
        .importer
        .import_csv(csv)
        .await
        .or_api_error(messages::IMPORT)?;
    Ok(Json(summary))
}

async fn export_leads(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<LeadFilter>,
) -> ApiResult<impl IntoResponse> {
    let export = state
        .exporter
        .export(&filter.normalized())
        .await
        .or_api_error(messages::EXPORT)?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (header::CONTENT_DISPOSITION, export.content_disposition()),
    ];
    Ok((headers, export.body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leads/import", post(import_leads))
        .route("/api/leads/export", get(export_leads))
}
