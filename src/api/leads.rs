//! Lead CRUD routes

use super::error::{messages, ApiError, ApiResult, OrApiError};
use super::state::AppState;
use crate::domain::{Lead, LeadFilter, LeadId, LeadPage, LeadUpdate, NewLeadRequest};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of the list endpoint
///
/// Page and limit stay text so an empty or malformed value can be answered
/// with the same `{"error": ...}` body as every other failure.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(flatten)]
    pub filter: LeadFilter,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    message: &'static str,
}

fn parse_id(raw: &str) -> ApiResult<LeadId> {
    raw.parse().map_err(ApiError::bad_request)
}

fn parse_positive(raw: Option<&str>, name: &str) -> ApiResult<Option<i64>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("{name} must be a positive integer"))),
    }
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

async fn list_leads(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<LeadPage>> {
    let page = parse_positive(params.page.as_deref(), "Page")?;
    let limit = parse_positive(params.limit.as_deref(), "Limit")?;

    let page = state
        .leads
        .list(params.filter, page, limit)
        .await
        .or_api_error(messages::LIST)?;
    Ok(Json(page))
}

async fn create_lead(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewLeadRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Lead>)> {
    let request = json_body(body)?;
    let lead = state
        .leads
        .create(request)
        .await
        .or_api_error(messages::CREATE)?;
    Ok((StatusCode::CREATED, Json(lead)))
}

async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Lead>> {
    let id = parse_id(&id)?;
    let lead = state.leads.get(id).await.or_api_error(messages::FETCH)?;
    Ok(Json(lead))
}

async fn update_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<LeadUpdate>, JsonRejection>,
) -> ApiResult<Json<Lead>> {
    let id = parse_id(&id)?;
    let update = json_body(body)?;
    let lead = state
        .leads
        .update(id, update)
        .await
        .or_api_error(messages::UPDATE)?;
    Ok(Json(lead))
}

async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.leads.delete(id).await.or_api_error(messages::DELETE)?;
    Ok(Json(DeleteResponse {
        message: "Lead deleted successfully",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leads", get(list_leads).post(create_lead))
        .route(
            "/api/leads/{id}",
            get(get_lead).put(update_lead).delete(delete_lead),
        )
}
