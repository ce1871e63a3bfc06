use crate::api::error::AppError;
use crate::entities::enums::SubmissionStatus;
use crate::entities::form_submissions;
use crate::services::submission_service::{
    CreateSubmissionInput, SubmissionPage, SubmissionService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ListSubmissionsQuery {
    pub status: Option<SubmissionStatus>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: SubmissionStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkDeleteRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkDeleteResponse {
    pub success: bool,
    pub deleted_count: u64,
}

#[utoipa::path(
    post,
    path = "/submissions",
    request_body = CreateSubmissionInput,
    responses(
        (status = 200, description = "Submission recorded", body = form_submissions::Model),
        (status = 400, description = "Validation failed")
    ),
    tag = "submissions"
)]
pub async fn create_submission(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateSubmissionInput>,
) -> Result<Json<form_submissions::Model>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let submission = SubmissionService::create(&state.db, payload).await?;
    Ok(Json(submission))
}

#[utoipa::path(
    get,
    path = "/submissions",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Page size (max 100)")
    ),
    responses(
        (status = 200, description = "Paginated submissions, newest first", body = SubmissionPage),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "submissions"
)]
pub async fn list_submissions(
    State(state): State<crate::AppState>,
    Query(query): Query<ListSubmissionsQuery>,
) -> Result<Json<SubmissionPage>, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);

    let result = SubmissionService::list(&state.db, query.status, page, limit).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission detail", body = form_submissions::Model),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "submissions"
)]
pub async fn get_submission(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<form_submissions::Model>, AppError> {
    let submission = SubmissionService::get(&state.db, id).await?;
    Ok(Json(submission))
}

#[utoipa::path(
    put,
    path = "/submissions/{id}/status",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = form_submissions::Model),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "submissions"
)]
pub async fn update_submission_status(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<form_submissions::Model>, AppError> {
    let submission = SubmissionService::update_status(&state.db, id, payload.status).await?;
    Ok(Json(submission))
}

#[utoipa::path(
    delete,
    path = "/submissions/{id}",
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 404, description = "Submission not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "submissions"
)]
pub async fn delete_submission(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    SubmissionService::delete(&state.db, id).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

#[utoipa::path(
    post,
    path = "/submissions/bulk-delete",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Matching submissions deleted", body = BulkDeleteResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "submissions"
)]
pub async fn bulk_delete_submissions(
    State(state): State<crate::AppState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, AppError> {
    let deleted_count = SubmissionService::bulk_delete(&state.db, payload.ids).await?;
    Ok(Json(BulkDeleteResponse {
        success: true,
        deleted_count,
    }))
}
