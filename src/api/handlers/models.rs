use crate::api::error::AppError;
use crate::entities::enums::Category;
use crate::entities::models;
use crate::services::model_service::{
    BulkPublishRequest, BulkPublishResult, CreateModelInput, DeleteModelResult, ModelDetail,
    ModelFilter, ModelPage, ReorderRequest, ReorderResult, UpdateModelInput,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ListModelsQuery {
    pub category: Option<Category>,
    pub local: Option<bool>,
    pub in_town: Option<bool>,
    pub published: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[utoipa::path(
    get,
    path = "/models",
    params(
        ("category" = Option<String>, Query, description = "Filter by display category"),
        ("local" = Option<bool>, Query, description = "Filter by local flag"),
        ("in_town" = Option<bool>, Query, description = "Filter by in-town flag"),
        ("published" = Option<bool>, Query, description = "Filter by published flag"),
        ("search" = Option<String>, Query, description = "Free-text search"),
        ("page" = Option<u64>, Query, description = "Page number (1-based)"),
        ("limit" = Option<u64>, Query, description = "Page size (max 100)"),
        ("sort_by" = Option<String>, Query, description = "Sort column"),
        ("sort_order" = Option<String>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Paginated model listing", body = ModelPage)
    ),
    tag = "models"
)]
pub async fn list_models(
    State(state): State<crate::AppState>,
    Query(query): Query<ListModelsQuery>,
) -> Result<Json<ModelPage>, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);
    let filter = ModelFilter {
        category: query.category,
        local: query.local,
        in_town: query.in_town,
        published: query.published,
        search: query.search,
    };

    let result = state
        .model_service
        .list(filter, page, limit, query.sort_by, query.sort_order)
        .await?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/models/{id}",
    params(("id" = Uuid, Path, description = "Model ID")),
    responses(
        (status = 200, description = "Model with its ordered image collection", body = ModelDetail),
        (status = 404, description = "Model not found")
    ),
    tag = "models"
)]
pub async fn get_model(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ModelDetail>, AppError> {
    let (model, images) = state.model_service.get(id).await?;
    Ok(Json(ModelDetail { model, images }))
}

#[utoipa::path(
    post,
    path = "/models",
    request_body = CreateModelInput,
    responses(
        (status = 200, description = "Model created", body = models::Model),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "models"
)]
pub async fn create_model(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateModelInput>,
) -> Result<Json<models::Model>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let model = state.model_service.create(payload).await?;
    Ok(Json(model))
}

#[utoipa::path(
    put,
    path = "/models/{id}",
    params(("id" = Uuid, Path, description = "Model ID")),
    request_body = UpdateModelInput,
    responses(
        (status = 200, description = "Model updated", body = models::Model),
        (status = 404, description = "Model not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "models"
)]
pub async fn update_model(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModelInput>,
) -> Result<Json<models::Model>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let model = state.model_service.update(id, payload).await?;
    Ok(Json(model))
}

#[utoipa::path(
    delete,
    path = "/models/{id}",
    params(("id" = Uuid, Path, description = "Model ID")),
    responses(
        (status = 200, description = "Model deleted", body = DeleteModelResult),
        (status = 404, description = "Model not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "models"
)]
pub async fn delete_model(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteModelResult>, AppError> {
    let result = state.model_service.delete(id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/models/bulk-publish",
    request_body = BulkPublishRequest,
    responses(
        (status = 200, description = "Publish flag set for matching ids", body = BulkPublishResult),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "models"
)]
pub async fn bulk_publish(
    State(state): State<crate::AppState>,
    Json(payload): Json<BulkPublishRequest>,
) -> Result<Json<BulkPublishResult>, AppError> {
    let result = state
        .model_service
        .bulk_update_published(payload.ids, payload.published)
        .await?;
    Ok(Json(result))
}

#[utoipa::path(
    put,
    path = "/models/{id}/images/reorder",
    params(("id" = Uuid, Path, description = "Model ID")),
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Gallery reordered", body = ReorderResult),
        (status = 404, description = "Model not found"),
        (status = 409, description = "Supplied image ids are not a subset of the model's images"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "models"
)]
pub async fn reorder_portfolio_images(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<ReorderResult>, AppError> {
    let result = state
        .model_service
        .reorder_portfolio_images(id, payload.entries)
        .await?;
    Ok(Json(result))
}
