use crate::api::error::AppError;
use crate::entities::enums::ImageType;
use crate::entities::model_images;
use crate::services::image_service::{ImageDeleteResult, ProfileImageResult};
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/models/{id}/profile-image",
    params(("id" = Uuid, Path, description = "Model ID")),
    request_body(content = Object, description = "Profile image file", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Profile image uploaded", body = ProfileImageResult),
        (status = 400, description = "Not a decodable image"),
        (status = 404, description = "Model not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "images"
)]
pub async fn upload_profile_image(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ProfileImageResult>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or_else(|| AppError::BadRequest("No file found in request".to_string()))?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .to_vec();

    let result = state.image_service.upload_profile_image(id, data).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/models/{id}/images",
    params(("id" = Uuid, Path, description = "Model ID")),
    request_body(content = Object, description = "Portfolio image file with optional `type` and `sort_order` fields", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Portfolio image added", body = model_images::Model),
        (status = 400, description = "Not a decodable image"),
        (status = 404, description = "Model not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "images"
)]
pub async fn add_portfolio_image(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<model_images::Model>, AppError> {
    let mut data: Option<Vec<u8>> = None;
    let mut image_type: Option<ImageType> = None;
    let mut sort_order: Option<i32> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?
                        .to_vec(),
                );
            }
            "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                image_type = Some(ImageType::parse(&text).ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown image type '{}'", text))
                })?);
            }
            "sort_order" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                sort_order = Some(text.parse().map_err(|_| {
                    AppError::BadRequest(format!("Invalid sort_order '{}'", text))
                })?);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("No file found in request".to_string()))?;

    let image = state
        .image_service
        .add_portfolio_image(id, data, image_type, sort_order)
        .await?;
    Ok(Json(image))
}

#[utoipa::path(
    delete,
    path = "/images/{id}",
    params(("id" = Uuid, Path, description = "Portfolio image ID")),
    responses(
        (status = 200, description = "Portfolio image deleted", body = ImageDeleteResult),
        (status = 404, description = "Image not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("jwt" = [])),
    tag = "images"
)]
pub async fn delete_portfolio_image(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ImageDeleteResult>, AppError> {
    let result = state.image_service.delete_portfolio_image(id).await?;
    Ok(Json(result))
}
