use crate::api::error::AppError;
use crate::entities::enums::ImageType;
use crate::entities::{prelude::*, *};
use chrono::Utc;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::storage::StorageService;

/// Profile preset: center-cropped 3:4 portrait.
const PROFILE_WIDTH: u32 = 900;
const PROFILE_HEIGHT: u32 = 1200;
/// Portfolio preset: bounded within a square, never upscaled.
const PORTFOLIO_MAX: u32 = 1600;
const JPEG_QUALITY: u8 = 85;

const PROFILE_PREFIX: &str = "models/profile";
const PORTFOLIO_PREFIX: &str = "models/portfolio";

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileImageResult {
    pub model: models::Model,
    pub image_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageDeleteResult {
    pub success: bool,
    pub id: Uuid,
    pub url: String,
}

pub struct ImageService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
}

impl ImageService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>) -> Self {
        Self { db, storage }
    }

    /// Re-encodes the upload with the profile preset, stores it and points
    /// the model at the new URL. A replaced blob is deleted by a detached
    /// best-effort task.
    pub async fn upload_profile_image(
        &self,
        model_id: Uuid,
        data: Vec<u8>,
    ) -> Result<ProfileImageResult, AppError> {
        let model = Models::find_by_id(model_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

        let processed = standardize_profile(&data)?;
        let url = self
            .storage
            .upload(processed, mime::IMAGE_JPEG.as_ref(), PROFILE_PREFIX)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload image: {}", e)))?;

        let old_url = model.profile_image_url.clone();
        let mut active: models::ActiveModel = model.into();
        active.profile_image_url = Set(Some(url.clone()));
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await?;

        if let Some(old) = old_url {
            let storage = self.storage.clone();
            tokio::spawn(async move {
                if let Err(e) = storage.delete_by_url(&old).await {
                    tracing::warn!("Failed to delete replaced profile image {}: {}", old, e);
                }
            });
        }

        Ok(ProfileImageResult {
            model: updated,
            image_url: url,
        })
    }

    /// Re-encodes the upload with the portfolio preset, stores it and
    /// inserts an owned gallery row.
    pub async fn add_portfolio_image(
        &self,
        model_id: Uuid,
        data: Vec<u8>,
        image_type: Option<ImageType>,
        sort_order: Option<i32>,
    ) -> Result<model_images::Model, AppError> {
        Models::find_by_id(model_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

        let processed = standardize_portfolio(&data)?;
        let url = self
            .storage
            .upload(processed, mime::IMAGE_JPEG.as_ref(), PORTFOLIO_PREFIX)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload image: {}", e)))?;

        let row = model_images::ActiveModel {
            id: Set(Uuid::new_v4()),
            model_id: Set(model_id),
            url: Set(url),
            image_type: Set(image_type),
            sort_order: Set(sort_order.unwrap_or(0)),
            created_at: Set(Utc::now()),
        };

        Ok(row.insert(&self.db).await?)
    }

    /// Deletes the gallery row, then fires a best-effort blob delete.
    pub async fn delete_portfolio_image(&self, id: Uuid) -> Result<ImageDeleteResult, AppError> {
        let image = ModelImages::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        ModelImages::delete_by_id(id).exec(&self.db).await?;

        let cleanup_url = image.url.clone();
        let storage = self.storage.clone();
        tokio::spawn(async move {
            if let Err(e) = storage.delete_by_url(&cleanup_url).await {
                tracing::warn!("Failed to delete portfolio blob {}: {}", cleanup_url, e);
            }
        });

        Ok(ImageDeleteResult {
            success: true,
            id,
            url: image.url,
        })
    }
}

fn decode(data: &[u8]) -> Result<DynamicImage, AppError> {
    let kind = infer::get(data)
        .ok_or_else(|| AppError::BadRequest("Unrecognized file type".to_string()))?;
    if !kind.mime_type().starts_with("image/") {
        return Err(AppError::BadRequest(
            "Uploaded file is not an image".to_string(),
        ));
    }
    image::load_from_memory(data)
        .map_err(|e| AppError::BadRequest(format!("Failed to decode image: {}", e)))
}

fn encode_jpeg(img: &DynamicImage) -> Result<Vec<u8>, AppError> {
    // JPEG has no alpha channel; flatten to RGB first.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| AppError::Internal(format!("Failed to encode image: {}", e)))?;
    Ok(out)
}

fn standardize_profile(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = decode(data)?;
    let img = img.resize_to_fill(PROFILE_WIDTH, PROFILE_HEIGHT, FilterType::Lanczos3);
    encode_jpeg(&img)
}

fn standardize_portfolio(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = decode(data)?;
    let img = if img.width() > PORTFOLIO_MAX || img.height() > PORTFOLIO_MAX {
        img.resize(PORTFOLIO_MAX, PORTFOLIO_MAX, FilterType::Lanczos3)
    } else {
        img
    };
    encode_jpeg(&img)
}
