use crate::api::error::AppError;
use crate::entities::{prelude::*, *};
use crate::services::category::compute_category;
use crate::services::storage::StorageService;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

pub mod bulk;
pub mod list;
pub mod types;

pub use types::*;

pub struct ModelService {
    db: DatabaseConnection,
    storage: Arc<dyn StorageService>,
}

impl ModelService {
    pub fn new(db: DatabaseConnection, storage: Arc<dyn StorageService>) -> Self {
        Self { db, storage }
    }

    pub async fn create(&self, input: CreateModelInput) -> Result<models::Model, AppError> {
        let now = Utc::now();
        let category = compute_category(input.date_of_birth, input.gender);

        let model = models::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            nickname: Set(input.nickname),
            gender: Set(input.gender),
            date_of_birth: Set(input.date_of_birth),
            nationality: Set(input.nationality),
            ethnicity: Set(input.ethnicity),
            bio: Set(input.bio),
            talents: Set(serde_json::json!(input.talents)),
            experiences: Set(serde_json::json!(input.experiences)),
            height: Set(input.height),
            weight: Set(input.weight),
            hips: Set(input.hips),
            hair_color: Set(input.hair_color),
            eye_color: Set(input.eye_color),
            local: Set(input.local),
            in_town: Set(input.in_town),
            published: Set(input.published),
            profile_image_url: Set(None),
            category: Set(category),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&self.db).await?)
    }

    /// Merges the partial over the stored row and recomputes the category
    /// from the merged (date_of_birth, gender) pair, unless the partial
    /// carries an explicit category override.
    pub async fn update(&self, id: Uuid, input: UpdateModelInput) -> Result<models::Model, AppError> {
        let existing = Models::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

        let merged_gender = input.gender.unwrap_or(existing.gender);
        let merged_dob = input.date_of_birth.or(existing.date_of_birth);
        let category = match input.category {
            Some(c) => c,
            None => compute_category(merged_dob, merged_gender),
        };

        let mut active: models::ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(nickname) = input.nickname {
            active.nickname = Set(Some(nickname));
        }
        active.gender = Set(merged_gender);
        if input.date_of_birth.is_some() {
            active.date_of_birth = Set(merged_dob);
        }
        if let Some(nationality) = input.nationality {
            active.nationality = Set(Some(nationality));
        }
        if let Some(ethnicity) = input.ethnicity {
            active.ethnicity = Set(Some(ethnicity));
        }
        if let Some(bio) = input.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(talents) = input.talents {
            active.talents = Set(serde_json::json!(talents));
        }
        if let Some(experiences) = input.experiences {
            active.experiences = Set(serde_json::json!(experiences));
        }
        if let Some(height) = input.height {
            active.height = Set(Some(height));
        }
        if let Some(weight) = input.weight {
            active.weight = Set(Some(weight));
        }
        if let Some(hips) = input.hips {
            active.hips = Set(Some(hips));
        }
        if let Some(hair_color) = input.hair_color {
            active.hair_color = Set(Some(hair_color));
        }
        if let Some(eye_color) = input.eye_color {
            active.eye_color = Set(Some(eye_color));
        }
        if let Some(local) = input.local {
            active.local = Set(local);
        }
        if let Some(in_town) = input.in_town {
            active.in_town = Set(in_town);
        }
        if let Some(published) = input.published {
            active.published = Set(published);
        }
        active.category = Set(category);
        active.updated_at = Set(Utc::now());

        Ok(active.update(&self.db).await?)
    }

    /// Row plus its image collection, ordered by gallery position.
    pub async fn get(&self, id: Uuid) -> Result<(models::Model, Vec<model_images::Model>), AppError> {
        let model = Models::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

        let images = ModelImages::find()
            .filter(model_images::Column::ModelId.eq(id))
            .order_by_asc(model_images::Column::SortOrder)
            .order_by_asc(model_images::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok((model, images))
    }

    /// Deletes the row (FK cascade removes the image rows) and fires a
    /// detached best-effort cleanup of every owned blob. Cleanup failures
    /// are logged and never affect the result.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteModelResult, AppError> {
        let (model, images) = self.get(id).await?;

        Models::delete_by_id(id).exec(&self.db).await?;

        let mut urls: Vec<String> = images.into_iter().map(|img| img.url).collect();
        if let Some(url) = model.profile_image_url {
            urls.push(url);
        }

        let storage = self.storage.clone();
        tokio::spawn(async move {
            for url in urls {
                if let Err(e) = storage.delete_by_url(&url).await {
                    tracing::warn!("Blob cleanup failed for {}: {}", url, e);
                }
            }
        });

        Ok(DeleteModelResult { success: true, id })
    }
}
