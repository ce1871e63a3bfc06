use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::entities::enums::{Category, EyeColor, Gender, HairColor};
use crate::entities::{model_images, models};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateModelInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub nickname: Option<String>,
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub talents: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub hips: Option<f32>,
    pub hair_color: Option<HairColor>,
    pub eye_color: Option<EyeColor>,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub in_town: bool,
    #[serde(default)]
    pub published: bool,
}

/// Partial update: absent fields keep their stored value. An explicit
/// JSON `null` deserializes the same as an absent field, so nullable
/// attributes cannot be cleared through this input. Supplying
/// `category` pins it for this update and skips recomputation.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateModelInput {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    pub bio: Option<String>,
    pub talents: Option<Vec<String>>,
    pub experiences: Option<Vec<String>>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub hips: Option<f32>,
    pub hair_color: Option<HairColor>,
    pub eye_color: Option<EyeColor>,
    pub local: Option<bool>,
    pub in_town: Option<bool>,
    pub published: Option<bool>,
    pub category: Option<Category>,
}

/// Conjunctive listing filters; `None` means "no filter", not `false`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ModelFilter {
    pub category: Option<Category>,
    pub local: Option<bool>,
    pub in_town: Option<bool>,
    pub published: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelPage {
    pub items: Vec<models::Model>,
    pub page: u64,
    pub limit: u64,
    pub total_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelDetail {
    #[serde(flatten)]
    pub model: models::Model,
    pub images: Vec<model_images::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteModelResult {
    pub success: bool,
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkPublishRequest {
    pub ids: Vec<Uuid>,
    pub published: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkPublishResult {
    pub success: bool,
    pub updated_count: u64,
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderEntry {
    pub id: Uuid,
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderRequest {
    pub entries: Vec<ReorderEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReorderResult {
    pub success: bool,
    pub updated_count: u64,
}
