use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{Category, EyeColor, Gender, HairColor};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "models")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub gender: Gender,
    pub date_of_birth: Option<Date>,
    pub nationality: Option<String>,
    pub ethnicity: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    /// JSON string array.
    pub talents: Json,
    /// JSON string array.
    pub experiences: Json,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub hips: Option<f32>,
    pub hair_color: Option<HairColor>,
    pub eye_color: Option<EyeColor>,
    #[sea_orm(default_expr = "Expr::value(false)")]
    pub local: bool,
    #[sea_orm(default_expr = "Expr::value(false)")]
    pub in_town: bool,
    #[sea_orm(default_expr = "Expr::value(false)")]
    pub published: bool,
    pub profile_image_url: Option<String>,
    /// Derived from (date_of_birth, gender); kept consistent by the service.
    pub category: Category,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::model_images::Entity")]
    ModelImages,
}

impl Related<super::model_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModelImages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
