use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Domain value enums. Each is defined once here and consumed by the
/// validation layer, the persistence layer (stored as lowercase text) and
/// the JSON boundary.

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
}

/// Derived display bucket for a model. Kids and seniors are age-based
/// overrides of the gender bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[sea_orm(string_value = "kids")]
    Kids,
    #[sea_orm(string_value = "seniors")]
    Seniors,
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
}

impl From<Gender> for Category {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => Category::Male,
            Gender::Female => Category::Female,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    #[sea_orm(string_value = "black")]
    Black,
    #[sea_orm(string_value = "brown")]
    Brown,
    #[sea_orm(string_value = "blonde")]
    Blonde,
    #[sea_orm(string_value = "red")]
    Red,
    #[sea_orm(string_value = "gray")]
    Gray,
    #[sea_orm(string_value = "white")]
    White,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum EyeColor {
    #[sea_orm(string_value = "brown")]
    Brown,
    #[sea_orm(string_value = "blue")]
    Blue,
    #[sea_orm(string_value = "green")]
    Green,
    #[sea_orm(string_value = "hazel")]
    Hazel,
    #[sea_orm(string_value = "gray")]
    Gray,
    #[sea_orm(string_value = "amber")]
    Amber,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[sea_orm(string_value = "book")]
    Book,
    #[sea_orm(string_value = "polaroid")]
    Polaroid,
    #[sea_orm(string_value = "composite")]
    Composite,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ImageType {
    /// Parse a multipart text field value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "book" => Some(ImageType::Book),
            "polaroid" => Some(ImageType::Polaroid),
            "composite" => Some(ImageType::Composite),
            "other" => Some(ImageType::Other),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionSubject {
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "booking")]
    Booking,
    #[sea_orm(string_value = "application")]
    Application,
    #[sea_orm(string_value = "partnership")]
    Partnership,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "responded")]
    Responded,
}
