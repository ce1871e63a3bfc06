use crate::api::error::AppError;
use crate::entities::enums::{SubmissionStatus, SubmissionSubject};
use crate::entities::{prelude::*, *};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubmissionInput {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    pub subject: SubmissionSubject,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionPage {
    pub items: Vec<form_submissions::Model>,
    pub page: u64,
    pub limit: u64,
    pub total_count: u64,
}

pub struct SubmissionService;

impl SubmissionService {
    /// Public contact-form intake. Always starts as `new`.
    pub async fn create(
        db: &DatabaseConnection,
        input: CreateSubmissionInput,
    ) -> Result<form_submissions::Model, AppError> {
        let now = Utc::now();
        let submission = form_submissions::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            subject: Set(input.subject),
            message: Set(input.message),
            status: Set(SubmissionStatus::New),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(submission.insert(db).await?)
    }

    /// Newest first, optional status filter, offset pagination.
    pub async fn list(
        db: &DatabaseConnection,
        status: Option<SubmissionStatus>,
        page: u64,
        limit: u64,
    ) -> Result<SubmissionPage, AppError> {
        let mut query = FormSubmissions::find();
        if let Some(status) = status {
            query = query.filter(form_submissions::Column::Status.eq(status));
        }

        let items_query = query
            .clone()
            .order_by_desc(form_submissions::Column::CreatedAt)
            .limit(limit)
            .offset((page.saturating_sub(1)) * limit)
            .all(db);
        let count_query = query.count(db);

        let (items, total_count) = tokio::try_join!(items_query, count_query)?;

        Ok(SubmissionPage {
            items,
            page,
            limit,
            total_count,
        })
    }

    pub async fn get(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<form_submissions::Model, AppError> {
        FormSubmissions::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    /// Any status value is settable; there is no enforced state machine.
    pub async fn update_status(
        db: &DatabaseConnection,
        id: Uuid,
        status: SubmissionStatus,
    ) -> Result<form_submissions::Model, AppError> {
        let submission = Self::get(db, id).await?;

        let mut active: form_submissions::ActiveModel = submission.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), AppError> {
        Self::get(db, id).await?;
        FormSubmissions::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// Nonexistent ids are silently ignored, mirroring bulk publish.
    pub async fn bulk_delete(db: &DatabaseConnection, ids: Vec<Uuid>) -> Result<u64, AppError> {
        let result = FormSubmissions::delete_many()
            .filter(form_submissions::Column::Id.is_in(ids))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
