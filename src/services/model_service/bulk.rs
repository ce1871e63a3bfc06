use crate::api::error::AppError;
use crate::entities::{prelude::*, *};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use super::{BulkPublishResult, ModelService, ReorderEntry, ReorderResult};

impl ModelService {
    /// One batched UPDATE over the matching ids; nonexistent ids are
    /// silently ignored and the ids actually updated are reported back.
    pub async fn bulk_update_published(
        &self,
        ids: Vec<Uuid>,
        published: bool,
    ) -> Result<BulkPublishResult, AppError> {
        let existing: Vec<Uuid> = Models::find()
            .select_only()
            .column(models::Column::Id)
            .filter(models::Column::Id.is_in(ids))
            .into_tuple()
            .all(&self.db)
            .await?;

        if !existing.is_empty() {
            Models::update_many()
                .col_expr(models::Column::Published, Expr::value(published))
                .col_expr(models::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(models::Column::Id.is_in(existing.clone()))
                .exec(&self.db)
                .await?;
        }

        Ok(BulkPublishResult {
            success: true,
            updated_count: existing.len() as u64,
            ids: existing,
        })
    }

    /// All-or-nothing gallery reorder. Every supplied image id must belong
    /// to the target model; otherwise the whole call fails with zero rows
    /// mutated. The per-row updates run inside one transaction.
    pub async fn reorder_portfolio_images(
        &self,
        model_id: Uuid,
        entries: Vec<ReorderEntry>,
    ) -> Result<ReorderResult, AppError> {
        let txn = self.db.begin().await?;

        Models::find_by_id(model_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;

        let ids: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        let matched = ModelImages::find()
            .filter(model_images::Column::ModelId.eq(model_id))
            .filter(model_images::Column::Id.is_in(ids))
            .count(&txn)
            .await?;

        if matched != entries.len() as u64 {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "Some images do not belong to this model or do not exist".to_string(),
            ));
        }

        for entry in &entries {
            ModelImages::update_many()
                .col_expr(model_images::Column::SortOrder, Expr::value(entry.sort_order))
                .filter(model_images::Column::Id.eq(entry.id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(ReorderResult {
            success: true,
            updated_count: entries.len() as u64,
        })
    }
}
