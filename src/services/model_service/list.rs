use crate::api::error::AppError;
use crate::entities::{prelude::*, *};
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::{ModelFilter, ModelPage, ModelService};

impl ModelService {
    /// Filtered, sorted, offset-paginated listing. The total count shares
    /// the filter predicate and runs concurrently with the page query.
    pub async fn list(
        &self,
        filter: ModelFilter,
        page: u64,
        limit: u64,
        sort_by: Option<String>,
        sort_order: Option<String>,
    ) -> Result<ModelPage, AppError> {
        let cond = build_condition(&filter);

        let sort_column = match sort_by.as_deref() {
            Some("updated_at") => models::Column::UpdatedAt,
            Some("name") => models::Column::Name,
            Some("date_of_birth") => models::Column::DateOfBirth,
            Some("height") => models::Column::Height,
            // Unknown columns fall back to the default rather than erroring.
            _ => models::Column::CreatedAt,
        };
        let direction = match sort_order.as_deref() {
            Some("asc") => Order::Asc,
            _ => Order::Desc,
        };

        let items_query = Models::find()
            .filter(cond.clone())
            .order_by(sort_column, direction)
            .limit(limit)
            .offset((page.saturating_sub(1)) * limit)
            .all(&self.db);
        let count_query = Models::find().filter(cond).count(&self.db);

        let (items, total_count) = tokio::try_join!(items_query, count_query)?;

        Ok(ModelPage {
            items,
            page,
            limit,
            total_count,
        })
    }
}

fn build_condition(filter: &ModelFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(category) = filter.category {
        cond = cond.add(models::Column::Category.eq(category));
    }
    if let Some(local) = filter.local {
        cond = cond.add(models::Column::Local.eq(local));
    }
    if let Some(in_town) = filter.in_town {
        cond = cond.add(models::Column::InTown.eq(in_town));
    }
    if let Some(published) = filter.published {
        cond = cond.add(models::Column::Published.eq(published));
    }

    if let Some(ref search) = filter.search {
        let pattern = format!("%{}%", search.to_lowercase());
        let mut any = Condition::any();
        for column in [
            models::Column::Name,
            models::Column::Nickname,
            models::Column::Bio,
            models::Column::Ethnicity,
            models::Column::Nationality,
            models::Column::HairColor,
            models::Column::EyeColor,
        ] {
            any = any.add(Expr::expr(Func::lower(Expr::col(column))).like(&pattern));
        }
        // JSON array columns are matched against their text rendering.
        for column in [models::Column::Talents, models::Column::Experiences] {
            any = any.add(
                Expr::expr(Func::lower(Expr::col(column).cast_as(Alias::new("TEXT"))))
                    .like(&pattern),
            );
        }
        cond = cond.add(any);
    }

    cond
}
