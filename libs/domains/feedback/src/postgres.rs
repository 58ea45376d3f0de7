use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::entity;
use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{CreateFeedback, Feedback, FeedbackFilter, FeedbackPage, FeedbackSort, FeedbackStatus};
use crate::repository::FeedbackRepository;

/// PostgreSQL implementation of FeedbackRepository using Sea-ORM
#[derive(Clone)]
pub struct PgFeedbackRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn search_condition(filter: &FeedbackFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = filter.status {
        condition = condition.add(entity::Column::Status.eq(status));
    }
    if let Some(feedback_type) = filter.feedback_type {
        condition = condition.add(entity::Column::FeedbackType.eq(feedback_type));
    }
    if let Some(ref q) = filter.q {
        let pattern = format!("%{}%", q);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(entity::Column::Title).ilike(&pattern))
                .add(Expr::col(entity::Column::Description).ilike(&pattern))
                .add(Expr::col(entity::Column::Name).ilike(&pattern)),
        );
    }

    condition
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn create(&self, input: CreateFeedback) -> FeedbackResult<Feedback> {
        let active_model = entity::ActiveModel::from(input);

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(feedback_id = %model.id, "Created feedback");
        Ok(model.into())
    }

    async fn search(&self, filter: FeedbackFilter) -> FeedbackResult<FeedbackPage> {
        let mut query = entity::Entity::find().filter(search_condition(&filter));

        query = match filter.sort {
            FeedbackSort::Rating => query.order_by_desc(entity::Column::Rating),
            FeedbackSort::Title => query.order_by_asc(entity::Column::Title),
            FeedbackSort::Date => query.order_by_desc(entity::Column::Date),
        };

        let paginator = query.paginate(self.base.db(), filter.size);

        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        // A page past the end is not an error, just empty
        let items = paginator
            .fetch_page(filter.page)
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        Ok(FeedbackPage {
            items: items.into_iter().map(Into::into).collect(),
            page: filter.page,
            size: filter.size,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: FeedbackStatus,
    ) -> FeedbackResult<Option<Feedback>> {
        let txn = self
            .base
            .db()
            .begin()
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        let Some(model) = entity::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?
        else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        active_model.status = Set(status);

        let updated = active_model
            .update(&txn)
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(feedback_id = %id, status = %status, "Updated feedback status");
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: Uuid) -> FeedbackResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| FeedbackError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(feedback_id = %id, "Deleted feedback");
        }
        Ok(rows_affected > 0)
    }
}
