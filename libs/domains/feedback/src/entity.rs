use crate::models::{CreateFeedback, FeedbackPriority, FeedbackStatus, FeedbackType};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the feedback table
///
/// The category column is literally named `type` in Postgres, which is not a
/// usable Rust field name, hence the column_name override.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sea_orm(column_name = "type")]
    pub feedback_type: FeedbackType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: Option<i32>,
    pub priority: Option<FeedbackPriority>,
    pub status: FeedbackStatus,
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Feedback {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            feedback_type: model.feedback_type,
            title: model.title,
            description: model.description,
            rating: model.rating,
            priority: model.priority,
            status: model.status,
            date: model.date.into(),
        }
    }
}

impl From<CreateFeedback> for ActiveModel {
    fn from(input: CreateFeedback) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            email: Set(input.email),
            feedback_type: Set(input.feedback_type),
            title: Set(input.title),
            description: Set(input.description),
            rating: Set(input.rating),
            priority: Set(input.priority),
            status: Set(input.status.unwrap_or_default()),
            date: Set(chrono::Utc::now().into()),
        }
    }
}
