use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create feedback_type enum
        manager
            .create_type(
                Type::create()
                    .as_enum(FeedbackType::Enum)
                    .values([
                        FeedbackType::Bug,
                        FeedbackType::Feature,
                        FeedbackType::Improvement,
                        FeedbackType::Question,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create feedback_priority enum
        manager
            .create_type(
                Type::create()
                    .as_enum(FeedbackPriority::Enum)
                    .values([
                        FeedbackPriority::Low,
                        FeedbackPriority::Medium,
                        FeedbackPriority::High,
                        FeedbackPriority::Urgent,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create feedback_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(FeedbackStatus::Enum)
                    .values([
                        FeedbackStatus::Pending,
                        FeedbackStatus::InProgress,
                        FeedbackStatus::Resolved,
                        FeedbackStatus::Closed,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create feedback table
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_uuid(Feedback::Id))
                    .col(string(Feedback::Name))
                    .col(string(Feedback::Email))
                    .col(
                        ColumnDef::new(Feedback::FeedbackType)
                            .enumeration(
                                FeedbackType::Enum,
                                [
                                    FeedbackType::Bug,
                                    FeedbackType::Feature,
                                    FeedbackType::Improvement,
                                    FeedbackType::Question,
                                ],
                            )
                            .not_null(),
                    )
                    .col(string(Feedback::Title))
                    .col(text(Feedback::Description))
                    .col(integer_null(Feedback::Rating))
                    .col(
                        ColumnDef::new(Feedback::Priority)
                            .enumeration(
                                FeedbackPriority::Enum,
                                [
                                    FeedbackPriority::Low,
                                    FeedbackPriority::Medium,
                                    FeedbackPriority::High,
                                    FeedbackPriority::Urgent,
                                ],
                            )
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Feedback::Status)
                            .enumeration(
                                FeedbackStatus::Enum,
                                [
                                    FeedbackStatus::Pending,
                                    FeedbackStatus::InProgress,
                                    FeedbackStatus::Resolved,
                                    FeedbackStatus::Closed,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        timestamp_with_time_zone(Feedback::Date).default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_status")
                    .table(Feedback::Table)
                    .col(Feedback::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedback_date")
                    .table(Feedback::Table)
                    .col(Feedback::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(FeedbackStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(FeedbackPriority::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(FeedbackType::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Feedback {
    Table,
    Id,
    Name,
    Email,
    #[sea_orm(iden = "type")]
    FeedbackType,
    Title,
    Description,
    Rating,
    Priority,
    Status,
    Date,
}

#[derive(DeriveIden)]
enum FeedbackType {
    #[sea_orm(iden = "feedback_type")]
    Enum,
    #[sea_orm(iden = "bug")]
    Bug,
    #[sea_orm(iden = "feature")]
    Feature,
    #[sea_orm(iden = "improvement")]
    Improvement,
    #[sea_orm(iden = "question")]
    Question,
}

#[derive(DeriveIden)]
enum FeedbackPriority {
    #[sea_orm(iden = "feedback_priority")]
    Enum,
    #[sea_orm(iden = "low")]
    Low,
    #[sea_orm(iden = "medium")]
    Medium,
    #[sea_orm(iden = "high")]
    High,
    #[sea_orm(iden = "urgent")]
    Urgent,
}

#[derive(DeriveIden)]
enum FeedbackStatus {
    #[sea_orm(iden = "feedback_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "in-progress")]
    InProgress,
    #[sea_orm(iden = "resolved")]
    Resolved,
    #[sea_orm(iden = "closed")]
    Closed,
}
