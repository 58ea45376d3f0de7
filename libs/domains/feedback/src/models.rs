use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Error for a string that names no known enum variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError;

impl std::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown variant")
    }
}

impl std::error::Error for UnknownVariantError {}

/// Category of a feedback submission
///
/// FromStr is hand-rolled for the query-string enums: DeriveActiveEnum
/// already emits `TryFrom<&str>`, which collides with strum's EnumString.
/// Parsing is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "feedback_type")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackType {
    #[sea_orm(string_value = "bug")]
    Bug,
    #[sea_orm(string_value = "feature")]
    Feature,
    #[sea_orm(string_value = "improvement")]
    Improvement,
    #[sea_orm(string_value = "question")]
    Question,
}

impl std::str::FromStr for FeedbackType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bug" => Ok(Self::Bug),
            "feature" => Ok(Self::Feature),
            "improvement" => Ok(Self::Improvement),
            "question" => Ok(Self::Question),
            _ => Err(UnknownVariantError),
        }
    }
}

/// Urgency assigned by the submitter
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "feedback_priority")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackPriority {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
    #[sea_orm(string_value = "urgent")]
    Urgent,
}

impl std::str::FromStr for FeedbackPriority {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(UnknownVariantError),
        }
    }
}

/// Triage status of a feedback submission
///
/// Serialized in kebab-case so `in-progress` round-trips through both the
/// API and the Postgres enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "feedback_status")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FeedbackStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "resolved")]
    Resolved,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl std::str::FromStr for FeedbackStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(UnknownVariantError),
        }
    }
}

/// Feedback entity - a single submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    /// Unique identifier
    pub id: Uuid,
    /// Submitter name
    pub name: String,
    /// Submitter email
    pub email: String,
    /// Category of the submission
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    /// Short summary
    pub title: String,
    /// Full description
    pub description: String,
    /// Optional star rating; stored as given, not range-checked
    pub rating: Option<i32>,
    /// Optional urgency
    pub priority: Option<FeedbackPriority>,
    /// Current triage status
    pub status: FeedbackStatus,
    /// Submission timestamp
    pub date: DateTime<Utc>,
}

/// DTO for submitting feedback
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFeedback {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = 4000,
        message = "description must be 1-4000 characters"
    ))]
    pub description: String,
    pub rating: Option<i32>,
    pub priority: Option<FeedbackPriority>,
    /// Starts as `pending` when not supplied
    #[serde(default)]
    pub status: Option<FeedbackStatus>,
}

/// DTO for changing the triage status of a submission
///
/// The status arrives as a string so an unknown value surfaces as a
/// validation error, the same way unknown search filters do.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Raw search parameters as they arrive on the query string
///
/// `status` and `type` are strings here, not enums: an empty value or the
/// sentinel `all` means "no filter", anything else must parse as the enum.
/// The service does that normalization; see [`FeedbackFilter`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedbackQuery {
    /// Substring to match against title, description or name; empty or
    /// `all` disables it
    pub q: Option<String>,
    /// Status filter; empty or `all` disables it
    pub status: Option<String>,
    /// Type filter; empty or `all` disables it
    #[serde(rename = "type")]
    pub feedback_type: Option<String>,
    /// Zero-based page index
    pub page: Option<u64>,
    /// Page size
    pub size: Option<u64>,
    /// Sort key: `rating`, `title`, or anything else for newest-first
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSort {
    /// Highest rating first
    Rating,
    /// Title, A to Z
    Title,
    /// Newest first
    #[default]
    Date,
}

/// Normalized search filter, produced by the service from [`FeedbackQuery`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackFilter {
    pub q: Option<String>,
    pub status: Option<FeedbackStatus>,
    pub feedback_type: Option<FeedbackType>,
    pub page: u64,
    pub size: u64,
    pub sort: FeedbackSort,
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackPage {
    pub items: Vec<Feedback>,
    /// Zero-based page index that was requested
    pub page: u64,
    /// Requested page size
    pub size: u64,
    /// Total matching submissions across all pages
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u64,
}
