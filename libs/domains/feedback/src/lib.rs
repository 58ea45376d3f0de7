//! Feedback Domain
//!
//! Collection and triage of user feedback: submissions, filtered search,
//! status updates and deletion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, filter normalization
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_feedback::{
//!     handlers,
//!     repository::InMemoryFeedbackRepository,
//!     service::FeedbackService,
//! };
//!
//! let repository = InMemoryFeedbackRepository::new();
//! let service = FeedbackService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{FeedbackError, FeedbackResult};
pub use models::{
    CreateFeedback, Feedback, FeedbackFilter, FeedbackPage, FeedbackPriority, FeedbackQuery,
    FeedbackSort, FeedbackStatus, FeedbackType, StatusUpdateRequest,
};
pub use postgres::PgFeedbackRepository;
pub use repository::{FeedbackRepository, InMemoryFeedbackRepository};
pub use service::FeedbackService;
