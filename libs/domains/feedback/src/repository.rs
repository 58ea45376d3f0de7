use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::FeedbackResult;
use crate::models::{
    CreateFeedback, Feedback, FeedbackFilter, FeedbackPage, FeedbackSort, FeedbackStatus,
};

/// Repository trait for Feedback persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a new submission
    async fn create(&self, input: CreateFeedback) -> FeedbackResult<Feedback>;

    /// Search submissions with filters, sorting and pagination
    async fn search(&self, filter: FeedbackFilter) -> FeedbackResult<FeedbackPage>;

    /// Set the status of a submission, returning None if it does not exist
    async fn update_status(
        &self,
        id: Uuid,
        status: FeedbackStatus,
    ) -> FeedbackResult<Option<Feedback>>;

    /// Delete a submission, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> FeedbackResult<bool>;
}

/// In-memory implementation of FeedbackRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryFeedbackRepository {
    feedback: Arc<RwLock<HashMap<Uuid, Feedback>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self {
            feedback: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn matches(feedback: &Feedback, filter: &FeedbackFilter) -> bool {
    if let Some(status) = filter.status {
        if feedback.status != status {
            return false;
        }
    }
    if let Some(feedback_type) = filter.feedback_type {
        if feedback.feedback_type != feedback_type {
            return false;
        }
    }
    if let Some(ref q) = filter.q {
        let q = q.to_lowercase();
        let hit = feedback.title.to_lowercase().contains(&q)
            || feedback.description.to_lowercase().contains(&q)
            || feedback.name.to_lowercase().contains(&q);
        if !hit {
            return false;
        }
    }
    true
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn create(&self, input: CreateFeedback) -> FeedbackResult<Feedback> {
        let mut feedback = self.feedback.write().await;

        let item = Feedback {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            feedback_type: input.feedback_type,
            title: input.title,
            description: input.description,
            rating: input.rating,
            priority: input.priority,
            status: input.status.unwrap_or_default(),
            date: chrono::Utc::now(),
        };
        feedback.insert(item.id, item.clone());

        tracing::info!(feedback_id = %item.id, "Created feedback");
        Ok(item)
    }

    async fn search(&self, filter: FeedbackFilter) -> FeedbackResult<FeedbackPage> {
        let feedback = self.feedback.read().await;

        let mut result: Vec<Feedback> = feedback
            .values()
            .filter(|f| matches(f, &filter))
            .cloned()
            .collect();

        match filter.sort {
            // Postgres puts NULLs first on a descending sort
            FeedbackSort::Rating => result.sort_by_key(|f| {
                std::cmp::Reverse(f.rating.map(i64::from).unwrap_or(i64::MAX))
            }),
            FeedbackSort::Title => result.sort_by(|a, b| a.title.cmp(&b.title)),
            FeedbackSort::Date => result.sort_by(|a, b| b.date.cmp(&a.date)),
        }

        let total_items = result.len() as u64;
        let total_pages = total_items.div_ceil(filter.size.max(1));

        let items: Vec<Feedback> = result
            .into_iter()
            .skip((filter.page * filter.size) as usize)
            .take(filter.size as usize)
            .collect();

        Ok(FeedbackPage {
            items,
            page: filter.page,
            size: filter.size,
            total_items,
            total_pages,
        })
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: FeedbackStatus,
    ) -> FeedbackResult<Option<Feedback>> {
        let mut feedback = self.feedback.write().await;

        match feedback.get_mut(&id) {
            Some(item) => {
                item.status = status;
                tracing::info!(feedback_id = %id, status = %status, "Updated feedback status");
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> FeedbackResult<bool> {
        let mut feedback = self.feedback.write().await;

        if feedback.remove(&id).is_some() {
            tracing::info!(feedback_id = %id, "Deleted feedback");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackType;

    fn submission(title: &str, rating: Option<i32>) -> CreateFeedback {
        CreateFeedback {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            feedback_type: FeedbackType::Bug,
            title: title.to_string(),
            description: format!("Description for {}", title),
            rating,
            priority: None,
            status: None,
        }
    }

    fn filter() -> FeedbackFilter {
        FeedbackFilter {
            size: 10,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_status_defaults_to_pending_unless_supplied() {
        let repo = InMemoryFeedbackRepository::new();

        let created = repo.create(submission("First", None)).await.unwrap();
        assert_eq!(created.status, FeedbackStatus::Pending);

        let resolved = repo
            .create(CreateFeedback {
                status: Some(FeedbackStatus::Resolved),
                ..submission("Second", None)
            })
            .await
            .unwrap();
        assert_eq!(resolved.status, FeedbackStatus::Resolved);
    }

    #[tokio::test]
    async fn test_search_matches_substring_across_fields() {
        let repo = InMemoryFeedbackRepository::new();
        repo.create(submission("Login broken", None)).await.unwrap();
        repo.create(submission("Dark mode", None)).await.unwrap();

        let page = repo
            .search(FeedbackFilter {
                q: Some("LOGIN".to_string()),
                ..filter()
            })
            .await
            .unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].title, "Login broken");
    }

    #[tokio::test]
    async fn test_search_sorts_by_rating_descending() {
        let repo = InMemoryFeedbackRepository::new();
        repo.create(submission("Two", Some(2))).await.unwrap();
        repo.create(submission("Five", Some(5))).await.unwrap();
        repo.create(submission("Three", Some(3))).await.unwrap();

        let page = repo
            .search(FeedbackFilter {
                sort: FeedbackSort::Rating,
                ..filter()
            })
            .await
            .unwrap();

        let titles: Vec<_> = page.items.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Five", "Three", "Two"]);
    }

    #[tokio::test]
    async fn test_search_paginates_and_counts() {
        let repo = InMemoryFeedbackRepository::new();
        for i in 0..5 {
            repo.create(submission(&format!("Item {}", i), None))
                .await
                .unwrap();
        }

        let page = repo
            .search(FeedbackFilter {
                size: 2,
                page: 1,
                sort: FeedbackSort::Title,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].title, "Item 2");
    }

    #[tokio::test]
    async fn test_update_status_of_missing_returns_none() {
        let repo = InMemoryFeedbackRepository::new();

        let result = repo
            .update_status(Uuid::now_v7(), FeedbackStatus::Resolved)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = InMemoryFeedbackRepository::new();
        let created = repo.create(submission("Gone soon", None)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
