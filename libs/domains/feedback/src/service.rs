use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{
    CreateFeedback, Feedback, FeedbackFilter, FeedbackPage, FeedbackQuery, FeedbackSort,
    FeedbackStatus,
};
use crate::repository::FeedbackRepository;

const DEFAULT_PAGE_SIZE: u64 = 10;

/// Service layer for feedback business logic
#[derive(Clone)]
pub struct FeedbackService<R: FeedbackRepository> {
    repository: Arc<R>,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Submit new feedback; the status starts as `pending` unless supplied
    pub async fn create_feedback(&self, input: CreateFeedback) -> FeedbackResult<Feedback> {
        input
            .validate()
            .map_err(|e| FeedbackError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Search submissions using raw query-string parameters
    pub async fn search(&self, query: FeedbackQuery) -> FeedbackResult<FeedbackPage> {
        let filter = normalize_query(query)?;
        self.repository.search(filter).await
    }

    /// Change the status of a submission
    pub async fn update_status(
        &self,
        id: Uuid,
        status: FeedbackStatus,
    ) -> FeedbackResult<Feedback> {
        self.repository
            .update_status(id, status)
            .await?
            .ok_or(FeedbackError::NotFound(id))
    }

    /// Delete a submission; deleting an unknown id is a silent no-op
    pub async fn delete(&self, id: Uuid) -> FeedbackResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

/// Turn raw query-string parameters into a typed filter
///
/// The `q`, `status` and `type` parameters treat an empty value and the
/// sentinel `all` (any casing) as "no filter". A `status` or `type` outside
/// that must name a real enum variant, otherwise the whole request is
/// rejected.
fn normalize_query(query: FeedbackQuery) -> FeedbackResult<FeedbackFilter> {
    let q = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"));

    let status = parse_filter(query.status.as_deref(), "status")?;
    let feedback_type = parse_filter(query.feedback_type.as_deref(), "type")?;

    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 {
        return Err(FeedbackError::Validation(
            "size must be at least 1".to_string(),
        ));
    }

    let sort = match query.sort_by.as_deref().map(str::trim) {
        Some("rating") => FeedbackSort::Rating,
        Some("title") => FeedbackSort::Title,
        _ => FeedbackSort::Date,
    };

    Ok(FeedbackFilter {
        q,
        status,
        feedback_type,
        page: query.page.unwrap_or(0),
        size,
        sort,
    })
}

fn parse_filter<T: std::str::FromStr>(
    raw: Option<&str>,
    name: &str,
) -> FeedbackResult<Option<T>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_| {
            FeedbackError::Validation(format!("Unknown {} filter: '{}'", name, s))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackType;
    use crate::repository::MockFeedbackRepository;
    use mockall::predicate::eq;

    fn submission() -> CreateFeedback {
        CreateFeedback {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            feedback_type: FeedbackType::Bug,
            title: "Broken".to_string(),
            description: "It breaks".to_string(),
            rating: Some(2),
            priority: None,
            status: None,
        }
    }

    #[test]
    fn test_normalize_defaults() {
        let filter = normalize_query(FeedbackQuery::default()).unwrap();

        assert_eq!(
            filter,
            FeedbackFilter {
                q: None,
                status: None,
                feedback_type: None,
                page: 0,
                size: DEFAULT_PAGE_SIZE,
                sort: FeedbackSort::Date,
            }
        );
    }

    #[test]
    fn test_normalize_treats_all_and_empty_as_no_filter() {
        for sentinel in ["", "all", "ALL", "All", "  all  "] {
            let filter = normalize_query(FeedbackQuery {
                q: Some(sentinel.to_string()),
                status: Some(sentinel.to_string()),
                feedback_type: Some(sentinel.to_string()),
                ..Default::default()
            })
            .unwrap();

            assert_eq!(filter.q, None, "sentinel {:?}", sentinel);
            assert_eq!(filter.status, None, "sentinel {:?}", sentinel);
            assert_eq!(filter.feedback_type, None, "sentinel {:?}", sentinel);
        }
    }

    #[test]
    fn test_normalize_keeps_real_substring_queries() {
        let filter = normalize_query(FeedbackQuery {
            q: Some("  allergy  ".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.q, Some("allergy".to_string()));
    }

    #[test]
    fn test_normalize_parses_enum_filters() {
        let filter = normalize_query(FeedbackQuery {
            status: Some("in-progress".to_string()),
            feedback_type: Some("bug".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.status, Some(FeedbackStatus::InProgress));
        assert_eq!(filter.feedback_type, Some(FeedbackType::Bug));
    }

    #[test]
    fn test_normalize_rejects_unknown_filter_values() {
        let result = normalize_query(FeedbackQuery {
            status: Some("bogus".to_string()),
            ..Default::default()
        });

        assert!(matches!(result, Err(FeedbackError::Validation(_))));
    }

    #[test]
    fn test_normalize_rejects_zero_page_size() {
        let result = normalize_query(FeedbackQuery {
            size: Some(0),
            ..Default::default()
        });

        assert!(matches!(result, Err(FeedbackError::Validation(_))));
    }

    #[test]
    fn test_normalize_sort_keys() {
        let cases = [
            (Some("rating"), FeedbackSort::Rating),
            (Some("title"), FeedbackSort::Title),
            (Some("date"), FeedbackSort::Date),
            (Some("anything-else"), FeedbackSort::Date),
            (None, FeedbackSort::Date),
        ];

        for (sort_by, expected) in cases {
            let filter = normalize_query(FeedbackQuery {
                sort_by: sort_by.map(str::to_string),
                ..Default::default()
            })
            .unwrap();

            assert_eq!(filter.sort, expected, "sortBy {:?}", sort_by);
        }
    }

    #[tokio::test]
    async fn test_create_feedback_rejects_invalid_input() {
        let service = FeedbackService::new(MockFeedbackRepository::new());

        let result = service
            .create_feedback(CreateFeedback {
                title: String::new(),
                ..submission()
            })
            .await;

        assert!(matches!(result, Err(FeedbackError::Validation(_))));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_filter_before_hitting_repository() {
        // No expectations set: reaching the repository would panic
        let service = FeedbackService::new(MockFeedbackRepository::new());

        let result = service
            .search(FeedbackQuery {
                feedback_type: Some("nonsense".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(FeedbackError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_status_maps_missing_to_not_found() {
        let mut mock_repo = MockFeedbackRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update_status()
            .with(eq(id), eq(FeedbackStatus::Resolved))
            .returning(|_, _| Ok(None));

        let service = FeedbackService::new(mock_repo);
        let result = service.update_status(id, FeedbackStatus::Resolved).await;

        assert!(matches!(result, Err(FeedbackError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_is_silent_for_missing_id() {
        let mut mock_repo = MockFeedbackRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(false));

        let service = FeedbackService::new(mock_repo);
        assert!(service.delete(id).await.is_ok());
    }
}
