//! Integration tests for the Feedback domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - Filtering, sorting and pagination match the in-memory semantics
//! - Status updates and deletes behave as expected

use domain_feedback::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};
use uuid::Uuid;

fn submission(builder: &TestDataBuilder, title: &str) -> CreateFeedback {
    CreateFeedback {
        name: builder.name("reporter", title),
        email: builder.email(title),
        feedback_type: FeedbackType::Bug,
        title: title.to_string(),
        description: format!("Description for {}", title),
        rating: None,
        priority: None,
        status: None,
    }
}

fn base_filter() -> FeedbackFilter {
    FeedbackFilter {
        size: 10,
        ..Default::default()
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_search_feedback() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_create_and_search");

    let input = CreateFeedback {
        rating: Some(4),
        priority: Some(FeedbackPriority::Medium),
        ..submission(&builder, "main")
    };

    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.title, input.title);
    assert_eq!(created.status, FeedbackStatus::Pending);
    assert_eq!(created.rating, Some(4));
    assert_eq!(created.priority, Some(FeedbackPriority::Medium));

    let page = repo.search(base_filter()).await.unwrap();
    assert_eq!(page.total_items, 1);
    assert_uuid_eq(page.items[0].id, created.id, "searched feedback id");
}

#[tokio::test]
async fn test_search_filters_by_status_and_type() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_filters");

    let bug = repo.create(submission(&builder, "a-bug")).await.unwrap();
    repo.create(CreateFeedback {
        feedback_type: FeedbackType::Feature,
        ..submission(&builder, "a-feature")
    })
    .await
    .unwrap();

    repo.update_status(bug.id, FeedbackStatus::Resolved)
        .await
        .unwrap();

    // By type
    let page = repo
        .search(FeedbackFilter {
            feedback_type: Some(FeedbackType::Feature),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].feedback_type, FeedbackType::Feature);

    // By status
    let page = repo
        .search(FeedbackFilter {
            status: Some(FeedbackStatus::Resolved),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
    assert_uuid_eq(page.items[0].id, bug.id, "resolved feedback id");

    // Combined, no match
    let page = repo
        .search(FeedbackFilter {
            status: Some(FeedbackStatus::Resolved),
            feedback_type: Some(FeedbackType::Feature),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 0);
}

#[tokio::test]
async fn test_search_substring_is_case_insensitive() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_substring");

    repo.create(CreateFeedback {
        description: "The login page hangs on submit".to_string(),
        ..submission(&builder, "Checkout crash")
    })
    .await
    .unwrap();
    repo.create(submission(&builder, "Unrelated")).await.unwrap();

    // Matches the description, not the title
    let page = repo
        .search(FeedbackFilter {
            q: Some("LOGIN".to_string()),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].title, "Checkout crash");

    // Matches the reporter name
    let page = repo
        .search(FeedbackFilter {
            q: Some(builder.name("reporter", "Unrelated")),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
}

#[tokio::test]
async fn test_search_sorting() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_sorting");

    for (title, rating) in [("Bravo", 2), ("Alpha", 5), ("Charlie", 3)] {
        repo.create(CreateFeedback {
            rating: Some(rating),
            ..submission(&builder, title)
        })
        .await
        .unwrap();
    }

    let page = repo
        .search(FeedbackFilter {
            sort: FeedbackSort::Rating,
            ..base_filter()
        })
        .await
        .unwrap();
    let ratings: Vec<_> = page.items.iter().map(|f| f.rating).collect();
    assert_eq!(ratings, vec![Some(5), Some(3), Some(2)]);

    let page = repo
        .search(FeedbackFilter {
            sort: FeedbackSort::Title,
            ..base_filter()
        })
        .await
        .unwrap();
    let titles: Vec<_> = page.items.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);

    // Date sort: newest first, so reverse insertion order
    let page = repo
        .search(FeedbackFilter {
            sort: FeedbackSort::Date,
            ..base_filter()
        })
        .await
        .unwrap();
    let titles: Vec<_> = page.items.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Charlie", "Alpha", "Bravo"]);
}

#[tokio::test]
async fn test_search_pagination_totals_and_past_the_end() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_pagination");

    for i in 0..5 {
        repo.create(submission(&builder, &format!("item-{}", i)))
            .await
            .unwrap();
    }

    let page = repo
        .search(FeedbackFilter {
            size: 2,
            page: 0,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);

    let last = repo
        .search(FeedbackFilter {
            size: 2,
            page: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);

    // Past the end: empty items, same totals
    let beyond = repo
        .search(FeedbackFilter {
            size: 2,
            page: 9,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_items, 5);
}

#[tokio::test]
async fn test_update_status_persists() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_update_status");

    let created = repo.create(submission(&builder, "triage")).await.unwrap();

    let updated = repo
        .update_status(created.id, FeedbackStatus::InProgress)
        .await
        .unwrap();
    let updated = assert_some(updated, "feedback should exist");
    assert_eq!(updated.status, FeedbackStatus::InProgress);

    // Only the status changes
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.feedback_type, created.feedback_type);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.rating, created.rating);
    assert_eq!(updated.priority, created.priority);
    assert_eq!(updated.date, created.date);

    // Visible to a status-filtered search (exercises the in-progress enum label)
    let page = repo
        .search(FeedbackFilter {
            status: Some(FeedbackStatus::InProgress),
            ..base_filter()
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);

    let missing = repo
        .update_status(Uuid::new_v4(), FeedbackStatus::Closed)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_delete");

    let created = repo.create(submission(&builder, "doomed")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());

    let page = repo.search(base_filter()).await.unwrap();
    assert_eq!(page.total_items, 0);
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_search_with_raw_query() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let service = FeedbackService::new(repo);
    let builder = TestDataBuilder::from_test_name("fb_service_search");

    service
        .create_feedback(submission(&builder, "first"))
        .await
        .unwrap();
    service
        .create_feedback(CreateFeedback {
            feedback_type: FeedbackType::Question,
            ..submission(&builder, "second")
        })
        .await
        .unwrap();

    let page = service
        .search(FeedbackQuery {
            feedback_type: Some("question".to_string()),
            status: Some("all".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].feedback_type, FeedbackType::Question);
    assert_eq!(page.size, 10, "default page size applies");
}

#[tokio::test]
async fn test_service_update_status_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let service = FeedbackService::new(repo);

    let result = service
        .update_status(Uuid::new_v4(), FeedbackStatus::Resolved)
        .await;
    assert!(matches!(result, Err(FeedbackError::NotFound(_))));
}

// ============================================================================
// Concurrent Operations Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_status_updates_last_write_wins() {
    let db = TestDatabase::new().await;
    let repo = PgFeedbackRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("fb_concurrent_status");

    let created = repo.create(submission(&builder, "contended")).await.unwrap();

    let statuses = [
        FeedbackStatus::InProgress,
        FeedbackStatus::Resolved,
        FeedbackStatus::Closed,
    ];

    let mut handles = vec![];
    for status in statuses {
        let repo = PgFeedbackRepository::new(db.connection());
        let id = created.id;
        handles.push(tokio::spawn(async move { repo.update_status(id, status).await }));
    }

    for result in futures::future::join_all(handles).await {
        assert!(result.unwrap().unwrap().is_some());
    }

    // Whichever write landed last, the row is in exactly one of the states
    let page = repo.search(base_filter()).await.unwrap();
    assert_eq!(page.total_items, 1);
    assert!(statuses.contains(&page.items[0].status));
}
