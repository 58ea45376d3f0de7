use axum::Router;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Domain routers get their services here, so the returned Router is
/// stateless from the caller's point of view.
pub fn routes(state: &crate::state::AppState) -> Router {
    let user_repository = domain_users::PgUserRepository::new(state.db.clone());
    let user_service = domain_users::UserService::new(user_repository);

    let feedback_repository = domain_feedback::PgFeedbackRepository::new(state.db.clone());
    let feedback_service = domain_feedback::FeedbackService::new(feedback_repository);

    Router::new()
        .nest("/auth", domain_users::handlers::router(user_service))
        .nest(
            "/feedback",
            domain_feedback::handlers::router(feedback_service),
        )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
