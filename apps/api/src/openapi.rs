use utoipa::OpenApi;

/// Combined API documentation for the feedback service
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Feedback API",
        version = "0.1.0",
        description = "API for collecting and triaging user feedback, with account signup and login"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/auth", api = domain_users::handlers::ApiDoc),
        (path = "/feedback", api = domain_feedback::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
