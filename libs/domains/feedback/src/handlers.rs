use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{
    CreateFeedback, Feedback, FeedbackPage, FeedbackPriority, FeedbackQuery, FeedbackStatus,
    FeedbackType, StatusUpdateRequest,
};
use crate::repository::FeedbackRepository;
use crate::service::FeedbackService;

const TAG: &str = "feedback";

/// OpenAPI documentation for the Feedback API
#[derive(OpenApi)]
#[openapi(
    paths(create_feedback, search_feedback, update_status, delete_feedback),
    components(
        schemas(
            Feedback,
            CreateFeedback,
            FeedbackPage,
            StatusUpdateRequest,
            FeedbackType,
            FeedbackPriority,
            FeedbackStatus
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Feedback collection and triage")
    )
)]
pub struct ApiDoc;

/// Create the feedback router with all HTTP endpoints
pub fn router<R: FeedbackRepository + 'static>(service: FeedbackService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(search_feedback).post(create_feedback))
        .route("/{id}", delete(delete_feedback))
        .route("/{id}/status", patch(update_status))
        .with_state(shared_service)
}

/// Submit new feedback
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateFeedback,
    responses(
        (status = 201, description = "Feedback created successfully", body = Feedback),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_feedback<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateFeedback>,
) -> FeedbackResult<impl IntoResponse> {
    let feedback = service.create_feedback(input).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Search feedback with filters, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(FeedbackQuery),
    responses(
        (status = 200, description = "One page of matching feedback", body = FeedbackPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_feedback<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
    Query(query): Query<FeedbackQuery>,
) -> FeedbackResult<Json<FeedbackPage>> {
    let page = service.search(query).await?;
    Ok(Json(page))
}

/// Change the status of a submission
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Feedback ID")
    ),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Status updated", body = Feedback),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_status<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<StatusUpdateRequest>,
) -> FeedbackResult<Json<Feedback>> {
    let status = input
        .status
        .parse::<FeedbackStatus>()
        .map_err(|_| FeedbackError::Validation(format!("Unknown status: '{}'", input.status)))?;

    let feedback = service.update_status(id, status).await?;
    Ok(Json(feedback))
}

/// Delete a submission
///
/// Always answers 204, whether or not the id existed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Feedback ID")
    ),
    responses(
        (status = 204, description = "Feedback deleted (or did not exist)"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_feedback<R: FeedbackRepository>(
    State(service): State<Arc<FeedbackService<R>>>,
    UuidPath(id): UuidPath,
) -> FeedbackResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
