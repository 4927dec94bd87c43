//! Axum Handlers for the Orchestration REST Surface
//!
//! These endpoints expose the question-generation capability over HTTP so a
//! session relay running elsewhere can bridge to it. They use `utoipa` doc
//! comments to generate OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use interview_core::interview::{
    InterviewContext, InterviewRequest, InterviewResponse, TopicsResponse,
};
use std::sync::Arc;
use tracing::error;

use crate::{models::ErrorResponse, state::AppState};

pub enum ApiError {
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Generate the next interview question.
#[utoipa::path(
    post,
    path = "/generate-question",
    request_body = InterviewRequest,
    responses(
        (status = 200, description = "Next interview question", body = InterviewResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_question(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, ApiError> {
    let question_text = state
        .generator
        .generate_next_question(&request.context, &request.history)
        .await?;
    Ok(Json(InterviewResponse { question_text }))
}

/// Determine interview topics from the job description and resume.
#[utoipa::path(
    post,
    path = "/determine-topics",
    request_body = InterviewContext,
    responses(
        (status = 200, description = "Inferred interview topics", body = TopicsResponse),
        (status = 500, description = "Topic inference failed", body = ErrorResponse)
    )
)]
pub async fn determine_topics(
    State(state): State<Arc<AppState>>,
    Json(context): Json<InterviewContext>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let topics = state.generator.determine_topics(&context).await?;
    Ok(Json(TopicsResponse { topics }))
}
