//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the orchestration REST surface, the WebSocket session relay,
//! and OpenAPI documentation.

use crate::{handlers, models::ErrorResponse, state::AppState, ws::ws_handler};

use axum::{
    Router,
    routing::{get, post},
};
use interview_core::interview::{
    ConversationTurn, InterviewContext, InterviewRequest, InterviewResponse, TopicsResponse,
    TurnRole,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::generate_question, handlers::determine_topics),
    components(
        schemas(
            InterviewContext,
            ConversationTurn,
            TurnRole,
            InterviewRequest,
            InterviewResponse,
            TopicsResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Interview API", description = "Question generation and session relay for AI interview practice")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route(
            "/api/v1/interview/generate-question",
            post(handlers::generate_question),
        )
        .route(
            "/api/v1/interview/determine-topics",
            post(handlers::determine_topics),
        )
        .route("/api/v1/ws/{interview_id}", get(ws_handler))
        // Apply the state ONLY to this group of routes.
        .with_state(app_state);

    // Merge the stateful routes with the stateless Swagger UI routes.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
