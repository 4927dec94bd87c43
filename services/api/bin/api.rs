//! Main Entrypoint for the Interview API Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Initializing logging.
//! 3. Initializing the LLM provider and question-generation services.
//! 4. Constructing the Axum router and applying middleware.
//! 5. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use async_openai::config::OpenAIConfig;
use interview_api::{
    config::{Config, Dispatch, Provider},
    router::create_router,
    state::AppState,
};
use interview_core::{
    llm_client::{LLMClient, OpenAICompatibleClient},
    service::{HttpQuestionService, LlmQuestionService, QuestionService},
    store::SessionStore,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing application state...");

    // --- 3. Initialize Shared Services ---
    let llm: Arc<dyn LLMClient> = match &config.provider {
        Provider::OpenAI => {
            info!(model = %config.openai_model, "Using OpenAI provider.");
            let api_key = config.openai_api_key.as_ref().unwrap();
            let openai_config = OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base("https://api.openai.com/v1");
            Arc::new(OpenAICompatibleClient::new(
                openai_config,
                config.openai_model.clone(),
                config.llm_timeout,
            ))
        }
        Provider::Local => {
            info!(url = %config.local_llm_url, model = %config.local_llm_model, "Using local OpenAI-compatible provider.");
            let openai_config = OpenAIConfig::new().with_api_base(config.local_llm_url.clone());
            Arc::new(OpenAICompatibleClient::new(
                openai_config,
                config.local_llm_model.clone(),
                config.llm_timeout,
            ))
        }
    };

    let generator: Arc<dyn QuestionService> = Arc::new(LlmQuestionService::new(llm));

    let relay_generator: Arc<dyn QuestionService> = match &config.dispatch {
        Dispatch::Direct => {
            info!("Session relay using the in-process generation capability.");
            generator.clone()
        }
        Dispatch::Http { base_url } => {
            info!(%base_url, "Session relay bridging to a remote orchestration service.");
            let http_client = reqwest::Client::builder()
                .timeout(config.llm_timeout)
                .build()
                .context("Failed to build HTTP client for the orchestration bridge")?;
            Arc::new(HttpQuestionService::new(http_client, base_url.clone()))
        }
    };

    let app_state = Arc::new(AppState {
        sessions: Arc::new(SessionStore::new()),
        generator,
        relay_generator,
        config: Arc::new(config.clone()),
    });

    // --- 4. Create Router and Apply Middleware ---
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(app_state).layer(cors);

    // --- 5. Start Server ---
    info!(
        provider = ?config.provider,
        bind_address = %config.bind_address,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
