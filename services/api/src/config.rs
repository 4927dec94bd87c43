use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Unsupported LLM provider: {0}")]
    UnsupportedProvider(String),
}

/// Defines the supported LLM backends for question generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Local,
}

/// Selects how the session relay reaches the generation capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Call the in-process capability directly.
    Direct,
    /// POST to a remote orchestration service.
    Http { base_url: String },
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub provider: Provider,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// Base URL of an OpenAI-compatible local server, up to and including
    /// the `/v1` segment (the chat-completions path is appended per call).
    pub local_llm_url: String,
    pub local_llm_model: String,
    /// Single request timeout applied to every generation call.
    pub llm_timeout: Duration,
    pub dispatch: Dispatch,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let provider_str = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string());
        let provider = match provider_str.to_lowercase().as_str() {
            "openai" => Provider::OpenAI,
            "local" => Provider::Local,
            _ => return Err(ConfigError::UnsupportedProvider(provider_str)),
        };

        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let openai_model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let local_llm_url = std::env::var("LOCAL_LLM_URL")
            .unwrap_or_else(|_| "http://localhost:1234/v1".to_string());
        let local_llm_model =
            std::env::var("LOCAL_LLM_MODEL").unwrap_or_else(|_| "google/gemma-3-1b".to_string());

        let llm_timeout_str = std::env::var("LLM_TIMEOUT").unwrap_or_else(|_| "10.0".to_string());
        let llm_timeout_secs = llm_timeout_str.parse::<f64>().map_err(|_| {
            ConfigError::InvalidValue(
                "LLM_TIMEOUT".to_string(),
                format!("'{}' is not a number", llm_timeout_str),
            )
        })?;
        if !llm_timeout_secs.is_finite() || llm_timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "LLM_TIMEOUT".to_string(),
                format!("'{}' is not a positive duration", llm_timeout_str),
            ));
        }
        let llm_timeout = Duration::from_secs_f64(llm_timeout_secs);

        let use_direct_str = std::env::var("AI_ORCHESTRATION_USE_DIRECT")
            .unwrap_or_else(|_| "true".to_string());
        let dispatch = if use_direct_str.to_lowercase() == "true" {
            Dispatch::Direct
        } else {
            let base_url = std::env::var("AI_ORCHESTRATION_URL").map_err(|_| {
                ConfigError::MissingVar(
                    "AI_ORCHESTRATION_URL must be set when AI_ORCHESTRATION_USE_DIRECT is false"
                        .to_string(),
                )
            })?;
            Dispatch::Http { base_url }
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        match provider {
            Provider::OpenAI => {
                if openai_api_key.is_none() {
                    return Err(ConfigError::MissingVar(
                        "OPENAI_API_KEY must be set for 'openai' provider".to_string(),
                    ));
                }
            }
            Provider::Local => {}
        }

        Ok(Self {
            bind_address,
            provider,
            openai_api_key,
            openai_model,
            local_llm_url,
            local_llm_model,
            llm_timeout,
            dispatch,
            log_level,
        })
    }
}
