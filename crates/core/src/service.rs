//! Question Generation Capability
//!
//! This module defines the contract the session relay drives the interview
//! through, plus its two implementations: an in-process one backed by an
//! [`LLMClient`], and an HTTP bridge to a remote orchestration service. The
//! relay only ever sees the trait; which implementation it talks to is a
//! startup decision.

use crate::{
    GenerationError,
    interview::{
        ConversationTurn, InterviewContext, InterviewRequest, InterviewResponse, TopicsResponse,
        TurnRole,
    },
    llm_client::LLMClient,
    topic,
};
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Defines the contract for the question-generation capability.
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Generates the next interviewer question from the context and the
    /// conversation so far.
    async fn generate_next_question(
        &self,
        context: &InterviewContext,
        history: &[ConversationTurn],
    ) -> Result<String, GenerationError>;

    /// Infers the interview topics for a context.
    ///
    /// The in-process implementation is total; the HTTP variant can still
    /// fail in transport.
    async fn determine_topics(
        &self,
        context: &InterviewContext,
    ) -> Result<Vec<String>, GenerationError>;
}

/// In-process implementation backed by a chat-completion [`LLMClient`].
pub struct LlmQuestionService {
    llm: Arc<dyn LLMClient>,
}

impl LlmQuestionService {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Builds the chat transcript for one generation call: a system prompt
    /// derived from the context, then the history with candidate turns as
    /// user messages and interviewer turns as assistant messages.
    fn build_messages(
        context: &InterviewContext,
        history: &[ConversationTurn],
    ) -> Result<Vec<ChatCompletionRequestMessage>, GenerationError> {
        let system_prompt = format!(
            "You are an AI technical interviewer. The job description is: {}. \
             Ask the candidate the next question based on the conversation so far.",
            context.job_description
        );

        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(history.len() + 1);
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into(),
        );

        for turn in history {
            let message = match turn.role {
                TurnRole::Candidate => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.message.clone())
                    .build()?
                    .into(),
                TurnRole::Interviewer => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.message.clone())
                    .build()?
                    .into(),
            };
            messages.push(message);
        }

        Ok(messages)
    }
}

#[async_trait]
impl QuestionService for LlmQuestionService {
    async fn generate_next_question(
        &self,
        context: &InterviewContext,
        history: &[ConversationTurn],
    ) -> Result<String, GenerationError> {
        let messages = Self::build_messages(context, history)?;
        debug!(turns = history.len(), "Requesting next interview question");
        self.llm.complete(messages).await
    }

    async fn determine_topics(
        &self,
        context: &InterviewContext,
    ) -> Result<Vec<String>, GenerationError> {
        Ok(topic::determine_topics(context))
    }
}

/// Bridging implementation that calls a remote orchestration service over
/// HTTP instead of linking the capability in-process.
pub struct HttpQuestionService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionService {
    /// Creates a bridge to the orchestration service's interview routes.
    ///
    /// `base_url` points at the route group hosting `/generate-question` and
    /// `/determine-topics`, e.g. `http://ai-orchestrator/api/v1/interview`.
    /// The `client` carries the configured request timeout.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl QuestionService for HttpQuestionService {
    async fn generate_next_question(
        &self,
        context: &InterviewContext,
        history: &[ConversationTurn],
    ) -> Result<String, GenerationError> {
        let request = InterviewRequest {
            context: context.clone(),
            history: history.to_vec(),
        };

        debug!(url = %self.base_url, turns = history.len(), "Forwarding question generation");
        let response = self
            .client
            .post(format!("{}/generate-question", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: InterviewResponse = response.json().await?;
        Ok(body.question_text)
    }

    async fn determine_topics(
        &self,
        context: &InterviewContext,
    ) -> Result<Vec<String>, GenerationError> {
        let response = self
            .client
            .post(format!("{}/determine-topics", self.base_url))
            .json(context)
            .send()
            .await?
            .error_for_status()?;

        let body: TopicsResponse = response.json().await?;
        Ok(body.topics)
    }
}
