//! Conversation and Wire Models
//!
//! Core data structures shared by the session relay and the orchestration
//! REST surface, with `utoipa` schema derives for OpenAPI generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Attribution of one conversation turn.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    Candidate,
    Interviewer,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::Candidate => write!(f, "candidate"),
            TurnRole::Interviewer => write!(f, "interviewer"),
        }
    }
}

/// A single utterance in the interview conversation.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ConversationTurn {
    #[schema(value_type = String, example = "candidate")]
    pub role: TurnRole,
    pub message: String,
}

impl ConversationTurn {
    pub fn candidate(message: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Candidate,
            message: message.into(),
        }
    }

    pub fn interviewer(message: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Interviewer,
            message: message.into(),
        }
    }
}

/// The subject matter of an interview: job description plus optional resume.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default, PartialEq)]
pub struct InterviewContext {
    #[schema(example = "Backend developer with Python and Postgres")]
    pub job_description: String,
    #[serde(default)]
    pub candidate_resume: Option<String>,
}

/// Request body for generating the next interview question.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct InterviewRequest {
    pub context: InterviewContext,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

/// Response body containing the generated question text.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct InterviewResponse {
    pub question_text: String,
}

/// Response body containing inferred interview topics.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}
