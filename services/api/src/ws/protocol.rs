//! Defines the WebSocket event protocol between the browser client and the server.
//!
//! Events travel as JSON objects with an `event` discriminator and an
//! optional `payload` object; events without data omit the payload entirely.

use serde::{Deserialize, Serialize};

/// Events sent from the client (browser) to the server.
#[derive(Deserialize, Debug)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Establishes the interview context and starts the session.
    JoinSession {
        #[serde(default)]
        job_description: String,
        #[serde(default)]
        candidate_resume: String,
    },
    /// The candidate's answer to the last question.
    SendAnswer {
        #[serde(default)]
        answer_text: String,
    },
}

/// Events sent from the server to the client (browser).
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Confirms the session has started.
    SessionStarted,
    /// The topics inferred for this interview.
    Topics { topics: Vec<String> },
    /// Immediate acknowledgment that an answer is being processed.
    InterviewerTyping,
    /// The next interviewer question.
    NewQuestion { question_text: String },
    /// Reports a fatal error before the connection closes.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_session_parses_full_payload() {
        let event: ClientEvent = serde_json::from_str(
            r#"{
                "event": "join_session",
                "payload": {
                    "interview_id": "test",
                    "job_description": "Backend dev",
                    "candidate_resume": "Experienced in Python"
                }
            }"#,
        )
        .unwrap();

        // Unknown payload fields like `interview_id` are tolerated.
        match event {
            ClientEvent::JoinSession {
                job_description,
                candidate_resume,
            } => {
                assert_eq!(job_description, "Backend dev");
                assert_eq!(candidate_resume, "Experienced in Python");
            }
            other => panic!("parsed wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_join_session_fields_default_to_empty() {
        let event: ClientEvent =
            serde_json::from_str(r#"{"event":"join_session","payload":{}}"#).unwrap();
        match event {
            ClientEvent::JoinSession {
                job_description,
                candidate_resume,
            } => {
                assert_eq!(job_description, "");
                assert_eq!(candidate_resume, "");
            }
            other => panic!("parsed wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_send_answer_parses() {
        let event: ClientEvent =
            serde_json::from_str(r#"{"event":"send_answer","payload":{"answer_text":"hi"}}"#)
                .unwrap();
        match event {
            ClientEvent::SendAnswer { answer_text } => assert_eq!(answer_text, "hi"),
            other => panic!("parsed wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_kind_is_rejected_by_parser() {
        let result = serde_json::from_str::<ClientEvent>(r#"{"event":"ping","payload":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_server_events_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&ServerEvent::SessionStarted).unwrap(),
            r#"{"event":"session_started"}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::Topics {
                topics: vec!["python".to_string(), "database".to_string()]
            })
            .unwrap(),
            r#"{"event":"topics","payload":{"topics":["python","database"]}}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::InterviewerTyping).unwrap(),
            r#"{"event":"interviewer_typing"}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerEvent::NewQuestion {
                question_text: "First question?".to_string()
            })
            .unwrap(),
            r#"{"event":"new_question","payload":{"question_text":"First question?"}}"#
        );
    }
}
