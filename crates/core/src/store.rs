//! Session State Store
//!
//! Owns the per-session conversation history and interview context. The
//! transport layer mints a [`SessionId`] at accept time and releases it at
//! disconnect; nothing in here holds a transport handle.

use crate::interview::{ConversationTurn, InterviewContext};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Opaque identifier for one live client session.
pub type SessionId = Uuid;

/// Errors from session store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The session was never registered, or has already been unregistered.
    #[error("unknown connection: {0}")]
    UnknownConnection(SessionId),
}

#[derive(Debug, Default)]
struct SessionRecord {
    turns: Vec<ConversationTurn>,
    context: Option<InterviewContext>,
}

/// Concurrency-safe mapping from session id to conversation state.
///
/// Each session's record is only ever touched by that session's own
/// connection task, so a single exclusive map lock suffices; no per-entry
/// locking. The lock is never held across an await point.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a session active with an empty history.
    ///
    /// Registering an already-known id resets its state; callers avoid this
    /// by minting a fresh id per connection.
    pub async fn register(&self, id: SessionId) {
        self.sessions.lock().await.insert(id, SessionRecord::default());
    }

    /// Discards all state for a session. Unknown ids are a no-op.
    pub async fn unregister(&self, id: SessionId) {
        self.sessions.lock().await.remove(&id);
    }

    /// Appends a turn to a session's history.
    pub async fn append_turn(
        &self,
        id: SessionId,
        turn: ConversationTurn,
    ) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().await;
        let record = sessions
            .get_mut(&id)
            .ok_or(StoreError::UnknownConnection(id))?;
        record.turns.push(turn);
        Ok(())
    }

    /// Stores the interview context, overwriting any prior value.
    ///
    /// The protocol only sets the context once per session in practice, but
    /// single-write is not enforced here.
    pub async fn set_context(&self, id: SessionId, context: InterviewContext) {
        self.sessions.lock().await.entry(id).or_default().context = Some(context);
    }

    /// Returns the stored context, or the default empty context if none was set.
    pub async fn get_context(&self, id: SessionId) -> InterviewContext {
        self.sessions
            .lock()
            .await
            .get(&id)
            .and_then(|record| record.context.clone())
            .unwrap_or_default()
    }

    /// Returns the session's history in append order; empty when unknown.
    pub async fn get_history(&self, id: SessionId) -> Vec<ConversationTurn> {
        self.sessions
            .lock()
            .await
            .get(&id)
            .map(|record| record.turns.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_then_append_preserves_order() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.register(id).await;

        store
            .append_turn(id, ConversationTurn::interviewer("Q1"))
            .await
            .unwrap();
        store
            .append_turn(id, ConversationTurn::candidate("A1"))
            .await
            .unwrap();

        let history = store.get_history(id).await;
        assert_eq!(
            history,
            vec![
                ConversationTurn::interviewer("Q1"),
                ConversationTurn::candidate("A1"),
            ]
        );
    }

    #[tokio::test]
    async fn test_append_to_unknown_session_fails() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        let err = store
            .append_turn(id, ConversationTurn::candidate("hi"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownConnection(id));
    }

    #[tokio::test]
    async fn test_context_defaults_to_empty_until_set() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.register(id).await;

        assert_eq!(store.get_context(id).await, InterviewContext::default());

        let context = InterviewContext {
            job_description: "Backend developer".to_string(),
            candidate_resume: Some("Python".to_string()),
        };
        store.set_context(id, context.clone()).await;
        assert_eq!(store.get_context(id).await, context);
    }

    #[tokio::test]
    async fn test_set_context_overwrites_prior_value() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.register(id).await;

        store
            .set_context(
                id,
                InterviewContext {
                    job_description: "first".to_string(),
                    candidate_resume: None,
                },
            )
            .await;
        store
            .set_context(
                id,
                InterviewContext {
                    job_description: "second".to_string(),
                    candidate_resume: None,
                },
            )
            .await;

        assert_eq!(store.get_context(id).await.job_description, "second");
    }

    #[tokio::test]
    async fn test_unregister_discards_only_target_session() {
        let store = SessionStore::new();
        let doomed = Uuid::new_v4();
        let survivor = Uuid::new_v4();
        store.register(doomed).await;
        store.register(survivor).await;
        store
            .append_turn(survivor, ConversationTurn::interviewer("Q1"))
            .await
            .unwrap();

        store.unregister(doomed).await;

        // Stale handle no longer works, survivor untouched.
        assert!(
            store
                .append_turn(doomed, ConversationTurn::candidate("late"))
                .await
                .is_err()
        );
        assert_eq!(store.get_history(survivor).await.len(), 1);
    }

    #[tokio::test]
    async fn test_unregister_unknown_session_is_noop() {
        let store = SessionStore::new();
        store.unregister(Uuid::new_v4()).await;
    }

    #[tokio::test]
    async fn test_reregister_resets_history() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store.register(id).await;
        store
            .append_turn(id, ConversationTurn::candidate("hi"))
            .await
            .unwrap();

        store.register(id).await;
        assert!(store.get_history(id).await.is_empty());
        assert_eq!(store.get_context(id).await, InterviewContext::default());
    }
}
