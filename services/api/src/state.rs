//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources: the session store and the generation capabilities.

use crate::config::Config;
use interview_core::{service::QuestionService, store::SessionStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
/// All fields are public to be accessible from other modules.
#[derive(Clone)]
pub struct AppState {
    /// Per-connection conversation state owned by the relay.
    pub sessions: Arc<SessionStore>,
    /// In-process generation capability backing the REST surface.
    pub generator: Arc<dyn QuestionService>,
    /// Capability the session relay calls. Either a clone of `generator` or
    /// an HTTP bridge to a remote orchestrator, chosen at startup; the relay
    /// never knows which.
    pub relay_generator: Arc<dyn QuestionService>,
    pub config: Arc<Config>,
}
