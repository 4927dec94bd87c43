//! Interview API Library Crate
//!
//! This library contains all the logic for the interview web service: the
//! application state, the orchestration REST surface, the WebSocket session
//! relay, and routing. The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod ws;
