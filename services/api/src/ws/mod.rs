//! WebSocket Session Relay
//!
//! This module contains the logic for driving interview sessions over
//! WebSockets. It is structured into submodules for clarity:
//!
//! - `protocol`: Defines the JSON-based event format for client-server communication.
//! - `session`: Manages the connection lifecycle and the interview protocol state machine.

pub mod protocol;
pub mod session;

pub use session::ws_handler;
