//! Manages the WebSocket connection lifecycle for an interview session.
//!
//! Each connection gets a fresh session id and an empty history; the
//! interview protocol then runs strictly sequentially within the connection's
//! own task. Disconnecting discards all session state — there are no
//! reconnection or resume semantics.

use super::protocol::{ClientEvent, ServerEvent};
use crate::state::AppState;
use anyhow::Result;
use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use interview_core::{
    interview::{ConversationTurn, InterviewContext},
    store::SessionId,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Axum handler to upgrade an HTTP connection to a WebSocket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(interview_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, interview_id))
}

/// Main handler for an individual WebSocket connection.
///
/// Registers a session in the store, drives the event loop until the client
/// disconnects or a generation call fails, then discards the session state.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, interview_id: String) {
    let session_id: SessionId = Uuid::new_v4();
    let span = info_span!("ws_session", %session_id, %interview_id);

    async move {
        info!("New WebSocket connection.");
        state.sessions.register(session_id).await;

        let (mut socket_tx, mut socket_rx) = socket.split();

        while let Some(msg_result) = socket_rx.next().await {
            let ws_msg = match msg_result {
                Ok(ws_msg) => ws_msg,
                Err(e) => {
                    error!("Error receiving from client WebSocket: {:?}", e);
                    break;
                }
            };

            match ws_msg {
                Message::Text(text) => {
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(_) => {
                            // Unknown or malformed events are ignored, not errors.
                            warn!("Ignoring unrecognized client event.");
                            continue;
                        }
                    };

                    if let Err(e) = handle_event(&state, session_id, event, &mut socket_tx).await {
                        error!(error = ?e, "Session event handling failed. Closing connection.");
                        let _ = send_event(
                            &mut socket_tx,
                            ServerEvent::Error {
                                message: e.to_string(),
                            },
                        )
                        .await;
                        break;
                    }
                }
                Message::Close(_) => {
                    info!("Client sent close frame.");
                    break;
                }
                Message::Binary(_) => warn!("Ignoring unexpected binary message."),
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }

        state.sessions.unregister(session_id).await;
        info!("WebSocket connection closed and session state discarded.");
    }
    .instrument(span)
    .await
}

/// Applies one client event to the session, driving the interview protocol.
///
/// `join_session` establishes the context, reports topics, and asks the first
/// question; `send_answer` records the candidate's answer and asks the next
/// one. A repeated `join_session` simply re-runs the join logic over the new
/// context.
async fn handle_event(
    state: &Arc<AppState>,
    session_id: SessionId,
    event: ClientEvent,
    socket_tx: &mut SplitSink<WebSocket, Message>,
) -> Result<()> {
    match event {
        ClientEvent::JoinSession {
            job_description,
            candidate_resume,
        } => {
            info!("Starting interview session.");
            let context = InterviewContext {
                job_description,
                candidate_resume: (!candidate_resume.is_empty()).then_some(candidate_resume),
            };
            state.sessions.set_context(session_id, context.clone()).await;

            let topics = state.relay_generator.determine_topics(&context).await?;
            send_event(socket_tx, ServerEvent::SessionStarted).await?;
            send_event(socket_tx, ServerEvent::Topics { topics }).await?;

            let question_text = next_question(state, session_id).await?;
            send_event(socket_tx, ServerEvent::NewQuestion { question_text }).await?;
        }
        ClientEvent::SendAnswer { answer_text } => {
            state
                .sessions
                .append_turn(session_id, ConversationTurn::candidate(answer_text))
                .await?;
            send_event(socket_tx, ServerEvent::InterviewerTyping).await?;

            let question_text = next_question(state, session_id).await?;
            send_event(socket_tx, ServerEvent::NewQuestion { question_text }).await?;
        }
    }
    Ok(())
}

/// Generates the next interviewer question from the stored context and
/// history, recording it as an interviewer turn before it is returned so the
/// next generation call sees it.
async fn next_question(state: &Arc<AppState>, session_id: SessionId) -> Result<String> {
    let context = state.sessions.get_context(session_id).await;
    let history = state.sessions.get_history(session_id).await;

    let question = state
        .relay_generator
        .generate_next_question(&context, &history)
        .await?;

    state
        .sessions
        .append_turn(session_id, ConversationTurn::interviewer(question.clone()))
        .await?;
    Ok(question)
}

/// Serializes and sends a `ServerEvent` to the client.
async fn send_event(
    socket_tx: &mut SplitSink<WebSocket, Message>,
    event: ServerEvent,
) -> Result<()> {
    let serialized = serde_json::to_string(&event)?;
    socket_tx.send(Message::Text(serialized.into())).await?;
    Ok(())
}
