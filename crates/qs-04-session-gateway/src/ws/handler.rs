//! WebSocket handler: one task per connection.
//!
//! Requests on a connection are processed strictly in order. Errors are
//! answered with an `{"error": ...}` frame and the connection stays open.
//!
//! Limits:
//! - Message size (default 64 KiB)
//! - Idle timeout (default 300 s without an inbound frame)

use crate::domain::config::{GatewayConfig, DEFAULT_IDLE_TIMEOUT_SECS, DEFAULT_MAX_MESSAGE_SIZE};
use crate::domain::connection::ConnectionId;
use crate::domain::error::GatewayError;
use crate::domain::payloads::ErrorResponse;
use crate::domain::session::Session;
use crate::pipeline::SimulationPipeline;
use axum::extract::ws::{Message, WebSocket};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// WebSocket limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebSocketConfig {
    /// Maximum message size in bytes
    pub max_message_size: usize,
    /// Disconnect if no frame arrives for this long
    pub idle_timeout: Duration,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

impl From<&GatewayConfig> for WebSocketConfig {
    fn from(config: &GatewayConfig) -> Self {
        Self {
            max_message_size: config.max_message_size,
            idle_timeout: config.idle_timeout(),
        }
    }
}

/// What to do after one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameAction {
    Reply(Message),
    Ignore,
    Close,
}

/// WebSocket connection handler
pub struct WebSocketHandler {
    pipeline: Arc<SimulationPipeline>,
    session: Session,
    config: WebSocketConfig,
}

impl WebSocketHandler {
    pub fn new(pipeline: Arc<SimulationPipeline>) -> Self {
        Self::with_config(pipeline, WebSocketConfig::default())
    }

    pub fn with_config(pipeline: Arc<SimulationPipeline>, config: WebSocketConfig) -> Self {
        Self {
            pipeline,
            session: Session::new(ConnectionId::new()),
            config,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.session.connection_id()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Check message size, returns error response if too large
    fn check_message_size(&self, size: usize) -> Option<String> {
        if size <= self.config.max_message_size {
            return None;
        }
        let err = GatewayError::MessageTooLarge {
            size,
            max: self.config.max_message_size,
        };
        warn!(
            connection_id = %self.connection_id(),
            size,
            max = self.config.max_message_size,
            "Message exceeds size limit"
        );
        Some(ErrorResponse::new(err.to_string()).to_json())
    }

    fn handle_request(&mut self, text: &str) -> Message {
        if let Some(error_response) = self.check_message_size(text.len()) {
            return Message::Text(error_response);
        }
        Message::Text(self.pipeline.handle_text(&mut self.session, text))
    }

    /// Process one inbound frame.
    pub fn handle_frame(&mut self, message: Message) -> FrameAction {
        match message {
            Message::Text(text) => FrameAction::Reply(self.handle_request(&text)),
            Message::Binary(data) => {
                if let Some(error_response) = self.check_message_size(data.len()) {
                    return FrameAction::Reply(Message::Text(error_response));
                }
                match String::from_utf8(data) {
                    Ok(text) => FrameAction::Reply(self.handle_request(&text)),
                    Err(e) => {
                        let err = GatewayError::Parse(format!("binary frame is not UTF-8: {e}"));
                        FrameAction::Reply(Message::Text(ErrorResponse::new(err.to_string()).to_json()))
                    }
                }
            }
            Message::Ping(data) => FrameAction::Reply(Message::Pong(data)),
            Message::Pong(_) => FrameAction::Ignore,
            Message::Close(_) => {
                debug!(connection_id = %self.connection_id(), "WebSocket close received");
                FrameAction::Close
            }
        }
    }

    /// Handle a WebSocket connection until it closes or goes idle.
    pub async fn handle(mut self, mut socket: WebSocket) {
        info!(
            connection_id = %self.connection_id(),
            "New WebSocket connection"
        );

        loop {
            let next = match tokio::time::timeout(self.config.idle_timeout, socket.next()).await {
                Ok(next) => next,
                Err(_) => {
                    info!(
                        connection_id = %self.connection_id(),
                        "Closing idle WebSocket connection"
                    );
                    if let Err(e) = socket.send(Message::Close(None)).await {
                        debug!(
                            connection_id = %self.connection_id(),
                            error = %e,
                            "Close frame not delivered"
                        );
                    }
                    break;
                }
            };

            let message = match next {
                Some(Ok(message)) => message,
                Some(Err(e)) => {
                    warn!(connection_id = %self.connection_id(), error = %e, "WebSocket error");
                    break;
                }
                None => break,
            };

            match self.handle_frame(message) {
                FrameAction::Reply(reply) => {
                    if let Err(e) = socket.send(reply).await {
                        error!(
                            connection_id = %self.connection_id(),
                            error = %e,
                            "Failed to send WebSocket response"
                        );
                        break;
                    }
                }
                FrameAction::Ignore => {}
                FrameAction::Close => break,
            }
        }

        info!(
            connection_id = %self.connection_id(),
            requests = self.session.requests_served(),
            "WebSocket connection closed"
        );
    }
}
