//! WebSocket transport.

pub mod handler;

pub use axum::extract::ws::Message;
pub use handler::{FrameAction, WebSocketConfig, WebSocketHandler};
