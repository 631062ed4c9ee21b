//! Session Gateway service - HTTP server hosting the WebSocket route.

use crate::domain::config::{GatewayConfig, HEALTH_PATH};
use crate::domain::error::GatewayError;
use crate::middleware::create_cors_layer;
use crate::pipeline::SimulationPipeline;
use crate::ws::{WebSocketConfig, WebSocketHandler};
use axum::{
    extract::{ws::WebSocketUpgrade, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Session Gateway service state
pub struct SessionGatewayService {
    config: GatewayConfig,
    pipeline: Arc<SimulationPipeline>,
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    pipeline: Arc<SimulationPipeline>,
    websocket: WebSocketConfig,
}

impl SessionGatewayService {
    /// Create a new gateway with the default pipeline
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_pipeline(config, SimulationPipeline::new())
    }

    pub fn with_pipeline(
        config: GatewayConfig,
        pipeline: SimulationPipeline,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self {
            config,
            pipeline: Arc::new(pipeline),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router: WebSocket upgrade plus health check
    pub fn router(&self) -> Router {
        let state = AppState {
            pipeline: Arc::clone(&self.pipeline),
            websocket: WebSocketConfig::from(&self.config),
        };

        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&self.config.cors_origins));

        Router::new()
            .route(&self.config.ws_path, get(ws_upgrade))
            .route(HEALTH_PATH, get(health_check))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        info!(
            addr = %addr,
            ws_path = %self.config.ws_path,
            "Session gateway listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Session gateway stopped");
        Ok(())
    }
}

async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        let handler = WebSocketHandler::with_config(state.pipeline, state.websocket);
        handler.handle(socket).await;
    })
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "session-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
