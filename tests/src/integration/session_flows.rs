//! # Session Flows
//!
//! Client-visible behaviour of a connection: JSON frames in, JSON frames
//! out, with the engine slot carried across requests.

#[cfg(test)]
mod tests {
    use qs_04_session_gateway::ws::Message;
    use qs_04_session_gateway::{
        FrameAction, GatewayConfig, Session, SessionGatewayService, SimulationPipeline,
        WebSocketHandler,
    };
    use futures::{SinkExt, StreamExt};
    use serde_json::{json, Value};
    use std::f64::consts::FRAC_1_SQRT_2;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio_tungstenite::connect_async;
    use tokio_tungstenite::tungstenite::Message as ClientMessage;

    fn send(pipeline: &SimulationPipeline, session: &mut Session, request: Value) -> Value {
        serde_json::from_str(&pipeline.handle_text(session, &request.to_string())).unwrap()
    }

    #[test]
    fn test_hadamard_response_shape() {
        let pipeline = SimulationPipeline::new();
        let mut session = Session::default();
        let body = send(
            &pipeline,
            &mut session,
            json!({"numQubits": 1, "operations": [{"type": "H", "target": 0}]}),
        );

        assert_eq!(body["numQubits"], 1);
        assert!((body["probabilities"]["0"].as_f64().unwrap() - 0.5).abs() < 1e-9);
        assert!((body["probabilities"]["1"].as_f64().unwrap() - 0.5).abs() < 1e-9);

        let bloch = body["blochVectors"][0].as_array().unwrap();
        assert_eq!(bloch.len(), 3);
        assert!((bloch[0].as_f64().unwrap() - 1.0).abs() < 1e-9);

        let amplitudes = body["stateVector"].as_array().unwrap();
        assert_eq!(amplitudes.len(), 2);
        for pair in amplitudes {
            assert!((pair[0].as_f64().unwrap() - FRAC_1_SQRT_2).abs() < 1e-9);
            assert!(pair[1].as_f64().unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_bell_over_the_wire() {
        let pipeline = SimulationPipeline::new();
        let mut session = Session::default();
        let body = send(
            &pipeline,
            &mut session,
            json!({
                "numQubits": 2,
                "operations": [
                    {"type": "H", "target": 0},
                    {"type": "CNOT", "control": 0, "target": 1}
                ]
            }),
        );

        let labels: Vec<&String> = body["probabilities"].as_object().unwrap().keys().collect();
        assert_eq!(labels.len(), 4);
        for v in body["blochVectors"].as_array().unwrap() {
            for component in v.as_array().unwrap() {
                assert!(component.as_f64().unwrap().abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_missing_target_same_as_omitted() {
        let pipeline = SimulationPipeline::new();
        let mut session = Session::default();

        let with_bad = send(
            &pipeline,
            &mut session,
            json!({"numQubits": 2, "operations": [
                {"type": "H", "target": 1},
                {"type": "X"},
                {"type": "RZ", "target": 1, "angle": 1.25}
            ]}),
        );
        let without = send(
            &pipeline,
            &mut session,
            json!({"numQubits": 2, "operations": [
                {"type": "H", "target": 1},
                {"type": "RZ", "target": 1, "angle": 1.25}
            ]}),
        );
        assert_eq!(with_bad, without);
    }

    #[test]
    fn test_session_survives_errors() {
        let pipeline = SimulationPipeline::new();
        let mut session = Session::default();

        send(&pipeline, &mut session, json!({"numQubits": 5}));
        assert_eq!(session.cached_qubits(), Some(5));

        for bad in [json!({"numQubits": 0}), json!({"numQubits": 9}), json!({"numQubits": -3})] {
            let body = send(&pipeline, &mut session, bad);
            assert!(body["error"].is_string());
            assert_eq!(session.cached_qubits(), Some(5));
        }

        let body: Value =
            serde_json::from_str(&pipeline.handle_text(&mut session, "{broken")).unwrap();
        assert!(body["error"].is_string());

        let body = send(&pipeline, &mut session, json!({"numQubits": 5, "operations": []}));
        assert_eq!(body["numQubits"], 5);
        assert_eq!(session.requests_served(), 2);
    }

    #[test]
    fn test_engine_follows_requested_count() {
        let pipeline = SimulationPipeline::new();
        let mut session = Session::default();

        for n in [1, 8, 3, 3, 2] {
            let body = send(&pipeline, &mut session, json!({"numQubits": n}));
            assert_eq!(body["numQubits"], n);
            assert_eq!(session.cached_qubits(), Some(n as usize));
        }
    }

    #[test]
    fn test_connections_are_independent() {
        let pipeline = Arc::new(SimulationPipeline::new());
        let mut first = WebSocketHandler::new(Arc::clone(&pipeline));
        let mut second = WebSocketHandler::new(Arc::clone(&pipeline));
        assert_ne!(first.connection_id(), second.connection_id());

        let frame = |n: i64| Message::Text(json!({"numQubits": n}).to_string());
        assert!(matches!(first.handle_frame(frame(4)), FrameAction::Reply(_)));
        assert!(matches!(second.handle_frame(frame(2)), FrameAction::Reply(_)));

        assert_eq!(first.session().cached_qubits(), Some(4));
        assert_eq!(second.session().cached_qubits(), Some(2));
    }

    #[tokio::test]
    async fn test_health_over_tcp() {
        let config = GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            ..Default::default()
        };
        let service = SessionGatewayService::new(config).unwrap();
        let listener = TcpListener::bind(service.config().bind_addr()).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(async move {
            service
                .serve(listener, async {
                    let _ = stop_rx.await;
                })
                .await
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains(r#""status":"ok""#), "{response}");

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_socket_keeps_serving_then_closes_when_idle() {
        let config = GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            idle_timeout_secs: 1,
            ..Default::default()
        };
        let service = SessionGatewayService::new(config).unwrap();
        let listener = TcpListener::bind(service.config().bind_addr()).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(async move {
            service
                .serve(listener, async {
                    let _ = stop_rx.await;
                })
                .await
        });

        let (mut socket, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

        let frames = [
            "{bad".to_string(),
            json!({"numQubits": 9}).to_string(),
            json!({
                "numQubits": 2,
                "operations": [
                    {"type": "H", "target": 0},
                    {"type": "CNOT", "control": 0, "target": 1}
                ]
            })
            .to_string(),
        ];
        let mut replies = Vec::new();
        for frame in frames {
            socket.send(ClientMessage::Text(frame.into())).await.unwrap();
            let reply = socket.next().await.unwrap().unwrap();
            replies.push(serde_json::from_str::<Value>(reply.to_text().unwrap()).unwrap());
        }

        assert!(replies[0]["error"].as_str().unwrap().starts_with("Invalid request"));
        assert!(replies[1]["error"].as_str().unwrap().contains("got 9"));
        assert_eq!(replies[2]["numQubits"], 2);
        assert!((replies[2]["probabilities"]["00"].as_f64().unwrap() - 0.5).abs() < 1e-9);
        assert!((replies[2]["probabilities"]["11"].as_f64().unwrap() - 0.5).abs() < 1e-9);

        let quiet_since = Instant::now();
        let closing = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .unwrap();
        assert!(
            matches!(closing, Some(Ok(ClientMessage::Close(_)))),
            "expected close frame, got {closing:?}"
        );
        assert!(quiet_since.elapsed() >= Duration::from_millis(900));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
