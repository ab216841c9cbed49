#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use diagnosis_frontend::config::{DiagnosisApiConfig, FrontendConfig};
use diagnosis_frontend::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Canned reply served by the stub diagnosis backend.
#[derive(Clone)]
pub struct StubResponse {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl StubResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

/// A request the stub backend received.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    response: Arc<Mutex<StubResponse>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stand-in for the diagnosis service, listening on an ephemeral port.
pub struct StubBackend {
    pub address: String,
    state: StubState,
}

impl StubBackend {
    pub async fn spawn(response: StubResponse) -> Self {
        let state = StubState {
            response: Arc::new(Mutex::new(response)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/api/diagnose", post(stub_diagnose))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { address, state }
    }

    pub fn respond_with(&self, response: StubResponse) {
        *self.state.response.lock().unwrap() = response;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn stub_diagnose(State(state): State<StubState>, headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    let response = state.response.lock().unwrap().clone();
    (
        response.status,
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
        .into_response()
}

/// Backend that answers one request with `status_line` and a declared body
/// length, then closes the connection after only part of the body.
pub async fn spawn_truncated_backend(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_full_request(&mut stream).await;
        let head = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: 100\r\n\r\npartial"
        );
        stream.write_all(head.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
    });

    address
}

/// Drain headers and a `content-length` body so closing the socket does not
/// reset the connection before the client reads the response head.
async fn read_full_request(stream: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let body_len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            return;
        }
    }
}

/// Address nothing is listening on.
pub async fn unreachable_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    address
}

/// The frontend, running on an ephemeral port against `backend_url`.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(backend_url: &str) -> Self {
        let config = FrontendConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                ..CoreConfig::default()
            },
            diagnosis_api: DiagnosisApiConfig::new(backend_url),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    /// Submit the symptom form the way htmx does.
    pub async fn submit_symptoms(&self, symptoms: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/diagnose", self.address))
            .header("HX-Request", "true")
            .form(&[("symptoms", symptoms)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
