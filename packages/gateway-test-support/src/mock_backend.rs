//! Scriptable mock backend server for proxy integration tests.
//!
//! Binds an actix server to an ephemeral localhost port, records every
//! request it receives, and answers from a scripted response queue, falling
//! back to a configurable default. Tests read the recorded requests back to
//! assert on what the proxy actually sent upstream.

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::{header, StatusCode};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};

/// A single request observed by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

struct MockState {
    scripted: Mutex<VecDeque<(u16, String)>>,
    default_status: u16,
    default_body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for a [`MockBackend`].
pub struct MockBackendBuilder {
    scripted: VecDeque<(u16, String)>,
    default_status: u16,
    default_body: String,
}

impl MockBackendBuilder {
    /// Set the response returned whenever the script queue is empty.
    pub fn respond_with(mut self, status: u16, body: impl Into<String>) -> Self {
        self.default_status = status;
        self.default_body = body.into();
        self
    }

    /// Queue a one-shot response. Queued responses are served in order
    /// before the default applies.
    pub fn enqueue(mut self, status: u16, body: impl Into<String>) -> Self {
        self.scripted.push_back((status, body.into()));
        self
    }

    /// Bind to an ephemeral localhost port and start serving.
    pub async fn start(self) -> std::io::Result<MockBackend> {
        let listener = TcpListener::bind(("127.0.0.1", 0))?;
        let addr = listener.local_addr()?;

        let state = Arc::new(MockState {
            scripted: Mutex::new(self.scripted),
            default_status: self.default_status,
            default_body: self.default_body,
            requests: Mutex::new(Vec::new()),
        });

        let data = web::Data::from(state.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::route().to(capture))
        })
        .workers(1)
        .listen(listener)?
        .run();

        let handle = server.handle();
        tokio::spawn(server);

        Ok(MockBackend {
            base_url: format!("http://{addr}"),
            state,
            handle,
        })
    }
}

/// Mock backend server bound to an ephemeral localhost port.
pub struct MockBackend {
    base_url: String,
    state: Arc<MockState>,
    handle: ServerHandle,
}

impl MockBackend {
    pub fn builder() -> MockBackendBuilder {
        MockBackendBuilder {
            scripted: VecDeque::new(),
            default_status: 200,
            default_body: r#"{"success":true,"data":null}"#.to_string(),
        }
    }

    /// Start with the default response and an empty script queue.
    pub async fn start() -> std::io::Result<MockBackend> {
        Self::builder().start().await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.requests.lock().unwrap().last().cloned()
    }

    /// Stop accepting connections, leaving the port closed.
    pub async fn stop(&self) {
        self.handle.stop(false).await;
    }
}

async fn capture(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type: req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let (status, payload) = state
        .scripted
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| (state.default_status, state.default_body.clone()));

    HttpResponse::build(StatusCode::from_u16(status).unwrap_or(StatusCode::OK))
        .content_type("application/json")
        .body(payload)
}
