//! In-process stand-in for the correlation service.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use corrcalc_cli::{ApiConfig, CorrelationClient};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What every endpoint of the mock answers with.
#[derive(Clone)]
pub enum Reply {
    Ok(Value),
    Status(StatusCode, Value),
    Text(StatusCode, &'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Ok(body) => Json(body).into_response(),
            Reply::Status(code, body) => (code, Json(body)).into_response(),
            Reply::Text(code, body) => (code, body).into_response(),
        }
    }
}

#[derive(Clone)]
pub struct MockService {
    pub hits: Arc<AtomicUsize>,
    pub last_path: Arc<Mutex<Option<String>>>,
    pub last_body: Arc<Mutex<Option<Value>>>,
    reply: Reply,
}

impl MockService {
    pub fn new(reply: Reply) -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            last_path: Arc::new(Mutex::new(None)),
            last_body: Arc::new(Mutex::new(None)),
            reply,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<String> {
        self.last_path.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    fn record(&self, path: &str, body: Value) -> Reply {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(path.to_string());
        *self.last_body.lock().unwrap() = Some(body);
        self.reply.clone()
    }
}

async fn pearson(State(mock): State<MockService>, Json(body): Json<Value>) -> Reply {
    mock.record("/pearson", body)
}

async fn spearman(State(mock): State<MockService>, Json(body): Json<Value>) -> Reply {
    mock.record("/spearman", body)
}

async fn both(State(mock): State<MockService>, Json(body): Json<Value>) -> Reply {
    mock.record("/both", body)
}

async fn root(State(mock): State<MockService>) -> Reply {
    mock.record("/", Value::Null)
}

/// Starts the mock on an ephemeral port and returns its base URL.
pub async fn spawn(mock: MockService) -> String {
    let app = Router::new()
        .route("/", get(root))
        .route("/pearson", post(pearson))
        .route("/spearman", post(spearman))
        .route("/both", post(both))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock");
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}", addr)
}

pub fn client(base_url: &str) -> CorrelationClient {
    CorrelationClient::new(&ApiConfig::new(base_url)).expect("client")
}

pub fn single(coefficient: f64, percentage: &str) -> Value {
    json!({ "coefficient": coefficient, "percentage": percentage })
}

pub fn paired() -> Value {
    json!({
        "pearson": { "coefficient": 0.8, "percentage": "80%" },
        "spearman": { "coefficient": -0.2, "percentage": "-20%" }
    })
}
