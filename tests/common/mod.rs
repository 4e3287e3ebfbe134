// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing,
    Router,
};
use http_body_util::BodyExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use serde_json::Value;
use tower::ServiceExt;

use og_preview_server::{
    cache::CacheStore,
    handlers,
    preview::{Document, FetchError, PageFetcher, PreviewService},
    state::AppState,
};

/// Build the application router around the given store and fetcher.
pub fn create_test_app(store: Arc<dyn CacheStore>, fetcher: Arc<dyn PageFetcher>) -> Router {
    let state = AppState {
        previews: PreviewService::new(store, fetcher),
    };
    Router::new()
        .route("/health", routing::get(handlers::health_check))
        .route("/preview", routing::get(handlers::preview::get_preview))
        .with_state(state)
}

// ── Fakes ────────────────────────────────────────────────────────────────────

/// Fetcher that returns canned HTML (or a canned status) and counts calls.
pub struct CountingFetcher {
    response: Result<String, u16>,
    calls: AtomicUsize,
}

impl CountingFetcher {
    pub fn serving(html: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(html.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing_with(code: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(code),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch(&self, _url: &str) -> Result<Document, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(html) => Ok(Document::from_html(html.clone())),
            Err(code) => Err(FetchError::BadStatus {
                code: *code,
                reason: StatusCode::from_u16(*code)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("")
                    .to_string(),
            }),
        }
    }
}

// ── Target site ──────────────────────────────────────────────────────────────

/// Serve `router` on an ephemeral localhost port and return its address.
pub async fn spawn_site(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Answer every connection with the literal bytes of `response`, then close.
/// Used for replies a well-behaved HTTP server would never send.
pub async fn spawn_raw_site(response: &'static str) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
