//! 测试公共工具: 桩翻译器与本地服务
#![allow(dead_code)]

use async_trait::async_trait;
use open_deepl::application::serve;
use open_deepl::infrastructure::config::ServerConfig;
use open_deepl::state::AppState;
use open_deepl::{OdlError, Translator};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Upper-cases the content and counts calls.
#[derive(Default)]
pub struct Shouting {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Translator for Shouting {
    async fn translate(&self, _from: &str, _to: &str, content: &str) -> Result<Option<String>, OdlError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(content.to_uppercase()))
    }
}

/// Echoes what it was asked, as "from|to|content".
pub struct Echo;

#[async_trait]
impl Translator for Echo {
    async fn translate(&self, from: &str, to: &str, content: &str) -> Result<Option<String>, OdlError> {
        Ok(Some(format!("{}|{}|{}", from, to, content)))
    }
}

/// Runs but never produces anything.
pub struct Silent;

#[async_trait]
impl Translator for Silent {
    async fn translate(&self, _from: &str, _to: &str, _content: &str) -> Result<Option<String>, OdlError> {
        Ok(None)
    }
}

/// Always fails.
pub struct Broken;

#[async_trait]
impl Translator for Broken {
    async fn translate(&self, _from: &str, _to: &str, _content: &str) -> Result<Option<String>, OdlError> {
        Err(OdlError::Api("boom".to_string()))
    }
}

/// Warm-up blocks until `open` is notified.
pub struct Gated {
    pub open: Arc<Notify>,
}

#[async_trait]
impl Translator for Gated {
    async fn warm_up(&self) -> Result<(), OdlError> {
        self.open.notified().await;
        Ok(())
    }

    async fn translate(&self, _from: &str, _to: &str, content: &str) -> Result<Option<String>, OdlError> {
        Ok(Some(content.to_string()))
    }
}

/// Never finishes a translation; counts how many were started.
#[derive(Default)]
pub struct Stuck {
    pub started: AtomicUsize,
}

#[async_trait]
impl Translator for Stuck {
    async fn translate(&self, _from: &str, _to: &str, _content: &str) -> Result<Option<String>, OdlError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        Ok(None)
    }
}

pub fn server_config(cooldown_ms: u64) -> ServerConfig {
    ServerConfig {
        port: 0,
        cooldown_ms,
        max_content_length: 4900,
    }
}

/// Start the real endpoint on an ephemeral port, including the background warm-up.
pub async fn spawn_endpoint(translator: Arc<dyn Translator>, config: ServerConfig) -> (String, AppState) {
    let state = AppState::new(translator, config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_state = state.clone();
    tokio::spawn(async move {
        serve::run_server(server_state, listener, std::future::pending())
            .await
            .unwrap();
    });

    wait_until_ready(&state).await;
    (format!("http://{}", addr), state)
}

/// Same as [`spawn_endpoint`] but returns before the backend is ready.
pub async fn spawn_endpoint_cold(translator: Arc<dyn Translator>, config: ServerConfig) -> (String, AppState) {
    let state = AppState::new(translator, config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_state = state.clone();
    tokio::spawn(async move {
        serve::run_server(server_state, listener, std::future::pending())
            .await
            .unwrap();
    });

    (format!("http://{}", addr), state)
}

pub async fn wait_until_ready(state: &AppState) {
    for _ in 0..200 {
        if state.is_ready() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("endpoint never became ready");
}

/// A plain axum app that answers every request with a fixed status and body.
pub async fn spawn_raw(status: u16, body: &'static str) -> String {
    use axum::http::StatusCode;
    use axum::Router;

    let status = StatusCode::from_u16(status).unwrap();
    let app = Router::new().fallback(move || async move { (status, body) });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An address nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
