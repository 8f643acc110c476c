use crate::domain::error::OdlError;
use crate::domain::model::EndpointResponse;
use crate::state::AppState;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router};
use serde::Deserialize;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const ADDITIONAL_NOTE: &str = "Don't forget to buy access to DeepL API in the future!";
pub const STARTING_UP: &str =
    "Translation backend is starting up. Please, make your request later.";
pub const MISSING_ARGS: &str = "Provide 'from', 'to' and 'content' args";
pub const ON_COOLDOWN: &str = "You are on cooldown. Please, be patient.";
pub const NOTHING_TRANSLATED: &str = "Something went wrong.";

#[derive(Debug, Default, Deserialize)]
pub struct TranslateQuery {
    from: Option<String>,
    to: Option<String>,
    content: Option<String>,
}

impl TranslateQuery {
    fn into_parts(self) -> Option<(String, String, String)> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        Some((present(self.from)?, present(self.to)?, present(self.content)?))
    }
}

type Reply = (StatusCode, Json<EndpointResponse>);

fn reply(status: StatusCode, body: EndpointResponse) -> Reply {
    (status, Json(body))
}

/// Every path answers the translation query.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(handle_translate)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_translate(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    query: Option<Query<TranslateQuery>>,
) -> Reply {
    let request_id = Uuid::new_v4();
    info!(%request_id, remote = %remote.ip(), "Got request");

    if !state.is_ready() {
        return reply(StatusCode::FORBIDDEN, EndpointResponse::err(STARTING_UP));
    }

    let Some((from, to, content)) = query.and_then(|Query(q)| q.into_parts()) else {
        return reply(StatusCode::NOT_FOUND, EndpointResponse::err(MISSING_ARGS));
    };

    let Some(_guard) = state.try_acquire(remote.ip()) else {
        warn!(%request_id, remote = %remote.ip(), "Caller on cooldown");
        return reply(StatusCode::FORBIDDEN, EndpointResponse::err(ON_COOLDOWN));
    };

    match translate(&state, &from, &to, &content).await {
        Ok(result) => reply(
            StatusCode::OK,
            EndpointResponse::ok(
                result.unwrap_or_else(|| NOTHING_TRANSLATED.to_string()),
                ADDITIONAL_NOTE,
            ),
        ),
        Err(e) => {
            error!(%request_id, "Translation failed: {}", e);
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                EndpointResponse::err(e.to_string()),
            )
        }
    }
}

async fn translate(
    state: &AppState,
    from: &str,
    to: &str,
    content: &str,
) -> Result<Option<String>, OdlError> {
    // measured in UTF-16 code units, so astral characters count twice
    let len = content.encode_utf16().count();
    if len > state.config.max_content_length {
        warn!(
            len,
            max = state.config.max_content_length,
            "Content too long, skipping translation"
        );
        return Ok(None);
    }
    state.translator.translate(from, to, content).await
}

/// Run the backend warm-up in the background and flip the ready flag when it succeeds.
pub fn spawn_warm_up(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match state.translator.warm_up().await {
            Ok(()) => {
                state.mark_ready();
                info!("Translation backend is ready");
            }
            Err(e) => error!("Translation backend failed to start: {}", e),
        }
    })
}

/// Serve the endpoint on `listener` until `shutdown` resolves.
pub async fn run_server<F>(
    state: AppState,
    listener: TcpListener,
    shutdown: F,
) -> Result<(), OdlError>
where
    F: Future<Output = ()> + Send + 'static,
{
    spawn_warm_up(state.clone());

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}
