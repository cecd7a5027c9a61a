//! 抽出サービス HTTPサーバー
//!
//! `POST /analyze` で `{ "ocr_text": ... }` を受け取り、
//! エージェントの応答を `{ "result": ... }` で返す。
//! ブラウザ版から直接呼べるようにCORSを許可する。

use crate::agent::EventAgent;
use crate::error::{EventScanError, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use event_scan_common::{ErrorResponse, ExtractResponse};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Clone)]
pub struct ServerState {
    agent: Arc<dyn EventAgent>,
}

impl ServerState {
    pub fn new(agent: Arc<dyn EventAgent>) -> Self {
        Self { agent }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn serve(addr: SocketAddr, state: ServerState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, state).await
}

/// バインド済みのリスナーで起動（テストではポート0を使う）
pub async fn serve_on(listener: TcpListener, state: ServerState) -> Result<()> {
    tracing::info!("抽出サービス起動: {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .map_err(|e| EventScanError::Server(e.to_string()))
}

async fn analyze(
    State(state): State<ServerState>,
    body: Bytes,
) -> std::result::Result<Json<ExtractResponse>, ApiError> {
    let request: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("JSON parsing error: {}", e);
        api_error(StatusCode::BAD_REQUEST, "Invalid JSON in request body")
    })?;

    // 文字列以外（数値など）は未指定と同じ扱い
    let ocr_text = request
        .get("ocr_text")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "ocr_text is required"))?;

    tracing::info!(chars = ocr_text.len(), "analyze: リクエスト受信");

    let result = state.agent.process(ocr_text).await.map_err(|e| {
        tracing::error!("Error in analyze endpoint: {:#}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{:#}", e))
    })?;

    Ok(Json(ExtractResponse { result }))
}

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
