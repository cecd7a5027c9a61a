//! OCRサービス（Azure AI Vision Image Analysis）クライアント
//!
//! 認証情報が揃っていることを `from_config` で検証してから生成する。
//! リトライはしない（失敗はそのまま呼び出し元へ）。

use crate::config::Config;
use crate::error::{EventScanError, Result};
use event_scan_common::ocr::{CONTENT_TYPE, SUBSCRIPTION_KEY_HEADER};
use event_scan_common::{parse_ocr_response, ImagePayload, OcrResult, VisionCredentials};

pub struct VisionClient {
    http: reqwest::Client,
    credentials: VisionCredentials,
}

impl VisionClient {
    pub fn new(http: reqwest::Client, credentials: VisionCredentials) -> Self {
        Self { http, credentials }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.vision_credentials()?;
        Ok(Self::new(reqwest::Client::new(), credentials))
    }

    /// 画像を送信し、キャプションと読み取り結果を取得
    pub async fn recognize_text(&self, payload: &ImagePayload) -> Result<OcrResult> {
        let url = self.credentials.analyze_url();
        tracing::debug!(%url, bytes = payload.len(), "OCRリクエスト送信");

        let response = self
            .http
            .post(&url)
            .header(SUBSCRIPTION_KEY_HEADER, self.credentials.key())
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .body(payload.bytes.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EventScanError::Vision(format!("status {}: {}", status, body)));
        }

        let result = parse_ocr_response(&body)
            .map_err(|e| EventScanError::Vision(format!("レスポンスのパースに失敗: {}", e)))?;

        tracing::debug!(
            caption = result.caption().unwrap_or(""),
            blocks = result.read_result.as_ref().map_or(0, |r| r.blocks.len()),
            "OCRレスポンス受信"
        );
        Ok(result)
    }
}
