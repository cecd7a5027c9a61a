//! 抽出サービスクライアント
//!
//! `{ "ocr_text": ... }` をPOSTし、`{ "result": ... }` を受け取る。

use crate::error::{EventScanError, Result};
use event_scan_common::{ExtractRequest, ExtractResponse};

pub struct ExtractorClient {
    http: reqwest::Client,
    url: String,
}

impl ExtractorClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// OCRテキストを送信し、ラベル付きテキストを受け取る
    pub async fn extract(&self, ocr_text: &str) -> Result<String> {
        tracing::debug!(url = %self.url, chars = ocr_text.len(), "抽出リクエスト送信");

        let response = self
            .http
            .post(&self.url)
            .json(&ExtractRequest {
                ocr_text: ocr_text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EventScanError::Extractor(format!("status {}: {}", status, body)));
        }

        let body: ExtractResponse = response
            .json()
            .await
            .map_err(|e| EventScanError::Extractor(format!("レスポンスのパースに失敗: {}", e)))?;
        Ok(body.result)
    }
}
