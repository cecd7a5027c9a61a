//! Azure AI Vision Image Analysis 連携の共通部分
//!
//! リクエストURLの組み立てと、読み取り結果のテキスト平坦化。
//! HTTP呼び出し自体はCLI(reqwest)とWeb(fetch)がそれぞれ行う。

use crate::error::{Error, Result};
use crate::types::{OcrResult, ReadResult};

/// Image Analysis API バージョン
pub const API_VERSION: &str = "2023-10-01";

/// 要求する解析機能（キャプション + 全文読み取り）
pub const FEATURES: [&str; 2] = ["caption", "read"];

/// サブスクリプションキーのヘッダー名
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// 画像バイナリ送信時の Content-Type
pub const CONTENT_TYPE: &str = "application/octet-stream";

/// OCRサービスの認証情報
///
/// `resolve` でしか作れないため、値が揃っていることが保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionCredentials {
    key: String,
    endpoint: String,
}

impl VisionCredentials {
    /// キーとエンドポイントを検証
    ///
    /// どちらかが未設定（空白のみを含む）なら設定エラー。
    pub fn resolve(key: Option<&str>, endpoint: Option<&str>) -> Result<Self> {
        let key = non_blank(key)
            .ok_or_else(|| Error::Config("OCRサービスのAPIキーが未設定です".into()))?;
        let endpoint = non_blank(endpoint)
            .ok_or_else(|| Error::Config("OCRサービスのエンドポイントが未設定です".into()))?;

        Ok(Self {
            key: key.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 解析リクエストのURL
    pub fn analyze_url(&self) -> String {
        format!(
            "{}/computervision/imageanalysis:analyze?api-version={}&features={}",
            self.endpoint,
            API_VERSION,
            FEATURES.join(",")
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 読み取り結果を1つの文字列にする
///
/// 行は半角スペース、ブロックは改行で連結。順序はサービスの返した順のまま。
pub fn flatten_read_result(read: &ReadResult) -> String {
    read.blocks
        .iter()
        .map(|block| {
            block
                .lines
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// OCR結果からテキストを取り出す
///
/// 読み取り結果が含まれない場合は None。
pub fn extract_text(result: &OcrResult) -> Option<String> {
    result.read_result.as_ref().map(flatten_read_result)
}

/// OCRレスポンス本文をパース
pub fn parse_ocr_response(body: &str) -> Result<OcrResult> {
    Ok(serde_json::from_str(body)?)
}
