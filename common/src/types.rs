//! 解析パイプラインの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ImagePayload: 取得した画像（カメラ撮影 / ファイル）
//! - OcrResult: Azure AI Vision Image Analysis のレスポンス
//! - EventRecord: 抽出サービスの応答から得たイベント情報
//! - ExtractRequest / ExtractResponse: 抽出サービスのワイヤ形式

use serde::{Deserialize, Serialize};

/// 画像ペイロード（バイナリ + MIMEタイプ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// OCRサービスのレスポンス
///
/// features=caption,read を要求した結果。どちらも欠ける可能性がある。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrResult {
    pub model_version: String,
    pub caption_result: Option<CaptionResult>,
    pub read_result: Option<ReadResult>,
    pub metadata: Option<ImageMetadata>,
}

impl OcrResult {
    /// キャプション文字列（あれば）
    pub fn caption(&self) -> Option<&str> {
        self.caption_result.as_ref().map(|c| c.text.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionResult {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

/// 全文読み取り結果（ブロック順はサービスの順序のまま）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadResult {
    pub blocks: Vec<TextBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLine {
    pub text: String,
    pub bounding_polygon: Vec<Point>,
    pub words: Vec<Word>,
}

impl TextLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Word {
    pub text: String,
    pub bounding_polygon: Vec<Point>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// イベント情報
///
/// 見つからない項目は空文字（locationはNone）のまま。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: String,
    pub time: String,
    pub location: Option<String>,
    pub description: String,
}

/// イベント情報の項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventField {
    Date,
    Time,
    Location,
    Description,
}

impl EventField {
    /// 判定順（1行に複数のマーカーがある場合は先頭が優先）
    pub const ALL: [EventField; 4] = [
        EventField::Date,
        EventField::Time,
        EventField::Location,
        EventField::Description,
    ];

    /// 応答テキスト中の行マーカー
    pub fn marker(&self) -> &'static str {
        match self {
            EventField::Date => "Date:",
            EventField::Time => "Time:",
            EventField::Location => "Location:",
            EventField::Description => "Description:",
        }
    }
}

/// 抽出サービスへのリクエスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub ocr_text: String,
}

/// 抽出サービスの成功レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub result: String,
}

/// 抽出サービスのエラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
