use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("{0} が設定されていません。環境変数か `event-scan config` で設定してください")]
    MissingCredential(&'static str),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("OCRサービスエラー: {0}")]
    Vision(String),

    #[error("Failed to process event data: {0}")]
    Extractor(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("サーバーエラー: {0}")]
    Server(String),

    #[error(transparent)]
    Common(#[from] event_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, EventScanError>;
