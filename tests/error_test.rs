//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use event_scan::config::{Config, VISION_ENDPOINT_ENV, VISION_KEY_ENV};
use event_scan::error::EventScanError;
use event_scan::image_source;
use event_scan::vision::VisionClient;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像を読み込んだ場合
#[test]
fn test_load_nonexistent_image() {
    let result = image_source::load_image_file(Path::new("/nonexistent/path/poster.png"));
    assert!(matches!(result, Err(EventScanError::FileNotFound(_))));
}

/// ディレクトリを画像として読み込んだ場合
#[test]
fn test_load_directory_as_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = image_source::load_image_file(dir.path());
    assert!(matches!(result, Err(EventScanError::FileNotFound(_))));
}

/// 画像でないファイル
#[test]
fn test_load_text_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("event.txt");
    std::fs::write(&path, "Date: 2024-05-01").unwrap();

    let result = image_source::load_image_file(&path);
    assert!(matches!(result, Err(EventScanError::ImageLoad(_))));
}

/// 認証情報なしでOCRクライアントは作れない
#[test]
fn test_vision_client_requires_credentials() {
    let result = VisionClient::from_config(&Config::default());
    assert!(matches!(
        result,
        Err(EventScanError::MissingCredential(VISION_KEY_ENV))
    ));

    let result = VisionClient::from_config(&Config {
        vision_key: Some("key".into()),
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(EventScanError::MissingCredential(VISION_ENDPOINT_ENV))
    ));
}

/// MissingCredentialエラーのメッセージ確認
#[test]
fn test_missing_credential_message() {
    let err = EventScanError::MissingCredential(VISION_KEY_ENV);
    let display = format!("{}", err);

    assert!(display.contains("AZURE_VISION_KEY"));
    assert!(display.contains("event-scan config"));
}

/// EventScanErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        EventScanError::Config("テスト設定エラー".to_string()),
        EventScanError::FileNotFound("poster.jpg".to_string()),
        EventScanError::ImageLoad("壊れた画像".to_string()),
        EventScanError::Vision("status 401".to_string()),
        EventScanError::Extractor("status 500".to_string()),
        EventScanError::Server("bind failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: EventScanError = io_err.into();

    assert!(matches!(err, EventScanError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: EventScanError = json_err.into();

    assert!(matches!(err, EventScanError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = event_scan_common::Error::Config("設定エラー".to_string());
    let err: EventScanError = common_err.into();

    assert!(matches!(err, EventScanError::Common(_)));
    assert_eq!(format!("{}", err), "Config error: 設定エラー");
}
