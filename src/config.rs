use crate::ai_provider::AiProvider;
use crate::error::{EventScanError, Result};
use event_scan_common::VisionCredentials;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const VISION_KEY_ENV: &str = "AZURE_VISION_KEY";
pub const VISION_ENDPOINT_ENV: &str = "AZURE_VISION_ENDPOINT";
pub const EXTRACTOR_URL_ENV: &str = "EVENT_SCAN_EXTRACTOR_URL";

pub const DEFAULT_EXTRACTOR_URL: &str = "http://127.0.0.1:5000/analyze";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vision_key: Option<String>,
    pub vision_endpoint: Option<String>,
    pub extractor_url: String,
    pub ai_provider: AiProvider,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vision_key: None,
            vision_endpoint: None,
            extractor_url: DEFAULT_EXTRACTOR_URL.into(),
            ai_provider: AiProvider::Claude,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EventScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("event-scan").join("config.json"))
    }

    /// 環境変数を優先（空文字は未設定扱い）
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(VISION_KEY_ENV) {
            self.vision_key = Some(key);
        }
        if let Some(endpoint) = lookup(VISION_ENDPOINT_ENV) {
            self.vision_endpoint = Some(endpoint);
        }
        if let Some(url) = lookup(EXTRACTOR_URL_ENV) {
            self.extractor_url = url;
        }
    }

    /// OCRサービスの認証情報（どちらか欠けていればエラー）
    pub fn vision_credentials(&self) -> Result<VisionCredentials> {
        if is_blank(&self.vision_key) {
            return Err(EventScanError::MissingCredential(VISION_KEY_ENV));
        }
        if is_blank(&self.vision_endpoint) {
            return Err(EventScanError::MissingCredential(VISION_ENDPOINT_ENV));
        }

        Ok(VisionCredentials::resolve(
            self.vision_key.as_deref(),
            self.vision_endpoint.as_deref(),
        )?)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extractor_url, "http://127.0.0.1:5000/analyze");
        assert!(config.vision_key.is_none());
        assert!(config.vision_endpoint.is_none());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config {
            vision_key: Some("file-key".into()),
            ..Default::default()
        };
        let vars = env(&[
            (VISION_KEY_ENV, "env-key"),
            (VISION_ENDPOINT_ENV, "https://vision.example.com"),
            (EXTRACTOR_URL_ENV, "http://localhost:8080/analyze"),
        ]);
        config.apply_env(|name| vars.get(name).cloned());

        assert_eq!(config.vision_key.as_deref(), Some("env-key"));
        assert_eq!(config.vision_endpoint.as_deref(), Some("https://vision.example.com"));
        assert_eq!(config.extractor_url, "http://localhost:8080/analyze");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let mut config = Config {
            vision_key: Some("file-key".into()),
            ..Default::default()
        };
        let vars = env(&[(VISION_KEY_ENV, "  ")]);
        config.apply_env(|name| vars.get(name).cloned());
        assert_eq!(config.vision_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_vision_credentials_missing_key() {
        let config = Config {
            vision_endpoint: Some("https://vision.example.com".into()),
            ..Default::default()
        };
        let err = config.vision_credentials().unwrap_err();
        assert!(matches!(err, EventScanError::MissingCredential(VISION_KEY_ENV)));
    }

    #[test]
    fn test_vision_credentials_missing_endpoint() {
        let config = Config {
            vision_key: Some("key".into()),
            vision_endpoint: Some("".into()),
            ..Default::default()
        };
        let err = config.vision_credentials().unwrap_err();
        assert!(matches!(err, EventScanError::MissingCredential(VISION_ENDPOINT_ENV)));
    }

    #[test]
    fn test_vision_credentials_ok() {
        let config = Config {
            vision_key: Some("key".into()),
            vision_endpoint: Some("https://vision.example.com/".into()),
            ..Default::default()
        };
        let creds = config.vision_credentials().unwrap();
        assert_eq!(creds.endpoint(), "https://vision.example.com");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            vision_key: Some("key".into()),
            ai_provider: AiProvider::Gemini,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.vision_key.as_deref(), Some("key"));
        assert!(matches!(loaded.ai_provider, AiProvider::Gemini));
        assert_eq!(loaded.extractor_url, DEFAULT_EXTRACTOR_URL);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded.extractor_url, DEFAULT_EXTRACTOR_URL);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"vision_endpoint": "https://vision.example.com"}"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.vision_endpoint.as_deref(), Some("https://vision.example.com"));
        assert!(matches!(loaded.ai_provider, AiProvider::Claude));
    }
}
