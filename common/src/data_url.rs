//! Data URL 変換
//!
//! ブラウザのFileReader / canvas は `data:image/png;base64,...` 形式で画像を返す。

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};
use crate::types::ImagePayload;

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, data)| data)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出できない場合は "application/octet-stream"
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split([';', ',']).next())
        .filter(|s| !s.is_empty())
        .unwrap_or("application/octet-stream")
}

impl ImagePayload {
    /// Data URLからデコード
    pub fn from_data_url(data_url: &str) -> Result<Self> {
        if !data_url.starts_with("data:") {
            return Err(Error::DataUrl("\"data:\" で始まっていません".into()));
        }
        let data = extract_base64_from_data_url(data_url)
            .ok_or_else(|| Error::DataUrl("データ部がありません".into()))?;
        let header = &data_url[..data_url.len() - data.len() - 1];
        if !header.ends_with(";base64") {
            return Err(Error::DataUrl("Base64形式ではありません".into()));
        }

        let bytes = STANDARD
            .decode(data.trim())
            .map_err(|e| Error::DataUrl(e.to_string()))?;
        Ok(Self::new(extract_mime_type_from_data_url(data_url), bytes))
    }

    /// Data URLへエンコード
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64() {
        assert_eq!(
            extract_base64_from_data_url("data:image/png;base64,iVBORw0KGgo="),
            Some("iVBORw0KGgo=")
        );
        assert_eq!(extract_base64_from_data_url("no-comma"), None);
    }

    #[test]
    fn test_extract_mime_type() {
        assert_eq!(extract_mime_type_from_data_url("data:image/jpeg;base64,xx"), "image/jpeg");
        assert_eq!(extract_mime_type_from_data_url("data:;base64,xx"), "application/octet-stream");
        assert_eq!(extract_mime_type_from_data_url("garbage"), "application/octet-stream");
    }

    #[test]
    fn test_payload_from_data_url() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,AAEC").unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.bytes, vec![0u8, 1, 2]);
    }

    #[test]
    fn test_payload_to_data_url() {
        let payload = ImagePayload::new("image/jpeg", vec![0xff, 0xd8, 0xff]);
        assert_eq!(payload.to_data_url(), "data:image/jpeg;base64,/9j/");
        assert_eq!(ImagePayload::from_data_url(&payload.to_data_url()).unwrap(), payload);
    }

    #[test]
    fn test_payload_from_invalid_data_url() {
        assert!(matches!(
            ImagePayload::from_data_url("image/png;base64,AAEC"),
            Err(Error::DataUrl(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:text/plain,hello"),
            Err(Error::DataUrl(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64"),
            Err(Error::DataUrl(_))
        ));
        assert!(matches!(
            ImagePayload::from_data_url("data:image/png;base64,!!!"),
            Err(Error::DataUrl(_))
        ));
    }
}
