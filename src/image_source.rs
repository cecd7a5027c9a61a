//! 画像ファイルの読み込み
//!
//! デコードできることを確認してから ImagePayload にする。
//! OCRサービスが受け付けない形式はPNGに変換する。

use crate::error::{EventScanError, Result};
use event_scan_common::ImagePayload;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// OCRサービスがそのまま受け付ける形式
const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Ico,
];

pub fn load_image_file(path: &Path) -> Result<ImagePayload> {
    if !path.is_file() {
        return Err(EventScanError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let payload = decode_payload(bytes)
        .map_err(|e| EventScanError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        path = %path.display(),
        mime = %payload.mime_type,
        bytes = payload.len(),
        "画像を読み込みました"
    );
    Ok(payload)
}

/// バイト列を検証して ImagePayload にする
pub fn decode_payload(bytes: Vec<u8>) -> std::result::Result<ImagePayload, image::ImageError> {
    let format = image::guess_format(&bytes)?;
    let decoded = image::load_from_memory_with_format(&bytes, format)?;

    if ACCEPTED_FORMATS.contains(&format) {
        Ok(ImagePayload::new(format.to_mime_type(), bytes))
    } else {
        rasterize_png(&decoded)
    }
}

/// PNGにエンコード
pub fn rasterize_png(image: &image::DynamicImage) -> std::result::Result<ImagePayload, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(ImagePayload::new("image/png", buffer.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.png");
        RgbImage::from_pixel(4, 4, Rgb([255, 0, 0])).save(&path).unwrap();

        let payload = load_image_file(&path).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.bytes, std::fs::read(&path).unwrap());
    }

    #[test]
    fn test_load_jpeg_mime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poster.jpg");
        RgbImage::from_pixel(8, 8, Rgb([0, 0, 255])).save(&path).unwrap();

        let payload = load_image_file(&path).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image_file(Path::new("/nonexistent/poster.png")).unwrap_err();
        assert!(matches!(err, EventScanError::FileNotFound(_)));
    }

    #[test]
    fn test_load_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "Date: May 1").unwrap();

        let err = load_image_file(&path).unwrap_err();
        assert!(matches!(err, EventScanError::ImageLoad(_)));
    }

    #[test]
    fn test_rasterize_png() {
        let image = image::DynamicImage::ImageRgb8(RgbImage::new(2, 3));
        let payload = rasterize_png(&image).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(image::guess_format(&payload.bytes).unwrap(), ImageFormat::Png);
    }
}
