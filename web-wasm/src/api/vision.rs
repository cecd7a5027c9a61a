//! OCRサービス（Azure AI Vision Image Analysis）呼び出し

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use event_scan_common::ocr::{CONTENT_TYPE, SUBSCRIPTION_KEY_HEADER};
use event_scan_common::{parse_ocr_response, ImagePayload, OcrResult, VisionCredentials};

use super::{response_text, window};

/// 画像を送信し、キャプションと読み取り結果を取得
///
/// # Arguments
/// * `credentials` - 検証済みの認証情報
/// * `payload` - 画像（Data URLからデコード済み）
pub async fn recognize_text(
    credentials: &VisionCredentials,
    payload: &ImagePayload,
) -> Result<OcrResult, JsValue> {
    let body = js_sys::Uint8Array::from(payload.bytes.as_slice());

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&credentials.analyze_url(), &opts)?;
    request.headers().set(SUBSCRIPTION_KEY_HEADER, credentials.key())?;
    request.headers().set("Content-Type", CONTENT_TYPE)?;

    let resp_value = JsFuture::from(window()?.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let text = response_text(&resp).await?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("OCR API error: {} {}", resp.status(), text)));
    }

    parse_ocr_response(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}
