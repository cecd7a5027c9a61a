//! 抽出サービス呼び出し

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use event_scan_common::{ExtractRequest, ExtractResponse};

use super::{response_text, window};

/// OCRテキストを送信し、ラベル付きテキストを受け取る
pub async fn extract_event(url: &str, ocr_text: &str) -> Result<String, JsValue> {
    let body = serde_json::to_string(&ExtractRequest {
        ocr_text: ocr_text.to_string(),
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let resp_value = JsFuture::from(window()?.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str("Failed to process event data"));
    }

    let text = response_text(&resp).await?;
    let response: ExtractResponse =
        serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(response.result)
}
