//! 外部サービス呼び出し（fetch）

pub mod extractor;
pub mod vision;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// JS側のエラーを表示用文字列にする
pub fn error_message(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", error))
}

/// レスポンス本文を文字列で取得
async fn response_text(resp: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("レスポンス本文を読めません"))
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))
}
