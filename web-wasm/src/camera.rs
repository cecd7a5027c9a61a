//! カメラ（背面カメラ）からの静止画取得

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints};

/// 撮影画像の形式
pub const CAPTURE_MIME_TYPE: &str = "image/png";

/// 背面カメラを要求し、video要素で再生開始
///
/// 失敗（権限拒否・カメラなし）は呼び出し元でログに出すだけでよい。
pub async fn start_capture(video: &HtmlVideoElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let devices = window.navigator().media_devices()?;

    // { video: { facingMode: { exact: "environment" } } }
    let facing_mode = js_sys::Object::new();
    js_sys::Reflect::set(&facing_mode, &"exact".into(), &"environment".into())?;
    let video_constraints = js_sys::Object::new();
    js_sys::Reflect::set(&video_constraints, &"facingMode".into(), &facing_mode)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints);

    let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
    let stream: MediaStream = stream.dyn_into()?;

    video.set_src_object(Some(&stream));
    // play() の完了は待たない
    let _ = video.play()?;
    Ok(())
}

/// 現在のフレームをPNGのData URLにする
///
/// 映像がまだ無い（幅0）場合は None。
pub fn capture_frame(video: &HtmlVideoElement) -> Result<Option<String>, JsValue> {
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Ok(None);
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    let Some(context) = canvas.get_context("2d")? else {
        return Ok(None);
    };
    let context: CanvasRenderingContext2d = context.dyn_into()?;
    context.draw_image_with_html_video_element_and_dw_and_dh(
        video,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;

    canvas.to_data_url_with_type(CAPTURE_MIME_TYPE).map(Some)
}
