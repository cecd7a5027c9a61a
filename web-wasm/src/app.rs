//! メインアプリケーションコンポーネント

use leptos::html::Video;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::api;
use crate::camera;
use crate::components::{
    camera_panel::CameraPanel,
    header::Header,
    results::{EventCard, ImagePreview, OcrResultView},
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use event_scan_common::{
    parse_event_response, AnalysisSlots, AnalysisTicket, ImagePayload,
    VisionCredentials,
};

/// 抽出サービスの既定URL
pub const DEFAULT_EXTRACTOR_URL: &str = "http://127.0.0.1:5000/analyze";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画像・OCRテキスト・イベント情報の3スロット
    let slots = RwSignal::new(AnalysisSlots::new());
    let in_flight = RwSignal::new(0u32);

    // 認証情報はビルド時の環境変数を初期値にし、設定パネルで上書き可
    let vision_key = RwSignal::new(option_env!("EVENT_SCAN_VISION_KEY").unwrap_or_default().to_string());
    let vision_endpoint = RwSignal::new(option_env!("EVENT_SCAN_VISION_ENDPOINT").unwrap_or_default().to_string());
    let extractor_url = RwSignal::new(
        option_env!("EVENT_SCAN_EXTRACTOR_URL").unwrap_or(DEFAULT_EXTRACTOR_URL).to_string(),
    );

    let video_ref = NodeRef::<Video>::new();

    let image_src = Signal::derive(move || slots.with(|s| s.payload().map(|p| p.to_data_url())));
    let has_image = Signal::derive(move || slots.with(|s| s.payload().is_some()));
    let ocr_text = Signal::derive(move || slots.with(|s| s.ocr_text().map(str::to_string)));
    let event = Signal::derive(move || slots.with(|s| s.event().cloned()));
    let is_analyzing = Signal::derive(move || in_flight.get() > 0);

    let on_image = move |data_url: Option<String>| accept_image(slots, data_url);

    // カメラ起動ハンドラ
    let on_scan = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = camera::start_capture(&video).await {
                gloo::console::error!("Error accessing back camera:", e);
            }
        });
    };

    // 撮影ハンドラ
    let on_take_picture = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match camera::capture_frame(&video) {
            Ok(Some(data_url)) => accept_image(slots, Some(data_url)),
            Ok(None) => gloo::console::warn!("カメラ映像がまだありません"),
            Err(e) => gloo::console::error!("撮影エラー:", e),
        }
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let Some(payload) = slots.with_untracked(|s| s.payload().cloned()) else {
            return;
        };
        let mut ticket = None;
        slots.update(|s| ticket = Some(s.begin_analysis()));
        let Some(ticket) = ticket else {
            return;
        };

        let key = vision_key.get_untracked();
        let endpoint = vision_endpoint.get_untracked();
        let url = extractor_url.get_untracked();

        in_flight.update(|n| *n += 1);
        spawn_local(async move {
            if let Err(message) = analyze(slots, ticket, &payload, &key, &endpoint, &url).await {
                gloo::console::error!("Error processing image:", message.clone());
                slots.update(|s| {
                    s.apply_failure(ticket, message);
                });
            }
            in_flight.update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                vision_key=vision_key
                vision_endpoint=vision_endpoint
                extractor_url=extractor_url
            />

            <CameraPanel
                video_ref=video_ref
                is_analyzing=is_analyzing
                has_image=has_image
                on_scan=on_scan
                on_take_picture=on_take_picture
                on_analyze=on_analyze
            />

            <UploadArea on_image=on_image />

            <ImagePreview image_src=image_src />

            <div class="results">
                <OcrResultView ocr_text=ocr_text />
                <EventCard event=event />
            </div>
        </div>
    }
}

/// 画像スロットを更新（None はクリア、デコード失敗時は未設定のまま）
fn accept_image(slots: RwSignal<AnalysisSlots>, data_url: Option<String>) {
    let Some(data_url) = data_url else {
        slots.update(|s| s.clear_payload());
        return;
    };

    match ImagePayload::from_data_url(&data_url) {
        Ok(payload) => slots.update(|s| s.set_payload(payload)),
        Err(e) => gloo::console::warn!("画像を読み込めません:", e.to_string()),
    }
}

/// OCR → 抽出 → パース
///
/// 結果はチケットが最新のときだけスロットへ反映される。
async fn analyze(
    slots: RwSignal<AnalysisSlots>,
    ticket: AnalysisTicket,
    payload: &ImagePayload,
    key: &str,
    endpoint: &str,
    extractor_url: &str,
) -> Result<(), String> {
    let credentials =
        VisionCredentials::resolve(Some(key), Some(endpoint)).map_err(|e| e.to_string())?;

    let ocr = api::vision::recognize_text(&credentials, payload)
        .await
        .map_err(|e| api::error_message(&e))?;

    // 読み取り結果が無い、または新しい解析が始まっていれば終了
    let mut next = None;
    slots.update(|s| next = s.finish_ocr(ticket, &ocr));
    let Some(text) = next else {
        return Ok(());
    };

    let response = api::extractor::extract_event(extractor_url, &text)
        .await
        .map_err(|e| api::error_message(&e))?;

    let record = parse_event_response(&response);
    slots.update(|s| {
        s.apply_event(ticket, record);
    });
    Ok(())
}
