//! 画像プレビュー・OCR結果・イベント情報の表示

use leptos::prelude::*;
use event_scan_common::EventRecord;

#[component]
pub fn ImagePreview(image_src: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="image-preview">
            {move || image_src.get().map(|src| view! {
                <h3>"Captured Image:"</h3>
                <img src=src alt="Captured" />
            })}
            {move || if image_src.get().is_some() {
                view! { <div class="status-ok">"Image has been successfully added"</div> }.into_any()
            } else {
                view! { <div class="status-muted">"No image captured"</div> }.into_any()
            }}
        </div>
    }
}

/// OCR結果（失敗時はエラーメッセージ）
#[component]
pub fn OcrResultView(ocr_text: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || ocr_text.get().map(|text| view! {
            <div class="ocr-result">
                <h3>"Azure OCR Result:"</h3>
                <pre>{text}</pre>
            </div>
        })}
    }
}

#[component]
pub fn EventCard(event: Signal<Option<EventRecord>>) -> impl IntoView {
    view! {
        {move || event.get().map(|record| view! {
            <div class="event-card">
                <h3>"AI Agent Analysis:"</h3>
                <p>"Date: " {record.date}</p>
                <p>"Time: " {record.time}</p>
                {record.location.map(|location| view! { <p>"Location: " {location}</p> })}
                <p>"Description: " {record.description}</p>
            </div>
        })}
    }
}
