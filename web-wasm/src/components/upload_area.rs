//! ドロップエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

/// 画像のドロップ / 選択
///
/// 新しいファイルを受け取ると `on_image(None)` で現在の画像を消し、
/// 読み込みに成功したら `on_image(Some(data_url))` を呼ぶ。
#[component]
pub fn UploadArea<F>(on_image: F) -> impl IntoView
where
    F: Fn(Option<String>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_image = on_image.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            on_image(None);
            if let Some(file) = file {
                read_file(file, on_image.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_image = on_image.clone();
        move |_| {
            if let Err(e) = open_file_picker(on_image.clone()) {
                gloo::console::error!("ファイル選択を開けません:", e);
            }
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragging" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=move || is_dragover.get()
                fallback=|| view! {
                    <div class="upload-icon">"📷"</div>
                    <p>"画像をドラッグ&ドロップ または クリックして選択"</p>
                    <p class="text-muted">"対応形式: JPEG, PNG, BMP, GIF, TIFF, WebP"</p>
                }
            >
                <div class="drop-message">"Drop your image here!"</div>
            </Show>
        </div>
    }
}

fn open_file_picker<F>(on_image: F) -> Result<(), JsValue>
where
    F: Fn(Option<String>) + 'static + Clone,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let input: web_sys::HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_accept("image/*");

    let input_clone = input.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let file = input_clone.files().and_then(|files| files.get(0));
        on_image(None);
        if let Some(file) = file {
            read_file(file, on_image.clone());
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
    Ok(())
}

/// ファイルをData URLとして非同期に読む（失敗時は何も通知しない）
fn read_file<F>(file: File, on_image: F)
where
    F: Fn(Option<String>) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_image(Some(data_url));
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
