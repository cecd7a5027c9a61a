//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    vision_key: RwSignal<String>,
    vision_endpoint: RwSignal<String>,
    extractor_url: RwSignal<String>,
) -> impl IntoView {
    view! {
        <details class="settings-panel">
            <summary>"設定"</summary>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="vision-key">"Azure Vision API Key"</label>
                    <input
                        type="password"
                        id="vision-key"
                        placeholder="API Keyを入力..."
                        prop:value=move || vision_key.get()
                        on:input=move |ev| {
                            vision_key.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="vision-endpoint">"Azure Vision エンドポイント"</label>
                    <input
                        type="text"
                        id="vision-endpoint"
                        placeholder="https://<resource>.cognitiveservices.azure.com"
                        prop:value=move || vision_endpoint.get()
                        on:input=move |ev| {
                            vision_endpoint.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="extractor-url">"抽出サービスURL"</label>
                    <input
                        type="text"
                        id="extractor-url"
                        prop:value=move || extractor_url.get()
                        on:input=move |ev| {
                            extractor_url.set(event_target_value(&ev));
                        }
                    />
                </div>
            </div>
        </details>
    }
}
