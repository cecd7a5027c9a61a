//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Event Scan - イベント情報読み取り"</h1>
        </header>
    }
}
