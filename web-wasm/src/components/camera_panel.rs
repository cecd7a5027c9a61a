//! カメラと操作ボタン

use leptos::html::Video;
use leptos::prelude::*;

#[component]
pub fn CameraPanel<FS, FT, FA>(
    video_ref: NodeRef<Video>,
    is_analyzing: Signal<bool>,
    has_image: Signal<bool>,
    on_scan: FS,
    on_take_picture: FT,
    on_analyze: FA,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
    FA: Fn(()) + 'static + Clone,
{
    view! {
        <div class="camera-panel">
            <div class="video-container">
                <video node_ref=video_ref class="video" playsinline=true muted=true />
            </div>

            <div class="camera-buttons">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_scan = on_scan.clone();
                        move |_| on_scan(())
                    }
                >
                    "Scan"
                </button>

                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_take_picture = on_take_picture.clone();
                        move |_| on_take_picture(())
                    }
                >
                    "Take Picture"
                </button>

                <button
                    class="btn btn-primary"
                    disabled=move || !has_image.get()
                    on:click={
                        let on_analyze = on_analyze.clone();
                        move |_| on_analyze(())
                    }
                >
                    {move || if is_analyzing.get() { "Analyzing..." } else { "Analyze Image" }}
                </button>
            </div>
        </div>
    }
}
