//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};
use image_insight_common::Session;
use crate::file_reader::LoadedImage;

#[component]
pub fn UploadArea<F>(
    session: RwSignal<Session<LoadedImage>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static,
{
    // 1枚だけ受け付ける（中身の検証はブラウザのaccept指定のみ）
    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    let preview_url = move || {
        session.with(|s| s.image().map(|image| image.preview_url.clone()).unwrap_or_default())
    };

    view! {
        <div class="upload-area">
            <label for="image-upload">"Upload an image"</label>
            <input
                type="file"
                id="image-upload"
                accept="image/*"
                on:change=on_change
            />
            <Show when=move || session.with(|s| s.image().is_some())>
                <div class="preview">
                    <img src=preview_url alt="Uploaded Image" width="300" />
                    <p class="text-muted">
                        {move || session.with(|s| s.image().map(|image| image.name.clone()).unwrap_or_default())}
                    </p>
                </div>
            </Show>
        </div>
    }
}
