//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Image Insight"</h1>
            <p class="text-muted">"Upload an image and let AI describe it"</p>
        </header>
    }
}
