//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Image Analyzer"</h1>
            <p class="text-muted">
                "Upload an image and get intelligent search terms based on our curated categories. "
                "Perfect for content creators, marketers, and researchers."
            </p>
        </header>
    }
}
