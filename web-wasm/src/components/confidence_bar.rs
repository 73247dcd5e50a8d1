//! 信頼度バーコンポーネント

use leptos::prelude::*;

/// バーの幅（confidence * 100%）
pub fn fill_style(confidence: f32) -> String {
    format!("width: {:.1}%", confidence * 100.0)
}

#[component]
pub fn ConfidenceBar(confidence: f32) -> impl IntoView {
    view! {
        <div class="confidence-container">
            <div class="confidence-bar">
                <div class="confidence-fill" style=fill_style(confidence) />
            </div>
            <span class="confidence-text">
                {format!("{:.1}%", confidence * 100.0)}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style() {
        assert_eq!(fill_style(0.92), "width: 92.0%");
        assert_eq!(fill_style(0.0), "width: 0.0%");
        assert_eq!(fill_style(1.0), "width: 100.0%");
    }
}
