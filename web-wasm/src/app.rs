//! メインアプリケーションコンポーネント

use gloo::console;
use image_terms_common::{validate_upload, AppConfig, CategoryStore, MockAnalyzer, Notice, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analysis::run_image_analysis;
use crate::browser;
use crate::components::{
    category_panel::CategoryPanel,
    header::Header,
    result_panel::ResultPanel,
    search_bar::SearchBar,
    toast::{ToastQueue, Toaster},
    upload_area::UploadArea,
};

/// 埋め込み設定（シードカテゴリ・外部検索先・待ち時間）
const APP_CONFIG_JSON: &str = include_str!("../app-config.json");

/// 表示中のタブ
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analyzer,
    Categories,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Analyzer => "Image Analyzer",
            Tab::Categories => "Manage Categories",
        }
    }
}

/// 設定読み込み（失敗時はデフォルト）
pub fn load_config(json: &str) -> AppConfig {
    match AppConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("app-config.json ignored: {}", e));
            AppConfig::default()
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = load_config(APP_CONFIG_JSON);
    let analyzer = MockAnalyzer::from_millis(config.analysis_delay_ms);
    let max_upload_bytes = config.max_upload_bytes;
    let search_target = StoredValue::new(config.search_target.clone());

    // アプリケーション状態
    let (tab, set_tab) = signal(Tab::Analyzer);
    let session = RwSignal::new(Session::new());
    let categories = RwSignal::new(CategoryStore::from_seeds(&config.seed_categories));
    let toasts = ToastQueue::new();

    let image_src = Memo::new(move |_| {
        session.with(|s| s.image().map(|image| image.as_str().to_string()))
    });
    let has_content = move || session.with(|s| s.image().is_some() || s.result().is_some() || s.is_busy());

    // アップロードハンドラ
    let on_file = move |file: web_sys::File| {
        let meta = browser::file_meta(&file);
        if let Err(e) = validate_upload(&meta, max_upload_bytes) {
            console::warn!(format!("upload rejected: {} ({})", meta.name, e));
            toasts.push(Notice::from_error(&e));
            return;
        }

        let Some(upload) = session.try_update(|s| s.begin_upload()) else {
            return;
        };
        console::log!(format!("upload accepted: {} ({} bytes)", meta.name, meta.size));
        spawn_local(run_image_analysis(file, upload, session, analyzer, toasts));
    };

    // テキスト検索ハンドラ
    let on_search = move |query: String| {
        let applied = session
            .try_update(|s| s.search(&analyzer, &query))
            .unwrap_or(false);
        if applied {
            console::log!(format!("text search: {}", query.trim()));
        }
    };

    let on_reset = move |_: leptos::ev::MouseEvent| session.update(|s| s.reset());

    let tab_button = move |target: Tab| {
        view! {
            <button
                class="tab"
                class:active=move || tab.get() == target
                on:click=move |_| set_tab.set(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="card main-card">
                <div class="tabs">
                    {tab_button(Tab::Analyzer)}
                    {tab_button(Tab::Categories)}
                </div>

                <Show
                    when=move || tab.get() == Tab::Analyzer
                    fallback=move || view! { <CategoryPanel categories=categories toasts=toasts /> }
                >
                    <UploadArea max_upload_bytes=max_upload_bytes on_file=on_file />
                    <SearchBar on_search=on_search />

                    <Show when=has_content>
                        <div
                            class="analysis-grid"
                            data-phase=move || session.with(|s| s.phase().as_str())
                        >
                            {move || image_src.get().map(|src| view! {
                                <div class="image-preview">
                                    <h3>"Uploaded Image"</h3>
                                    <img src=src alt="Uploaded for analysis" />
                                </div>
                            })}
                            <ResultPanel
                                session=session
                                target=search_target.get_value()
                                toasts=toasts
                            />
                        </div>
                        <button class="btn btn-tertiary btn-small" on:click=on_reset>
                            "Start over"
                        </button>
                    </Show>
                </Show>
            </div>

            <Toaster toasts=toasts />
        </div>
    }
}
