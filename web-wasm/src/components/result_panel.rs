//! 解析結果パネル
//!
//! 解析中はビジー表示のみ。結果があれば説明・信頼度・カテゴリ・検索語と、
//! コピー/ダウンロード/外部検索ボタンを表示する。

use gloo::console;
use image_terms_common::export::{clipboard_text, external_search_url, format_text, EXPORT_FILE_NAME};
use image_terms_common::{AnalysisResult, Notice, SearchTarget, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::confidence_bar::ConfidenceBar;
use crate::components::toast::ToastQueue;

#[component]
pub fn ResultPanel(
    session: RwSignal<Session>,
    target: SearchTarget,
    toasts: ToastQueue,
) -> impl IntoView {
    let target = StoredValue::new(target);
    let result = Memo::new(move |_| session.with(|s| s.result().cloned()));
    let is_busy = move || session.with(|s| s.is_busy());

    let on_copy = move |text: String| {
        spawn_local(async move {
            match browser::copy_text(&text).await {
                Ok(()) => toasts.push(Notice::copied()),
                Err(e) => {
                    console::warn!(format!("clipboard write failed: {}", e));
                    toasts.push(Notice::destructive("Copy failed", e));
                }
            }
        });
    };

    let on_download = move |_: ()| {
        let Some(result) = result.get_untracked() else {
            return;
        };
        match browser::download_text(&format_text(&result), EXPORT_FILE_NAME) {
            Ok(()) => toasts.push(Notice::download_started()),
            Err(e) => {
                console::error!(format!("download failed: {}", e));
                toasts.push(Notice::destructive("Download failed", e));
            }
        }
    };

    let on_external_search = move |_: ()| {
        let Some(result) = result.get_untracked() else {
            return;
        };
        let Some(url) = target.with_value(|t| external_search_url(t, &result)) else {
            return;
        };
        match browser::open_in_new_tab(&url) {
            Ok(()) => toasts.push(target.with_value(|t| Notice::searching_on(&t.label))),
            Err(e) => {
                console::error!(format!("could not open {}: {}", url, e));
                toasts.push(Notice::destructive("Could not open search", e));
            }
        }
    };

    view! {
        <Show
            when=is_busy
            fallback=move || {
                move || result.get().map(|r| view! {
                    <ResultCard
                        result=r
                        search_label=target.with_value(|t| t.label.clone())
                        on_copy=on_copy
                        on_download=on_download
                        on_external_search=on_external_search
                    />
                })
            }
        >
            <div class="card busy">
                <div class="spinner" />
                <h3>"Analyzing Image"</h3>
                <p class="text-muted">
                    "Our AI is processing your image to generate relevant search terms..."
                </p>
            </div>
        </Show>
    }
}

#[component]
fn ResultCard<FC, FD, FS>(
    result: AnalysisResult,
    search_label: String,
    on_copy: FC,
    on_download: FD,
    on_external_search: FS,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let all_terms = clipboard_text(&result);

    view! {
        <div class="card result-card">
            <div class="card-header">
                <h3>"Analysis Results"</h3>
                <div class="result-actions">
                    <button
                        class="btn btn-secondary btn-small"
                        on:click={
                            let on_copy = on_copy.clone();
                            move |_| on_copy(all_terms.clone())
                        }
                    >
                        "Copy"
                    </button>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| on_download(())
                    >
                        "Download"
                    </button>
                    <button
                        class="btn btn-primary btn-small"
                        on:click=move |_| on_external_search(())
                    >
                        {format!("Search on {}", search_label)}
                    </button>
                </div>
            </div>

            <div class="result-section">
                <h4>"Description"</h4>
                <p class="text-muted">{result.description.clone()}</p>
            </div>

            <div class="result-section">
                <h4>"Confidence Score"</h4>
                <ConfidenceBar confidence=result.confidence />
            </div>

            <div class="result-section">
                <h4>"Detected Categories"</h4>
                <div class="badges">
                    {result.categories.iter().map(|category| view! {
                        <span class="badge badge-secondary">{category.clone()}</span>
                    }).collect_view()}
                </div>
            </div>

            <div class="result-section">
                <h4>"Generated Search Terms"</h4>
                <div class="badges">
                    {result.search_terms.iter().map(|term| {
                        let on_copy = on_copy.clone();
                        let term = term.clone();
                        let label = term.clone();
                        view! {
                            <span
                                class="badge badge-outline clickable"
                                on:click=move |_| on_copy(term.clone())
                            >
                                {label}
                            </span>
                        }
                    }).collect_view()}
                </div>
                <p class="text-muted small">"Click on any term to copy it individually"</p>
            </div>
        </div>
    }
}
