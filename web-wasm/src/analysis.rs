//! 疑似解析タスク
//!
//! ファイル読み込み → タイマー待ち → 固定結果。
//! 各段階の完了はセッションのチケットで照合し、古いタスクの結果は捨てる。

use gloo::console;
use gloo::timers::future::TimeoutFuture;
use image_terms_common::{MockAnalyzer, Notice, Session, Ticket};
use leptos::prelude::*;

use crate::browser;
use crate::components::toast::ToastQueue;

fn millis(delay: std::time::Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// アップロード済みファイルを読み込んで解析する
pub async fn run_image_analysis(
    file: web_sys::File,
    upload: Ticket,
    session: RwSignal<Session>,
    analyzer: MockAnalyzer,
    toasts: ToastQueue,
) {
    let handle = match browser::read_image(&file).await {
        Ok(handle) => handle,
        Err(e) => {
            console::error!(format!("upload failed: {}", e));
            session.update(|s| {
                s.fail_analysis(upload);
            });
            toasts.push(Notice::destructive("Upload failed", e));
            return;
        }
    };

    let ticket = session
        .try_update(|s| s.image_ready(upload, handle.clone()))
        .flatten();
    let Some(ticket) = ticket else {
        console::log!(format!("upload of {} superseded", file.name()));
        return;
    };
    toasts.push(Notice::image_uploaded());

    console::log!(format!("analyzing {} ({})", file.name(), handle.mime_type()));
    let result = analyzer
        .analyze(&handle, |delay| TimeoutFuture::new(millis(delay)))
        .await;

    let applied = session
        .try_update(|s| s.finish_analysis(ticket, result))
        .unwrap_or(false);
    if applied {
        console::log!("analysis finished");
    } else {
        console::log!("stale analysis result discarded");
    }
}
