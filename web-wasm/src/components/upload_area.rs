//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択のどちらも `on_file` に集約する。
//! 複数ファイルが来ても先頭の1件だけ渡す。

use image_terms_common::{first_file, format_byte_limit};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, FileList, HtmlInputElement};

use crate::browser;

#[component]
pub fn UploadArea<F>(
    max_upload_bytes: u64,
    on_file: F,
) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_files = {
        let on_file = on_file.clone();
        move |files: FileList| {
            if let Some(file) = first_file(browser::files_of(&files)) {
                on_file(file);
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            handle_files(files);
        }
        // 同じファイルを続けて選べるように
        input.set_value("");
    };

    let max_size = format_byte_limit(max_upload_bytes);

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">
                {move || if is_dragover.get() { "🖼️" } else { "📤" }}
            </div>
            <h3>
                {move || if is_dragover.get() { "Drop your image here" } else { "Upload an image to analyze" }}
            </h3>
            <p class="text-muted">"Drag and drop an image file, or click to browse"</p>
            <input
                type="file"
                accept="image/*"
                id="file-upload"
                class="hidden"
                on:change=on_change
            />
            <label for="file-upload" class="btn btn-secondary">"Choose File"</label>
            <p class="text-muted small">
                {format!("Supported formats: JPG, PNG, GIF, WebP (Max: {})", max_size)}
            </p>
        </div>
    }
}
