//! ブラウザAPIラッパー
//!
//! ファイル読み込み、クリップボード、ダウンロード、新規タブ。
//! 失敗は `Result<_, String>` で返し、呼び出し側がトースト/コンソールに出す。

use gloo::file::{futures::read_as_bytes, Blob, ObjectUrl};
use image_terms_common::{FileMeta, ImageHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, HtmlAnchorElement};

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

/// File → 検証用メタデータ
pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime_type: file.type_(),
        size: file.size() as u64,
    }
}

/// FileListを順序どおりVecに
pub fn files_of(list: &FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// ファイルを読み込み `data:` URLにする
pub async fn read_image(file: &web_sys::File) -> Result<ImageHandle, String> {
    let mime_type = file.type_();
    let file = gloo::file::File::from(file.clone());
    let bytes = read_as_bytes(&file)
        .await
        .map_err(|e| format!("読み込み失敗: {}", e))?;
    Ok(ImageHandle::from_bytes(&mime_type, &bytes))
}

/// クリップボードにテキストを書き込む
pub async fn copy_text(text: &str) -> Result<(), String> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ()).map_err(js_error)
}

/// テキストファイルとしてダウンロード
///
/// オブジェクトURLはこの関数を抜けるときに破棄される。
pub fn download_text(content: &str, file_name: &str) -> Result<(), String> {
    let blob = Blob::new_with_options(content, Some("text/plain"));
    let url = ObjectUrl::from(blob);

    let document = window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())?;
    let body = document.body().ok_or_else(|| "body unavailable".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "anchor element unavailable".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    Ok(())
}

/// 新しいタブでURLを開く
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(js_error)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(content: &str, name: &str, mime_type: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = FilePropertyBag::new();
        options.set_type(mime_type);
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
            .expect("File生成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_file_meta_reads_type_and_size() {
        let file = make_file("abcd", "note.txt", "text/plain");
        let meta = file_meta(&file);

        assert_eq!(meta.name, "note.txt");
        assert_eq!(meta.mime_type, "text/plain");
        assert_eq!(meta.size, 4);
    }

    #[wasm_bindgen_test]
    async fn wasm_read_image_builds_data_url() {
        let file = make_file("abc", "pixel.png", "image/png");
        let handle = read_image(&file).await.expect("読み込み失敗");

        assert_eq!(handle.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(handle.mime_type(), "image/png");
    }

    #[wasm_bindgen_test]
    fn wasm_download_text_does_not_fail() {
        assert!(download_text("Image Analysis Results", "test.txt").is_ok());
    }
}
