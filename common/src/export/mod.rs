//! Export core modules shared by the WASM front end.
//!
//! - text: ダウンロード用テキスト（`image-analysis-results.txt`）とクリップボード文字列
//! - link: 外部小売サイトの検索URL

pub mod text;
pub mod link;

pub use text::{clipboard_text, format_text, parse_text, ParsedExport, EXPORT_FILE_NAME};
pub use link::{encode_query_component, external_search_url};
