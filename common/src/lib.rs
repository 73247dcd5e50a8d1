//! Image Terms Common Library
//!
//! Web(WASM)フロントエンドから使うプラットフォーム非依存の型とロジック

pub mod types;
pub mod error;
pub mod config;
pub mod category;
pub mod upload;
pub mod analyzer;
pub mod session;
pub mod export;
pub mod notice;

pub use types::{AnalysisResult, Category};
pub use error::{Error, Result};
pub use config::{AppConfig, SearchTarget, MAX_UPLOAD_BYTES};
pub use category::{split_keywords, CategoryStore};
pub use upload::{first_file, format_byte_limit, validate_upload, FileMeta, ImageHandle};
pub use analyzer::{build_result, mock_image_result, MockAnalyzer};
pub use session::{Phase, ResultSource, Session, Ticket};
pub use notice::{Notice, NoticeKind};
