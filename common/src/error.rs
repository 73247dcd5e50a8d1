//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayはそのままトースト通知の本文に使われる。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("File too large: {size} bytes (max {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// 実バックエンド導入時の拡張ポイント（モックは返さない）
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
