//! テキスト出力
//!
//! レイアウト:
//! ```text
//! Image Analysis Results
//!
//! Description: ...
//!
//! Search Terms:
//! term1
//! term2
//!
//! Categories:
//! cat1
//!
//! Confidence: 92.0%
//! ```

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// ダウンロード時のファイル名
pub const EXPORT_FILE_NAME: &str = "image-analysis-results.txt";

const HEADER: &str = "Image Analysis Results";
const DESCRIPTION_LABEL: &str = "\n\nDescription: ";
const TERMS_LABEL: &str = "\n\nSearch Terms:\n";
const CATEGORIES_LABEL: &str = "\n\nCategories:\n";
const CONFIDENCE_LABEL: &str = "\n\nConfidence: ";

/// 解析結果をテキストに整形
pub fn format_text(result: &AnalysisResult) -> String {
    format!(
        "{HEADER}{DESCRIPTION_LABEL}{}{TERMS_LABEL}{}{CATEGORIES_LABEL}{}{CONFIDENCE_LABEL}{}",
        result.description,
        result.search_terms.join("\n"),
        result.categories.join("\n"),
        result.confidence_percent(),
    )
}

/// クリップボード用（検索語をカンマ区切り）
pub fn clipboard_text(result: &AnalysisResult) -> String {
    result.search_terms.join(", ")
}

/// テキストから読み戻した内容
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExport {
    pub description: String,
    pub search_terms: Vec<String>,
    pub categories: Vec<String>,
    /// 出力時の小数1桁のパーセント値
    pub confidence_percent: f32,
}

fn lines(block: &str) -> Vec<String> {
    if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').map(String::from).collect()
    }
}

/// `format_text` の出力を読み戻す
///
/// # Errors
/// * `Error::Parse` - 見出しが欠けている、または信頼度が数値でない
pub fn parse_text(text: &str) -> Result<ParsedExport> {
    let body = text
        .strip_prefix(HEADER)
        .and_then(|rest| rest.strip_prefix(DESCRIPTION_LABEL))
        .ok_or_else(|| Error::Parse("missing header or description".into()))?;

    let (description, rest) = body
        .split_once(TERMS_LABEL)
        .ok_or_else(|| Error::Parse("missing search terms section".into()))?;

    let (middle, confidence) = rest
        .rsplit_once(CONFIDENCE_LABEL)
        .ok_or_else(|| Error::Parse("missing confidence".into()))?;

    let (terms, categories) = if let Some(categories) = middle.strip_prefix(CATEGORIES_LABEL) {
        ("", categories)
    } else {
        middle
            .split_once(CATEGORIES_LABEL)
            .ok_or_else(|| Error::Parse("missing categories section".into()))?
    };

    let confidence_percent = confidence
        .trim_end()
        .strip_suffix('%')
        .and_then(|value| value.parse::<f32>().ok())
        .ok_or_else(|| Error::Parse(format!("invalid confidence: {}", confidence)))?;

    Ok(ParsedExport {
        description: description.to_string(),
        search_terms: lines(terms),
        categories: lines(categories),
        confidence_percent,
    })
}
