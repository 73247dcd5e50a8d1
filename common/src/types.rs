//! 共有データ型
//!
//! CoreとWeb(WASM)で共有される型:
//! - Category: キーワードをまとめた名前付きカテゴリ
//! - AnalysisResult: 解析（またはテキスト検索）の最終出力

use serde::{Deserialize, Serialize};

/// カテゴリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    /// ストア内で一意（生成後は不変）
    pub id: String,
    pub name: String,
    /// 入力順（カンマ区切りの順）
    pub keywords: Vec<String>,
}

impl Category {
    /// 編集フォーム用のキーワード文字列
    pub fn keywords_text(&self) -> String {
        self.keywords.join(", ")
    }
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub search_terms: Vec<String>,

    /// 0.0..=1.0
    pub confidence: f32,

    pub categories: Vec<String>,

    pub description: String,
}

impl AnalysisResult {
    /// パーセント表記（小数1桁）
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keywords_text() {
        let category = Category {
            id: "sports".to_string(),
            name: "Sports".to_string(),
            keywords: vec!["sports".to_string(), "fitness".to_string()],
        };
        assert_eq!(category.keywords_text(), "sports, fitness");
    }

    #[test]
    fn test_category_deserialize_missing_fields() {
        let json = r#"{"id": "minimal"}"#;

        let category: Category = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(category.id, "minimal");
        assert_eq!(category.name, "");
        assert!(category.keywords.is_empty());
    }

    #[test]
    fn test_analysis_result_serialize() {
        let result = AnalysisResult {
            search_terms: vec!["blazer".to_string()],
            confidence: 0.5,
            categories: vec!["Search Results".to_string()],
            description: "desc".to_string(),
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"searchTerms\":[\"blazer\"]"));
        assert!(json.contains("\"confidence\":0.5"));
        assert!(json.contains("\"categories\":[\"Search Results\"]"));
    }

    #[test]
    fn test_confidence_percent() {
        let result = AnalysisResult {
            confidence: 0.92,
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "92.0%");

        let zero = AnalysisResult::default();
        assert_eq!(zero.confidence_percent(), "0.0%");
    }
}
