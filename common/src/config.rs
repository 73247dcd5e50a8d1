//! アプリ設定
//!
//! シードカテゴリと外部検索先はコードに埋め込まず設定として扱う。
//! Web側は `app-config.json` を読み込み、壊れていればデフォルトにフォールバックする。

use crate::error::{Error, Result};
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// アップロード上限（10MiB）
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// 疑似解析の待ち時間
pub const DEFAULT_ANALYSIS_DELAY_MS: u32 = 2000;

/// 外部検索先（小売サイトの検索エンドポイント）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchTarget {
    /// ボタン表示名（"Search on {label}"）
    pub label: String,
    pub base_url: String,
    pub query_param: String,
}

impl Default for SearchTarget {
    fn default() -> Self {
        Self {
            label: "Arket".into(),
            base_url: "https://www.arket.com/en-dk/search".into(),
            query_param: "search".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub analysis_delay_ms: u32,
    pub max_upload_bytes: u64,
    pub search_target: SearchTarget,
    pub seed_categories: Vec<Category>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            search_target: SearchTarget::default(),
            seed_categories: default_seed_categories(),
        }
    }
}

impl AppConfig {
    /// JSONから読み込み（欠けた項目はデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(Error::Config("maxUploadBytes must be greater than 0".into()));
        }
        if self.analysis_delay_ms == 0 {
            return Err(Error::Config("analysisDelayMs must be greater than 0".into()));
        }
        if self.search_target.label.trim().is_empty() {
            return Err(Error::Config("searchTarget.label is empty".into()));
        }
        if self.search_target.base_url.trim().is_empty() {
            return Err(Error::Config("searchTarget.baseUrl is empty".into()));
        }
        if !self.search_target.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "searchTarget.baseUrl must be https: {}",
                self.search_target.base_url
            )));
        }
        if self.search_target.query_param.trim().is_empty() {
            return Err(Error::Config("searchTarget.queryParam is empty".into()));
        }

        let mut seen = HashSet::new();
        for seed in &self.seed_categories {
            if seed.id.trim().is_empty() {
                return Err(Error::Config(format!("seed category \"{}\" has no id", seed.name)));
            }
            if !seen.insert(seed.id.as_str()) {
                return Err(Error::Config(format!("duplicate seed category id: {}", seed.id)));
            }
            if seed.name.trim().is_empty() || seed.keywords.is_empty() {
                return Err(Error::Config(format!(
                    "seed category {} needs a name and keywords",
                    seed.id
                )));
            }
        }
        Ok(())
    }
}

fn seed(id: &str, name: &str, keywords: &[&str]) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// 初期カテゴリ（6件）
pub fn default_seed_categories() -> Vec<Category> {
    vec![
        seed("nature", "Nature & Landscape", &[
            "landscape", "mountain", "forest", "ocean", "sunset",
            "wildlife", "trees", "flowers", "scenic", "natural",
        ]),
        seed("technology", "Technology", &[
            "computer", "smartphone", "software", "digital", "innovation",
            "tech", "device", "electronic", "modern", "gadget",
        ]),
        seed("food", "Food & Dining", &[
            "restaurant", "cuisine", "cooking", "recipe", "delicious",
            "meal", "dining", "ingredients", "chef", "gourmet",
        ]),
        seed("fashion", "Fashion & Style", &[
            "clothing", "style", "fashion", "trendy", "outfit",
            "designer", "apparel", "accessories", "wardrobe", "chic",
        ]),
        seed("business", "Business & Work", &[
            "office", "professional", "meeting", "corporate", "business",
            "workspace", "team", "productivity", "strategy", "success",
        ]),
        seed("travel", "Travel & Adventure", &[
            "travel", "vacation", "destination", "adventure", "tourism",
            "journey", "exploration", "culture", "landmark", "exotic",
        ]),
    ]
}
