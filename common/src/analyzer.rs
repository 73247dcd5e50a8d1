//! 疑似解析（Core/WASM共通）
//!
//! 本物の画像認識は行わない。画像解析は一定時間待ってから固定の結果を返し、
//! テキスト検索は入力語から検索語を決定的に組み立てる。

use crate::types::AnalysisResult;
use crate::upload::ImageHandle;
use std::future::Future;
use std::time::Duration;

/// テキスト検索結果のカテゴリ
pub const SEARCH_RESULTS_CATEGORY: &str = "Search Results";

/// テキスト検索結果の信頼度
pub const SEARCH_CONFIDENCE: f32 = 0.95;

/// 検索語に付ける派生サフィックス
const SEARCH_SUFFIXES: &[&str] = &["style", "ideas", "inspiration", "trends"];

/// 解析結果ビルダー
///
/// 画像解析とテキスト検索の両方から使う。信頼度は0.0..=1.0に丸める。
pub fn build_result<T, C>(
    search_terms: T,
    confidence: f32,
    categories: C,
    description: impl Into<String>,
) -> AnalysisResult
where
    T: IntoIterator,
    T::Item: Into<String>,
    C: IntoIterator,
    C::Item: Into<String>,
{
    let confidence = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };

    AnalysisResult {
        search_terms: search_terms.into_iter().map(Into::into).collect(),
        confidence,
        categories: categories.into_iter().map(Into::into).collect(),
        description: description.into(),
    }
}

/// 画像解析の固定結果
pub fn mock_image_result() -> AnalysisResult {
    build_result(
        [
            "modern architecture",
            "urban design",
            "contemporary building",
            "glass facade",
            "city skyline",
            "structural engineering",
        ],
        0.92,
        ["Architecture", "Urban Planning", "Design"],
        "This image appears to show modern architectural elements with clean lines \
         and contemporary design features.",
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(delay_ms: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(delay_ms)))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 画像を「解析」する
    ///
    /// `sleep` に待機用のFutureを渡す（ブラウザではタイマー、テストでは即時完了）。
    /// 画像の中身は見ない。
    pub async fn analyze<S, F>(&self, _image: &ImageHandle, sleep: S) -> AnalysisResult
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        sleep(self.delay).await;
        mock_image_result()
    }

    /// テキスト検索
    ///
    /// 空白のみのクエリは `None`。
    pub fn search(&self, query: &str) -> Option<AnalysisResult> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let terms = std::iter::once(query.to_string())
            .chain(SEARCH_SUFFIXES.iter().map(|suffix| format!("{} {}", query, suffix)));

        Some(build_result(
            terms,
            SEARCH_CONFIDENCE,
            [SEARCH_RESULTS_CATEGORY],
            format!("Search results for \"{}\"", query),
        ))
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::from_millis(crate::config::DEFAULT_ANALYSIS_DELAY_MS)
    }
}
