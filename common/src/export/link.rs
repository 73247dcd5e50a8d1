//! 外部検索リンク

use urlencoding::encode;

use crate::config::SearchTarget;
use crate::types::AnalysisResult;

/// クエリ値のパーセントエンコード
///
/// 英数字と `-_.~` 以外はUTF-8バイト単位で `%XX` にする（空白は `%20`）。
pub fn encode_query_component(value: &str) -> String {
    encode(value).into_owned()
}

/// 検索語を空白で連結した外部検索URL。検索語がなければ `None`
pub fn external_search_url(target: &SearchTarget, result: &AnalysisResult) -> Option<String> {
    if result.search_terms.is_empty() {
        return None;
    }
    let joined = result.search_terms.join(" ");
    let separator = if target.base_url.contains('?') { '&' } else { '?' };

    Some(format!(
        "{}{}{}={}",
        target.base_url,
        separator,
        target.query_param,
        encode_query_component(&joined)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("abc-XYZ_0.9"), "abc-XYZ_0.9");
        assert_eq!(encode_query_component("a b"), "a%20b");
        assert_eq!(encode_query_component("&=?/#"), "%26%3D%3F%2F%23");
        assert_eq!(encode_query_component("it's (ok)!"), "it%27s%20%28ok%29%21");
        assert_eq!(encode_query_component("a~b"), "a~b");
        assert_eq!(encode_query_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_external_search_url() {
        let result = AnalysisResult {
            search_terms: vec!["glass facade".to_string(), "city skyline".to_string()],
            ..Default::default()
        };

        let url = external_search_url(&SearchTarget::default(), &result).expect("URLなし");
        assert_eq!(
            url,
            "https://www.arket.com/en-dk/search?search=glass%20facade%20city%20skyline"
        );
    }

    #[test]
    fn test_external_search_url_existing_query() {
        let target = SearchTarget {
            label: "Shop".to_string(),
            base_url: "https://shop.example/find?lang=en".to_string(),
            query_param: "q".to_string(),
        };
        let result = AnalysisResult {
            search_terms: vec!["coat".to_string()],
            ..Default::default()
        };

        assert_eq!(
            external_search_url(&target, &result).as_deref(),
            Some("https://shop.example/find?lang=en&q=coat")
        );
    }

    #[test]
    fn test_external_search_url_no_terms() {
        assert!(external_search_url(&SearchTarget::default(), &AnalysisResult::default()).is_none());
    }
}
