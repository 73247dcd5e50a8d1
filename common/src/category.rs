//! カテゴリストア
//!
//! 順序付きのカテゴリ一覧を保持し、追加・編集・削除を行う。
//! 一意なのはidのみ（名前の重複は許可）。

use crate::error::{Error, Result};
use crate::types::Category;

/// カンマ区切りのキーワードを分割
///
/// 各トークンをtrimし、空のトークンは捨てる。順序は入力順。
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// 名前とキーワードを検証して正規化
fn validate_fields(name: &str, keywords_raw: &str) -> Result<(String, Vec<String>)> {
    let name = name.trim();
    if name.is_empty() || keywords_raw.trim().is_empty() {
        return Err(Error::Validation(
            "Please provide both category name and keywords".into(),
        ));
    }

    let keywords = split_keywords(keywords_raw);
    if keywords.is_empty() {
        return Err(Error::Validation(
            "Please provide at least one non-empty keyword".into(),
        ));
    }

    Ok((name.to_string(), keywords))
}

#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seeds(seeds: &[Category]) -> Self {
        Self {
            categories: seeds.to_vec(),
        }
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// カテゴリを末尾に追加
    ///
    /// idは `timestamp_ms` の10進表記。同じidが既にあれば一意になるまで進める。
    ///
    /// # Errors
    /// * `Error::Validation` - 名前またはキーワードが空
    pub fn add(&mut self, name: &str, keywords_raw: &str, timestamp_ms: u64) -> Result<&Category> {
        let (name, keywords) = validate_fields(name, keywords_raw)?;
        let id = self.fresh_id(timestamp_ms);

        self.categories.push(Category { id, name, keywords });
        let last = self.categories.len() - 1;
        Ok(&self.categories[last])
    }

    /// 指定idのカテゴリを置き換える（位置は維持）
    ///
    /// # Errors
    /// * `Error::Validation` - 名前またはキーワードが空
    /// * `Error::CategoryNotFound` - idが存在しない
    pub fn edit(&mut self, id: &str, name: &str, keywords_raw: &str) -> Result<&Category> {
        let (name, keywords) = validate_fields(name, keywords_raw)?;
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::CategoryNotFound(id.to_string()))?;

        let entry = &mut self.categories[index];
        entry.name = name;
        entry.keywords = keywords;
        Ok(&self.categories[index])
    }

    /// 指定idのカテゴリを削除し、削除したレコードを返す
    pub fn delete(&mut self, id: &str) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }

    fn fresh_id(&self, timestamp_ms: u64) -> String {
        let mut candidate = timestamp_ms;
        loop {
            let id = candidate.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate = candidate.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_seed_categories;

    fn seeded() -> CategoryStore {
        CategoryStore::from_seeds(&default_seed_categories())
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(
            split_keywords(" sports, fitness ,athletic "),
            vec!["sports", "fitness", "athletic"]
        );
        assert_eq!(split_keywords("a,,b, ,"), vec!["a", "b"]);
        assert!(split_keywords(",,,").is_empty());
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut store = seeded();
        let added = store
            .add("  Sports  ", "sports, fitness, athletic", 1_700_000_000_000)
            .expect("追加失敗")
            .clone();

        assert_eq!(store.len(), 7);
        assert_eq!(added.id, "1700000000000");
        assert_eq!(added.name, "Sports");
        assert_eq!(store.list().last(), Some(&added));
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut store = seeded();

        assert!(matches!(store.add("", "x", 1), Err(Error::Validation(_))));
        assert!(matches!(store.add("x", "", 1), Err(Error::Validation(_))));
        assert!(matches!(store.add("   ", "x", 1), Err(Error::Validation(_))));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_rejects_comma_only_keywords() {
        let mut store = seeded();
        let result = store.add("Empty", " , ,, ", 1);

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_same_timestamp_gets_unique_id() {
        let mut store = CategoryStore::new();
        let first = store.add("A", "a", 42).expect("追加失敗").id.clone();
        let second = store.add("B", "b", 42).expect("追加失敗").id.clone();

        assert_eq!(first, "42");
        assert_eq!(second, "43");
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let mut store = CategoryStore::new();
        store.add("Same", "a", 1).expect("追加失敗");
        store.add("Same", "b", 2).expect("追加失敗");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_edit_preserves_position() {
        let mut store = seeded();
        let before = store.list().to_vec();

        let edited = store
            .edit("food", "Food", "pasta, pizza")
            .expect("編集失敗")
            .clone();

        assert_eq!(edited.id, "food");
        assert_eq!(edited.keywords, vec!["pasta", "pizza"]);
        assert_eq!(store.len(), before.len());
        assert_eq!(store.list()[2], edited);
        for (i, category) in store.list().iter().enumerate() {
            if i != 2 {
                assert_eq!(category, &before[i]);
            }
        }
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut store = seeded();
        let result = store.edit("missing", "Name", "kw");
        assert!(matches!(result, Err(Error::CategoryNotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_edit_rejects_empty_name() {
        let mut store = seeded();
        assert!(matches!(store.edit("food", " ", "kw"), Err(Error::Validation(_))));
        assert_eq!(store.get("food").map(|c| c.name.as_str()), Some("Food & Dining"));
    }

    #[test]
    fn test_delete() {
        let mut store = seeded();
        let removed = store.delete("technology").expect("削除対象がない");

        assert_eq!(removed.name, "Technology");
        assert_eq!(store.len(), 5);
        assert!(store.get("technology").is_none());
        assert_eq!(store.list()[1].id, "food");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = seeded();
        assert!(store.delete("missing").is_none());
        assert_eq!(store.len(), 6);
    }
}
