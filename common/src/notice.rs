//! ユーザー向け通知（トースト）の文言

use crate::error::Error;
use crate::types::Category;
use crate::upload::format_byte_limit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Destructive,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }

    /// エラーを通知に変換
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Validation(message) => Self::destructive("Validation Error", message.clone()),
            Error::InvalidFileType(_) => Self::destructive(
                "Invalid file type",
                "Please upload an image file (JPG, PNG, GIF, etc.)",
            ),
            Error::FileTooLarge { limit, .. } => Self::destructive(
                "File too large",
                format!("Please upload an image smaller than {}", format_byte_limit(*limit)),
            ),
            Error::AnalysisFailed(message) => Self::destructive("Analysis failed", message.clone()),
            other => Self::destructive("Error", other.to_string()),
        }
    }

    pub fn category_added(category: &Category) -> Self {
        Self::info(
            "Category Added",
            format!("\"{}\" has been added successfully", category.name),
        )
    }

    pub fn category_updated(category: &Category) -> Self {
        Self::info(
            "Category Updated",
            format!("\"{}\" has been updated successfully", category.name),
        )
    }

    pub fn category_deleted(category: &Category) -> Self {
        Self::info("Category Deleted", format!("\"{}\" has been removed", category.name))
    }

    pub fn image_uploaded() -> Self {
        Self::info("Image uploaded successfully", "Analyzing image content...")
    }

    pub fn copied() -> Self {
        Self::info("Copied to clipboard", "Search terms have been copied to your clipboard")
    }

    pub fn download_started() -> Self {
        Self::info("Download started", "Analysis results have been downloaded")
    }

    pub fn searching_on(label: &str) -> Self {
        Self::info(
            format!("Searching on {}", label),
            format!("Opening {} search in a new tab", label),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    #[test]
    fn test_from_error_file_too_large() {
        let notice = Notice::from_error(&Error::FileTooLarge {
            size: 11_000_000,
            limit: MAX_UPLOAD_BYTES,
        });
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(notice.title, "File too large");
        assert_eq!(notice.description, "Please upload an image smaller than 10MB");
    }

    #[test]
    fn test_from_error_file_too_large_small_limit() {
        let notice = Notice::from_error(&Error::FileTooLarge {
            size: 600 * 1024,
            limit: 512 * 1024,
        });
        assert_eq!(notice.description, "Please upload an image smaller than 512KB");
    }

    #[test]
    fn test_from_error_validation() {
        let notice = Notice::from_error(&Error::Validation("name required".to_string()));
        assert_eq!(notice.title, "Validation Error");
        assert_eq!(notice.description, "name required");
    }

    #[test]
    fn test_from_error_other() {
        let notice = Notice::from_error(&Error::CategoryNotFound("x".to_string()));
        assert_eq!(notice.title, "Error");
        assert!(notice.description.contains("x"));
    }

    #[test]
    fn test_category_deleted() {
        let category = Category {
            id: "1".to_string(),
            name: "Sports".to_string(),
            keywords: vec![],
        };
        let notice = Notice::category_deleted(&category);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.description, "\"Sports\" has been removed");
    }

    #[test]
    fn test_searching_on() {
        let notice = Notice::searching_on("Arket");
        assert_eq!(notice.title, "Searching on Arket");
        assert_eq!(notice.description, "Opening Arket search in a new tab");
    }
}
