//! アップロード受付
//!
//! ファイルのMIMEタイプとサイズを検証し、埋め込み可能な `data:` URLに変換する。
//! 実ファイルの読み込みはWeb側（FileReader相当）が行う。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// 受け付けたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

/// ファイルを検証
///
/// # Errors
/// * `Error::InvalidFileType` - `image/` 以外のMIMEタイプ
/// * `Error::FileTooLarge` - `limit` バイトを超える（ちょうど `limit` は可）
pub fn validate_upload(file: &FileMeta, limit: u64) -> Result<()> {
    if !file.mime_type.starts_with("image/") {
        return Err(Error::InvalidFileType(file.mime_type.clone()));
    }
    if file.size > limit {
        return Err(Error::FileTooLarge {
            size: file.size,
            limit,
        });
    }
    Ok(())
}

/// 上限サイズの表示用文字列（"10MB", "1.5MB", "512KB"）
pub fn format_byte_limit(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes >= MIB {
        if bytes % MIB == 0 {
            format!("{}MB", bytes / MIB)
        } else {
            format!("{:.1}MB", bytes as f64 / MIB as f64)
        }
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// 複数ファイルが渡されても先頭の1件のみ使う
pub fn first_file<T, I>(files: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
{
    files.into_iter().next()
}

/// アップロード画像（セッション内でのみ有効な `data:` URL）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// バイト列からBase64の `data:` URLを生成
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    /// 既存の `data:` URLをそのまま包む
    pub fn from_data_url(data_url: String) -> Result<Self> {
        if !data_url.starts_with("data:") {
            return Err(Error::Parse("not a data URL".into()));
        }
        Ok(Self(data_url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// "data:image/png;base64,..." から "image/png" を取り出す
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .unwrap_or("")
    }
}
