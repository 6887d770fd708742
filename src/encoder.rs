//! 画像ファイルの読み込みとエンコード
//!
//! 解析のたびにファイルを読み直してBase64化する（キャッシュしない）

use crate::error::{InsightError, Result};
use image::ImageFormat;
use image_insight_common::{EncodedPayload, FlowError};
use std::path::{Path, PathBuf};

/// 拡張子から判定できない場合のMIMEタイプ
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 選択中の画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageFile {
    /// 画像ファイルを選択（中身の検証はしない）
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(InsightError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: declared_mime_type(path).to_string(),
        })
    }

    /// ファイル全体を読み込んでエンコード
    pub async fn encode(&self) -> std::result::Result<EncodedPayload, FlowError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            log::warn!("failed to read {}: {}", self.path.display(), e);
            FlowError::FileRead(format!("{}: {}", self.path.display(), e))
        })?;

        log::debug!("read {} ({} bytes)", self.file_name, bytes.len());
        Ok(EncodedPayload::from_bytes(&bytes, &self.mime_type))
    }
}

/// 拡張子から申告MIMEタイプを決める
pub fn declared_mime_type(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_mime_type() {
        assert_eq!(declared_mime_type(Path::new("a.png")), "image/png");
        assert_eq!(declared_mime_type(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(declared_mime_type(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(declared_mime_type(Path::new("a.webp")), "image/webp");
        assert_eq!(declared_mime_type(Path::new("a.gif")), "image/gif");
    }

    #[test]
    fn test_declared_mime_type_unknown() {
        assert_eq!(declared_mime_type(Path::new("notes.txt")), FALLBACK_MIME_TYPE);
        assert_eq!(declared_mime_type(Path::new("no_extension")), FALLBACK_MIME_TYPE);
    }
}
