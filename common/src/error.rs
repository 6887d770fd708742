//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 解析フローの失敗種別
///
/// 非同期処理（ファイル読込・API呼び出し）はすべてこの型で失敗を返す。
/// 表示層はエラー分岐を明示的に扱う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// 画像ファイルの読み込み失敗
    #[error("file read failed: {0}")]
    FileRead(String),

    /// 補完サービス呼び出し失敗（通信・認証・クォータ・不正レスポンス）
    #[error("service call failed: {0}")]
    ServiceCall(String),
}

impl FlowError {
    /// 機械可読な種別名（`--json` 出力用）
    pub fn kind(&self) -> &'static str {
        match self {
            FlowError::FileRead(_) => "file_read",
            FlowError::ServiceCall(_) => "service_call",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            FlowError::FileRead(detail) | FlowError::ServiceCall(detail) => detail,
        }
    }
}
