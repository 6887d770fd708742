//! 解析フローの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - EncodedPayload: 送信用にエンコードした画像
//! - AnalysisOutcome: 1回の解析サイクルの結果

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// 送信用画像ペイロード
///
/// `data` はヘッダなしのBase64（`data:...;base64,` は含まない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedPayload {
    pub data: String,
    pub mime_type: String,
}

impl EncodedPayload {
    /// バイト列と申告MIMEタイプからペイロードを生成
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
        }
    }

    /// Base64をデコードして元のバイト列を復元
    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.data)?)
    }

    /// ブラウザ表示用のData URL
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Base64文字列の長さ（ログ用）
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// 解析1サイクル分の結果
///
/// 関連質問の生成は本解析とは独立に失敗しうるため `Result` で保持する
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub text: String,
    pub keywords: Vec<String>,
    pub questions: std::result::Result<Vec<String>, FlowError>,
}

impl AnalysisOutcome {
    /// 失敗時は空リスト
    pub fn questions_or_empty(&self) -> Vec<String> {
        self.questions.clone().unwrap_or_default()
    }
}
