use image_insight_common::FlowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。GEMINI_API_KEY を設定するか `image-insight config --set-api-key YOUR_KEY` を実行してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Http(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("解析エラー: {0}")]
    Flow(#[from] FlowError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InsightError>;
