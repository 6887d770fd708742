//! 画像解析フロー（CLI/WASM共通）
//!
//! エンコード済み画像 → 解析API → テキスト整形 → キーワード抽出 → 関連質問生成

use std::future::Future;

use crate::cleanup::clean_response;
use crate::error::FlowError;
use crate::gemini::Part;
use crate::keywords::extract_keywords;
use crate::prompts::{build_analysis_prompt, build_related_questions_prompt};
use crate::questions::parse_related_questions;
use crate::types::{AnalysisOutcome, EncodedPayload};

/// 補完サービス（テキスト/画像パートを送ってテキストを受け取る）
///
/// 実装はリトライしない。失敗はすべて `FlowError::ServiceCall` で返す。
pub trait CompletionService {
    fn generate(&self, parts: Vec<Part>) -> impl Future<Output = Result<String, FlowError>>;
}

/// 画像を解析して整形済みテキスト・キーワード・関連質問を返す
///
/// 本解析が失敗した場合、キーワード抽出と関連質問生成は行わない
pub async fn analyze<S: CompletionService>(
    service: &S,
    payload: &EncodedPayload,
    refinement: &str,
) -> Result<AnalysisOutcome, FlowError> {
    let parts = vec![
        Part::text(build_analysis_prompt(refinement)),
        Part::image(payload),
    ];

    log::debug!(
        "analysis request: {} ({} base64 chars), refinement={:?}",
        payload.mime_type,
        payload.len(),
        refinement
    );

    let raw = service.generate(parts).await.map_err(|e| {
        log::warn!("image analysis failed: {}", e);
        e
    })?;

    let text = clean_response(&raw);
    let keywords = extract_keywords(&text);
    let questions = related_questions(service, &text).await;

    Ok(AnalysisOutcome {
        text,
        keywords,
        questions,
    })
}

/// 解析テキストから関連質問を生成
pub async fn related_questions<S: CompletionService>(
    service: &S,
    source_text: &str,
) -> Result<Vec<String>, FlowError> {
    let parts = vec![Part::text(build_related_questions_prompt(source_text))];

    match service.generate(parts).await {
        Ok(raw) => Ok(parse_related_questions(&raw)),
        Err(e) => {
            log::warn!("related question generation failed: {}", e);
            Err(e)
        }
    }
}
