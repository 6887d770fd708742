//! セッション単位の解析実行
//!
//! Begin → エンコード → 解析API → Complete/Fail の順でセッションを進める

use crate::encoder::ImageFile;
use image_insight_common::{analyze, Action, CompletionService, Session};

/// 現在の画像を解析して次のセッションを返す
///
/// 解析中・画像未選択なら何もしない
pub async fn run_analysis<S: CompletionService>(
    service: &S,
    session: &Session<ImageFile>,
    refinement: &str,
) -> Session<ImageFile> {
    if !session.can_analyze() {
        log::debug!("analysis not started (loading or no image)");
        return session.clone();
    }

    let started = session.apply(Action::Begin);
    let (Some(ticket), Some(image)) = (started.in_flight(), started.image().cloned()) else {
        return started;
    };

    // 同じ画像でも毎回読み直す
    let payload = match image.encode().await {
        Ok(payload) => payload,
        Err(error) => return started.apply(Action::Fail { ticket, error }),
    };

    match analyze(service, &payload, refinement).await {
        Ok(outcome) => {
            log::info!(
                "analyzed {} ({} keywords, {} questions)",
                image.file_name,
                outcome.keywords.len(),
                outcome.questions.as_ref().map(|q| q.len()).unwrap_or(0)
            );
            started.apply(Action::Complete { ticket, outcome })
        }
        Err(error) => started.apply(Action::Fail { ticket, error }),
    }
}
