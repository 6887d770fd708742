//! セッション解析テスト
//!
//! 応答を差し替えたサービスで、解析結果の置き換え・失敗時の扱いを検証

use image_insight::analyzer::run_analysis;
use image_insight::encoder::ImageFile;
use image_insight_common::{
    focus_refinement, Action, CompletionService, FlowError, Part, Session,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::{tempdir, TempDir};

/// 応答を順に返すテスト用サービス
struct ScriptedService {
    replies: Mutex<VecDeque<Result<String, FlowError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    fn new(replies: Vec<Result<String, FlowError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

impl CompletionService for ScriptedService {
    async fn generate(&self, parts: Vec<Part>) -> Result<String, FlowError> {
        let prompt = parts
            .iter()
            .find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FlowError::ServiceCall("no scripted reply".to_string())))
    }
}

fn image_session(name: &str) -> (TempDir, Session<ImageFile>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, b"\x89PNG\r\n").unwrap();
    let image = ImageFile::open(&path).unwrap();
    (dir, Session::new().apply(Action::SelectImage(image)))
}

#[tokio::test]
async fn test_run_analysis_success() {
    let (_dir, session) = image_session("bridge.png");
    let service = ScriptedService::new(vec![
        Ok("**Golden Gate Bridge**\n\nImportant Information:\n- Opened in 1937".to_string()),
        Ok("How long is it?\nWho designed it?\n".to_string()),
    ]);

    let session = run_analysis(&service, &session, "").await;

    assert!(!session.is_loading());
    assert_eq!(
        session.result(),
        Some("Golden Gate Bridge\nImportant Information:\nOpened in 1937")
    );
    assert_eq!(
        session.keywords(),
        ["Golden", "Bridge", "Important", "Information:", "Opened"].map(String::from)
    );
    assert_eq!(session.questions().len(), 2);
    assert_eq!(service.calls(), 2);
}

#[tokio::test]
async fn test_run_analysis_failure_keeps_previous_result() {
    let (_dir, session) = image_session("cat.png");
    let service = ScriptedService::new(vec![
        Ok("A sleeping tabby cat".to_string()),
        Ok("Q1?\nQ2?".to_string()),
        Err(FlowError::ServiceCall("API error: 429".to_string())),
    ]);

    let session = run_analysis(&service, &session, "").await;
    let session = run_analysis(&service, &session, &focus_refinement("tabby")).await;

    assert!(!session.is_loading());
    assert_eq!(session.result(), Some("A sleeping tabby cat"));
    assert_eq!(session.questions(), ["Q1?", "Q2?"].map(String::from));
    assert_eq!(
        session.last_error(),
        Some(&FlowError::ServiceCall("API error: 429".to_string()))
    );
    // 失敗後は関連質問の呼び出しをしない
    assert_eq!(service.calls(), 3);
}

#[tokio::test]
async fn test_run_analysis_questions_failure_clears_questions() {
    let (_dir, session) = image_session("cat.png");
    let service = ScriptedService::new(vec![
        Ok("A sleeping tabby cat".to_string()),
        Ok("Q1?\nQ2?".to_string()),
        Ok("The tabby has orange stripes".to_string()),
        Err(FlowError::ServiceCall("quota".to_string())),
    ]);

    let session = run_analysis(&service, &session, "").await;
    let session = run_analysis(&service, &session, &focus_refinement("tabby")).await;

    assert_eq!(session.result(), Some("The tabby has orange stripes"));
    assert!(session.questions().is_empty());
    assert!(session.questions_error().is_some());
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_run_analysis_refinement_reaches_prompt() {
    let (_dir, session) = image_session("cat.png");
    let service = ScriptedService::new(vec![Ok("ok".to_string()), Ok(String::new())]);

    run_analysis(&service, &session, &focus_refinement("whiskers")).await;

    assert!(service
        .prompt(0)
        .ends_with("Focus on the whiskers in the image"));
}

#[tokio::test]
async fn test_run_analysis_file_read_failure() {
    let (dir, session) = image_session("cat.png");
    std::fs::remove_file(dir.path().join("cat.png")).unwrap();
    let service = ScriptedService::new(vec![]);

    let session = run_analysis(&service, &session, "").await;

    assert!(!session.is_loading());
    assert!(matches!(session.last_error(), Some(FlowError::FileRead(_))));
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_run_analysis_without_image_is_noop() {
    let service = ScriptedService::new(vec![]);
    let session: Session<ImageFile> = Session::new();

    let next = run_analysis(&service, &session, "").await;

    assert!(next.result().is_none());
    assert!(next.last_error().is_none());
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_run_analysis_while_loading_is_noop() {
    let (_dir, session) = image_session("cat.png");
    let loading = session.apply(Action::Begin);
    let service = ScriptedService::new(vec![Ok("ignored".to_string())]);

    let next = run_analysis(&service, &loading, "").await;

    assert_eq!(next.in_flight(), loading.in_flight());
    assert_eq!(service.calls(), 0);
}
