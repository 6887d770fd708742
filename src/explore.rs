//! 対話モード
//!
//! 解析結果を表示し、キーワード・関連質問・任意の指示で同じ画像を再解析する

use crate::analyzer::run_analysis;
use crate::encoder::ImageFile;
use crate::error::{InsightError, Result};
use crate::render::render_session;
use dialoguer::{Input, Select};
use image_insight_common::{
    focus_refinement, question_refinement, Action, CompletionService, Session,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// メニュー項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Keyword(String),
    Question(String),
    CustomPrompt,
    Retry,
    OpenImage,
    Quit,
}

impl MenuChoice {
    pub fn label(&self) -> String {
        match self {
            MenuChoice::Keyword(k) => format!("🔑 {}", k),
            MenuChoice::Question(q) => format!("❓ {}", q),
            MenuChoice::CustomPrompt => "✏  追加指示を入力して再解析".to_string(),
            MenuChoice::Retry => "🔄 再解析".to_string(),
            MenuChoice::OpenImage => "📂 別の画像を開く".to_string(),
            MenuChoice::Quit => "終了".to_string(),
        }
    }
}

/// セッションの状態からメニューを組み立てる
pub fn build_menu<I>(session: &Session<I>) -> Vec<MenuChoice> {
    let mut choices: Vec<MenuChoice> = session
        .keywords()
        .iter()
        .cloned()
        .map(MenuChoice::Keyword)
        .collect();
    choices.extend(session.questions().iter().cloned().map(MenuChoice::Question));
    choices.push(MenuChoice::CustomPrompt);
    choices.push(MenuChoice::Retry);
    choices.push(MenuChoice::OpenImage);
    choices.push(MenuChoice::Quit);
    choices
}

/// スピナーを出しながら解析
async fn analyze_with_spinner<S: CompletionService>(
    service: &S,
    session: &Session<ImageFile>,
    refinement: &str,
) -> Session<ImageFile> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let next = run_analysis(service, session, refinement).await;

    spinner.finish_and_clear();
    next
}

fn prompt_error(e: dialoguer::Error) -> InsightError {
    InsightError::Prompt(e.to_string())
}

pub async fn run_explorer<S: CompletionService>(service: &S, image: ImageFile) -> Result<()> {
    println!("📸 {} ({})\n", image.file_name, image.mime_type);

    let session = Session::new().apply(Action::SelectImage(image));
    let mut session = analyze_with_spinner(service, &session, "").await;

    loop {
        println!("{}\n", render_session(&session));

        let choices = build_menu(&session);
        let labels: Vec<String> = choices.iter().map(MenuChoice::label).collect();

        let selection = Select::new()
            .with_prompt("次の操作")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        let Some(index) = selection else { break };

        let refinement = match &choices[index] {
            MenuChoice::Keyword(keyword) => focus_refinement(keyword),
            MenuChoice::Question(question) => question_refinement(question),
            MenuChoice::CustomPrompt => Input::<String>::new()
                .with_prompt("追加指示")
                .interact_text()
                .map_err(prompt_error)?,
            MenuChoice::Retry => String::new(),
            MenuChoice::OpenImage => {
                let path: String = Input::new()
                    .with_prompt("画像ファイルのパス")
                    .interact_text()
                    .map_err(prompt_error)?;
                match ImageFile::open(&PathBuf::from(path.trim())) {
                    Ok(image) => {
                        println!("\n📸 {} ({})\n", image.file_name, image.mime_type);
                        session = session.apply(Action::SelectImage(image));
                        String::new()
                    }
                    Err(e) => {
                        println!("⚠ {}\n", e);
                        continue;
                    }
                }
            }
            MenuChoice::Quit => break,
        };

        session = analyze_with_spinner(service, &session, &refinement).await;
    }

    Ok(())
}
