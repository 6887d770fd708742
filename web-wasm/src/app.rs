//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use image_insight_common::{analyze, Action, AnalysisOutcome, FlowError, Session};
use crate::api::gemini::FetchGeminiClient;
use crate::components::{
    header::Header,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
    result_panel::{ErrorBanner, ResultPanel},
};
use crate::file_reader::{read_file, LoadedImage};

/// ビルド時に埋め込むAPIキー（画面で上書き可）
fn default_api_key() -> String {
    option_env!("GEMINI_API_KEY").unwrap_or_default().to_string()
}

async fn run_analysis(
    api_key: &str,
    image: &LoadedImage,
    refinement: &str,
) -> Result<AnalysisOutcome, FlowError> {
    let client = FetchGeminiClient::new(api_key)?;
    let payload = image.encode();
    analyze(&client, &payload, refinement).await
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(default_api_key());
    let session = RwSignal::new(Session::<LoadedImage>::new());
    let (read_error, set_read_error) = signal(None::<FlowError>);

    // 画像選択ハンドラ（選択のたびに世代が進み、古い応答は捨てられる）
    let on_file_selected = move |file: web_sys::File| {
        spawn_local(async move {
            match read_file(&file).await {
                Ok(image) => {
                    log::info!("selected {} ({}, {} bytes)", image.name, image.mime_type, image.bytes.len());
                    set_read_error.set(None);
                    session.update(|s| *s = s.apply(Action::SelectImage(image)));
                }
                Err(error) => {
                    log::warn!("{}", error);
                    set_read_error.set(Some(error));
                }
            }
        });
    };

    // 解析開始ハンドラ（解析中は受け付けない）
    let start_analysis = move |refinement: String| {
        let current = session.get_untracked();
        if !current.can_analyze() {
            return;
        }
        let started = current.apply(Action::Begin);
        let (Some(ticket), Some(image)) = (started.in_flight(), started.image().cloned()) else {
            return;
        };
        session.set(started);

        let key = api_key.get_untracked();
        spawn_local(async move {
            let action = match run_analysis(&key, &image, &refinement).await {
                Ok(outcome) => Action::Complete { ticket, outcome },
                Err(error) => Action::Fail { ticket, error },
            };
            session.update(|s| *s = s.apply(action));
        });
    };

    let is_loading = move || session.with(|s| s.is_loading());

    view! {
        <div class="container">
            <Header />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <UploadArea session=session on_file_selected=on_file_selected />

            <button
                type="button"
                class="analyze-button"
                disabled=move || !session.with(|s| s.can_analyze())
                on:click=move |_| start_analysis(String::new())
            >
                {move || if is_loading() { "Analyzing..." } else { "Analyze Image" }}
            </button>

            <ErrorBanner session=session read_error=read_error />

            <ResultPanel session=session on_refine=start_analysis />
        </div>
    }
}
