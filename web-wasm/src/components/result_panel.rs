//! 解析結果・キーワード・関連質問の表示

use leptos::prelude::*;
use image_insight_common::{
    focus_refinement, format_result, question_refinement, FlowError, FormattedLine, LineKind,
    Session,
};
use crate::file_reader::LoadedImage;

fn render_line(line: FormattedLine) -> AnyView {
    match line.kind {
        LineKind::Heading => view! { <h4 class="result-heading">{line.text}</h4> }.into_any(),
        LineKind::ListItem => view! { <li class="result-item">{line.text}</li> }.into_any(),
        LineKind::Paragraph => view! { <p class="result-paragraph">{line.text}</p> }.into_any(),
    }
}

#[component]
pub fn ResultPanel<F>(
    session: RwSignal<Session<LoadedImage>>,
    on_refine: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    let lines = move || {
        session.with(|s| s.result().map(format_result).unwrap_or_default())
    };

    view! {
        <Show when=move || session.with(|s| s.result().is_some())>
            <div class="result" id="result">
                <h3>"Image Information"</h3>
                <div class="result-body">
                    {move || lines().into_iter().map(render_line).collect_view()}
                </div>
                <KeywordChips session=session on_refine=on_refine.clone() />
                <RelatedQuestions session=session on_refine=on_refine.clone() />
            </div>
        </Show>
    }
}

#[component]
fn KeywordChips<F>(
    session: RwSignal<Session<LoadedImage>>,
    on_refine: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="keywords">
            <h4>"Related Keywords"</h4>
            <div class="keyword-chips">
                {move || {
                    let on_refine = on_refine.clone();
                    session
                        .with(|s| s.keywords().to_vec())
                        .into_iter()
                        .map(move |keyword| {
                            let on_refine = on_refine.clone();
                            let label = keyword.clone();
                            view! {
                                <button
                                    type="button"
                                    class="keyword-chip"
                                    disabled=move || !session.with(|s| s.can_analyze())
                                    on:click=move |_| on_refine(focus_refinement(&keyword))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn RelatedQuestions<F>(
    session: RwSignal<Session<LoadedImage>>,
    on_refine: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    view! {
        <Show when=move || session.with(|s| !s.questions().is_empty())>
            <div class="questions">
                <h4>"Related Questions"</h4>
                <ul>
                    {
                        let on_refine = on_refine.clone();
                        move || {
                            let on_refine = on_refine.clone();
                            session
                                .with(|s| s.questions().to_vec())
                                .into_iter()
                                .map(move |question| {
                                    let on_refine = on_refine.clone();
                                    let label = question.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class="question"
                                                disabled=move || !session.with(|s| s.can_analyze())
                                                on:click=move |_| on_refine(question_refinement(&question))
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </div>
        </Show>
    }
}

/// 失敗の表示（前回の結果はそのまま残す）
#[component]
pub fn ErrorBanner(
    session: RwSignal<Session<LoadedImage>>,
    read_error: ReadSignal<Option<FlowError>>,
) -> impl IntoView {
    let message = move || {
        if let Some(error) = read_error.get() {
            return Some(format!("Could not read the image: {}", error.detail()));
        }
        session.with(|s| {
            s.last_error()
                .map(|e| format!("Analysis failed: {}", e.detail()))
                .or_else(|| {
                    s.questions_error()
                        .map(|e| format!("Related questions unavailable: {}", e.detail()))
                })
        })
    };

    view! {
        <Show when=move || message().is_some()>
            <div class="error-banner" role="alert">
                {move || message().unwrap_or_default()}
            </div>
        </Show>
    }
}
