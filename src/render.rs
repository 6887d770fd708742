//! 解析結果の端末表示

use image_insight_common::{format_result, FormattedLine, LineKind, Session};
use serde::Serialize;

/// `analyze --json` の出力
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    pub file_name: &'a str,
    pub result: Option<&'a str>,
    pub lines: Vec<FormattedLine>,
    pub keywords: &'a [String],
    pub related_questions: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
}

impl<'a> AnalysisReport<'a> {
    pub fn from_session<I>(file_name: &'a str, session: &'a Session<I>) -> Self {
        Self {
            file_name,
            result: session.result(),
            lines: session.result().map(format_result).unwrap_or_default(),
            keywords: session.keywords(),
            related_questions: session.questions(),
            error: session.last_error().map(|e| e.to_string()),
            error_kind: session.last_error().map(|e| e.kind()),
        }
    }
}

/// 分類済みの1行を表示用文字列に
pub fn render_line(line: &FormattedLine) -> String {
    match line.kind {
        LineKind::Heading => format!("\n■ {}", line.text),
        LineKind::ListItem => format!("  • {}", line.text),
        LineKind::Paragraph => line.text.clone(),
    }
}

/// 解析結果・キーワード・関連質問を表示用テキストに
pub fn render_session<I>(session: &Session<I>) -> String {
    let mut out = Vec::new();

    if let Some(result) = session.result() {
        out.push("🖼  Image Information".to_string());
        out.extend(format_result(result).iter().map(render_line));
    }

    if !session.keywords().is_empty() {
        out.push(String::new());
        out.push(format!("🔑 Related Keywords: {}", session.keywords().join(" | ")));
    }

    if !session.questions().is_empty() {
        out.push(String::new());
        out.push("❓ Related Questions".to_string());
        for (i, question) in session.questions().iter().enumerate() {
            out.push(format!("  {}. {}", i + 1, question));
        }
    }

    if let Some(error) = session.last_error() {
        out.push(String::new());
        out.push(format!("⚠ 解析に失敗しました（前回の結果を表示中）: {}", error));
    }

    if let Some(error) = session.questions_error() {
        out.push(format!("⚠ 関連質問を生成できませんでした: {}", error));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_insight_common::{Action, AnalysisOutcome, FlowError};

    fn analyzed_session() -> Session<&'static str> {
        let session = Session::new()
            .apply(Action::SelectImage("tower.jpg"))
            .apply(Action::Begin);
        let ticket = session.in_flight().unwrap();
        session.apply(Action::Complete {
            ticket,
            outcome: AnalysisOutcome {
                text: "Name: Eiffel Tower\nImportant Information:\n1. Height 330 m".to_string(),
                keywords: vec!["Eiffel".to_string(), "Tower".to_string()],
                questions: Ok(vec!["Who built it?".to_string()]),
            },
        })
    }

    #[test]
    fn test_render_line() {
        let heading = FormattedLine { kind: LineKind::Heading, text: "Other Information:".to_string() };
        assert_eq!(render_line(&heading), "\n■ Other Information:");
        let item = FormattedLine { kind: LineKind::ListItem, text: "1. a".to_string() };
        assert_eq!(render_line(&item), "  • 1. a");
    }

    #[test]
    fn test_render_session() {
        let text = render_session(&analyzed_session());
        assert!(text.contains("Name: Eiffel Tower"));
        assert!(text.contains("■ Important Information:"));
        assert!(text.contains("  • 1. Height 330 m"));
        assert!(text.contains("Related Keywords: Eiffel | Tower"));
        assert!(text.contains("  1. Who built it?"));
        assert!(!text.contains("⚠"));
    }

    #[test]
    fn test_render_session_with_error() {
        let session = analyzed_session().apply(Action::Begin);
        let ticket = session.in_flight().unwrap();
        let session = session.apply(Action::Fail {
            ticket,
            error: FlowError::ServiceCall("API error: 503".to_string()),
        });
        let text = render_session(&session);
        assert!(text.contains("Name: Eiffel Tower"));
        assert!(text.contains("API error: 503"));
    }

    #[test]
    fn test_report_json() {
        let session = analyzed_session();
        let report = AnalysisReport::from_session("tower.jpg", &session);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fileName"], "tower.jpg");
        assert_eq!(json["keywords"][0], "Eiffel");
        assert_eq!(json["relatedQuestions"][0], "Who built it?");
        assert_eq!(json["lines"][1]["kind"], "heading");
        assert!(json.get("error").is_none());
        assert!(json.get("errorKind").is_none());
    }

    #[test]
    fn test_report_json_with_error_kind() {
        let session = analyzed_session().apply(Action::Begin);
        let ticket = session.in_flight().unwrap();
        let session = session.apply(Action::Fail {
            ticket,
            error: FlowError::FileRead("permission denied".to_string()),
        });
        let report = AnalysisReport::from_session("tower.jpg", &session);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errorKind"], "file_read");
        assert_eq!(json["error"], "file read failed: permission denied");
        assert_eq!(json["result"], "Name: Eiffel Tower\nImportant Information:\n1. Height 330 m");
    }
}
