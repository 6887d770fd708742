//! 解析結果の表示用分類
//!
//! 各行を見出し・リスト項目・段落に分類する。空行は表示しない。

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

const HEADING_PREFIXES: &[&str] = &["Important Information:", "Other Information:"];

lazy_static! {
    static ref NUMBERED_RE: Regex = Regex::new(r"^\d+\.").unwrap();
}

/// 行の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Heading,
    ListItem,
    Paragraph,
}

/// 分類済みの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedLine {
    pub kind: LineKind,
    pub text: String,
}

/// 1行を分類（空行は `None`）
pub fn classify_line(line: &str) -> Option<LineKind> {
    if HEADING_PREFIXES.iter().any(|p| line.starts_with(p)) {
        Some(LineKind::Heading)
    } else if NUMBERED_RE.is_match(line) || line.starts_with('-') {
        Some(LineKind::ListItem)
    } else if !line.trim().is_empty() {
        Some(LineKind::Paragraph)
    } else {
        None
    }
}

/// 解析テキスト全体を行ごとに分類
pub fn format_result(text: &str) -> Vec<FormattedLine> {
    text.split('\n')
        .filter_map(|line| {
            classify_line(line).map(|kind| FormattedLine {
                kind,
                text: line.to_string(),
            })
        })
        .collect()
}
