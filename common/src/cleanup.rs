//! レスポンステキストの整形パイプライン
//!
//! 各変換は独立した純粋関数。`clean_response` が固定順で合成する:
//! trim → コードフェンス除去 → 強調記号除去 → 行頭ダッシュ除去 → 空行圧縮 → trim

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 行頭の "- " (インデント込み、直後に空白が必要)
    static ref LIST_DASH_RE: Regex = Regex::new(r"(?m)^[ \t]*-[ \t]+").unwrap();
    // 空白のみの行を挟む改行の連続（次の行のインデントは含めない）
    static ref BLANK_LINES_RE: Regex = Regex::new(r"(?:\r?\n[ \t]*)+\r?\n").unwrap();
}

/// "```" を除去
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```", "")
}

/// Markdownの太字・斜体記号を除去
pub fn strip_emphasis_markers(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// 各行の先頭のリスト用ダッシュを除去
pub fn strip_list_dashes(text: &str) -> String {
    LIST_DASH_RE.replace_all(text, "").into_owned()
}

/// 連続する空行を1つの改行にまとめる
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n").into_owned()
}

/// APIレスポンスを表示用に整形
pub fn clean_response(raw: &str) -> String {
    let text = strip_code_fences(raw.trim());
    let text = strip_emphasis_markers(&text);
    let text = strip_list_dashes(&text);
    let text = collapse_blank_lines(&text);
    text.trim().to_string()
}
