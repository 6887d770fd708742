//! キーワード抽出
//!
//! 解析テキストから話題のキーワードを最大5件取り出す。
//! 句読点の正規化はしない（"image." と "image" は別扱い）。

/// 抽出上限
pub const MAX_KEYWORDS: usize = 5;

/// この文字数以下の語は除外
const MIN_EXCLUSIVE_LEN: usize = 4;

const STOPWORDS: &[&str] = &["this", "that", "with", "from", "have"];

/// テキストからキーワードを抽出
///
/// 1. 空白で分割
/// 2. 5文字以上かつストップワード（大文字小文字無視）でない語を残す
/// 3. 完全一致で重複排除（出現順を保持）
/// 4. 先頭5件
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);

    for word in text.split_whitespace() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if word.chars().count() <= MIN_EXCLUSIVE_LEN {
            continue;
        }
        if STOPWORDS.contains(&word.to_lowercase().as_str()) {
            continue;
        }
        if keywords.iter().any(|k| k == word) {
            continue;
        }
        keywords.push(word.to_string());
    }

    keywords
}
