//! 関連質問レスポンスのパース

/// 1行1質問のレスポンスを質問リストに変換
///
/// 空行（末尾改行などで生じるもの）は除外する
pub fn parse_related_questions(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_related_questions_one_per_line() {
        let raw = "What is it made of?\nWhen was it built?\nWho designed it?";
        assert_eq!(
            parse_related_questions(raw),
            vec!["What is it made of?", "When was it built?", "Who designed it?"]
        );
    }

    #[test]
    fn test_parse_related_questions_drops_blank_lines() {
        let raw = "\nQ1?\n\nQ2?\n   \nQ3?\n\n";
        assert_eq!(parse_related_questions(raw), vec!["Q1?", "Q2?", "Q3?"]);
    }

    #[test]
    fn test_parse_related_questions_crlf() {
        let raw = "Q1?\r\nQ2?\r\n";
        assert_eq!(parse_related_questions(raw), vec!["Q1?", "Q2?"]);
    }

    #[test]
    fn test_parse_related_questions_keeps_inner_text() {
        // 番号などの整形はしない
        let raw = "1. Why is the sky blue?\n2.  How tall is it?";
        assert_eq!(
            parse_related_questions(raw),
            vec!["1. Why is the sky blue?", "2.  How tall is it?"]
        );
    }

    #[test]
    fn test_parse_related_questions_empty() {
        assert!(parse_related_questions("").is_empty());
        assert!(parse_related_questions("\n\n").is_empty());
    }
}
