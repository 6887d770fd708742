//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト:
//! - build_analysis_prompt: 画像解析（追加指示つき）
//! - build_related_questions_prompt: 関連質問の生成
//! - focus_refinement / question_refinement: キーワード・質問クリック時の追加指示

/// 画像解析の固定指示
pub const BASE_INSTRUCTION: &str = "Identifying this image provides its name and important information including a brief explanation about the image.";

/// 関連質問の生成数
pub const QUESTION_COUNT: usize = 5;

/// 画像解析プロンプト生成
///
/// 追加指示が空なら固定指示のみ
pub fn build_analysis_prompt(refinement: &str) -> String {
    let refinement = refinement.trim();
    if refinement.is_empty() {
        BASE_INSTRUCTION.to_string()
    } else {
        format!("{}\n{}", BASE_INSTRUCTION, refinement)
    }
}

/// 関連質問プロンプト生成
pub fn build_related_questions_prompt(source_text: &str) -> String {
    format!(
        "Generate {} related questions based on this text: {}\nFormat the output as a simple list of questions, one per line.",
        QUESTION_COUNT, source_text
    )
}

/// キーワードに注目させる追加指示
pub fn focus_refinement(keyword: &str) -> String {
    format!("Focus on the {} in the image", keyword)
}

/// 関連質問に回答させる追加指示
pub fn question_refinement(question: &str) -> String {
    format!("Answer the following question about the image: \"{}\".", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_analysis_prompt_without_refinement() {
        assert_eq!(build_analysis_prompt(""), BASE_INSTRUCTION);
        assert_eq!(build_analysis_prompt("   "), BASE_INSTRUCTION);
    }

    #[test]
    fn test_build_analysis_prompt_with_refinement() {
        let prompt = build_analysis_prompt(&focus_refinement("lighthouse"));
        assert!(prompt.starts_with(BASE_INSTRUCTION));
        assert!(prompt.ends_with("\nFocus on the lighthouse in the image"));
    }

    #[test]
    fn test_build_related_questions_prompt() {
        let prompt = build_related_questions_prompt("A tabby cat on a sofa.");
        assert!(prompt.contains("Generate 5 related questions"));
        assert!(prompt.contains("A tabby cat on a sofa."));
        assert!(prompt.contains("one per line"));
    }

    #[test]
    fn test_question_refinement_quotes_question() {
        assert_eq!(
            question_refinement("What breed is it?"),
            "Answer the following question about the image: \"What breed is it?\"."
        );
    }
}
