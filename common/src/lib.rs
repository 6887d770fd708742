//! Image Insight Common Library
//!
//! CLIとWeb(WASM)で共有される型と解析フロー

pub mod types;
pub mod error;
pub mod gemini;
pub mod prompts;
pub mod cleanup;
pub mod keywords;
pub mod questions;
pub mod formatter;
pub mod session;
pub mod flow;

pub use types::{AnalysisOutcome, EncodedPayload};
pub use error::{Error, FlowError, Result};
pub use gemini::{GeminiRequest, GeminiResponse, InlineData, Part};
pub use prompts::{
    build_analysis_prompt, build_related_questions_prompt, focus_refinement, question_refinement,
};
pub use cleanup::clean_response;
pub use keywords::extract_keywords;
pub use questions::parse_related_questions;
pub use formatter::{classify_line, format_result, FormattedLine, LineKind};
pub use session::{Action, Session, Ticket};
pub use flow::{analyze, related_questions, CompletionService};
