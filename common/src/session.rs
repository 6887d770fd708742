//! 解析セッション
//!
//! 画面状態（選択画像・解析結果・キーワード・関連質問・ロード中）を
//! 不変のスナップショットとして保持する。ユーザー操作ごとに `apply` で
//! 新しいスナップショットを作る。
//!
//! 画像を選び直すたびに世代(generation)が進み、古い世代のリクエストの
//! 応答は破棄される。解析中は新しい解析を受け付けない（single-flight）。

use crate::error::FlowError;
use crate::types::AnalysisOutcome;

/// 実行中リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub request: u64,
}

/// セッションへの操作
#[derive(Debug, Clone)]
pub enum Action<I> {
    /// 画像を選択（前の結果はすべて破棄）
    SelectImage(I),
    /// 解析を開始
    Begin,
    /// 解析成功
    Complete { ticket: Ticket, outcome: AnalysisOutcome },
    /// 解析失敗
    Fail { ticket: Ticket, error: FlowError },
}

/// 画面状態のスナップショット
#[derive(Debug, Clone)]
pub struct Session<I> {
    generation: u64,
    next_request: u64,
    image: Option<I>,
    result: Option<String>,
    keywords: Vec<String>,
    questions: Vec<String>,
    in_flight: Option<Ticket>,
    last_error: Option<FlowError>,
    questions_error: Option<FlowError>,
}

impl<I> Default for Session<I> {
    fn default() -> Self {
        Self {
            generation: 0,
            next_request: 0,
            image: None,
            result: None,
            keywords: Vec::new(),
            questions: Vec::new(),
            in_flight: None,
            last_error: None,
            questions_error: None,
        }
    }
}

impl<I: Clone> Session<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 操作を適用して次のスナップショットを返す
    pub fn apply(&self, action: Action<I>) -> Self {
        match action {
            Action::SelectImage(image) => Self {
                generation: self.generation + 1,
                next_request: self.next_request,
                image: Some(image),
                ..Self::default()
            },
            Action::Begin => {
                if !self.can_analyze() {
                    return self.clone();
                }
                let ticket = Ticket {
                    generation: self.generation,
                    request: self.next_request,
                };
                Self {
                    next_request: self.next_request + 1,
                    in_flight: Some(ticket),
                    ..self.clone()
                }
            }
            Action::Complete { ticket, outcome } => {
                if !self.accepts(ticket) {
                    log::debug!("discarding stale analysis result {:?}", ticket);
                    return self.clone();
                }
                let questions_error = outcome.questions.as_ref().err().cloned();
                Self {
                    questions: outcome.questions_or_empty(),
                    result: Some(outcome.text),
                    keywords: outcome.keywords,
                    in_flight: None,
                    last_error: None,
                    questions_error,
                    ..self.clone()
                }
            }
            Action::Fail { ticket, error } => {
                if !self.accepts(ticket) {
                    log::debug!("discarding stale analysis failure {:?}", ticket);
                    return self.clone();
                }
                Self {
                    in_flight: None,
                    last_error: Some(error),
                    ..self.clone()
                }
            }
        }
    }
}

impl<I> Session<I> {
    fn accepts(&self, ticket: Ticket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// 解析を開始できるか（画像あり・実行中でない）
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && self.in_flight.is_none()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn last_error(&self) -> Option<&FlowError> {
        self.last_error.as_ref()
    }

    pub fn questions_error(&self) -> Option<&FlowError> {
        self.questions_error.as_ref()
    }
}
