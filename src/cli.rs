use clap::{Args, Parser, Subcommand};
use image_insight_common::{focus_refinement, question_refinement};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-insight")]
#[command(about = "画像AI解析ツール（キーワード・関連質問つき）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を1回解析して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        #[command(flatten)]
        refinement: RefinementArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 対話的に解析（キーワード・関連質問から再解析）
    Explore {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 追加指示（いずれか1つ）
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct RefinementArgs {
    /// キーワードに注目して解析
    #[arg(long)]
    pub focus: Option<String>,

    /// 画像についての質問に回答させる
    #[arg(long)]
    pub ask: Option<String>,

    /// 任意の追加指示
    #[arg(long)]
    pub prompt: Option<String>,
}

impl RefinementArgs {
    /// 追加指示文（指定なしは空文字）
    pub fn to_refinement(&self) -> String {
        if let Some(keyword) = &self.focus {
            focus_refinement(keyword)
        } else if let Some(question) = &self.ask {
            question_refinement(question)
        } else {
            self.prompt.clone().unwrap_or_default()
        }
    }
}
