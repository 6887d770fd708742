use anyhow::Context;
use clap::Parser;
use image_insight::{analyzer, cli, config, encoder, explore, gemini, render};
use image_insight_common::{Action, Session};
use cli::{Cli, Commands};
use config::Config;
use encoder::ImageFile;
use gemini::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Analyze { image, refinement, json } => {
            let image = ImageFile::open(&image)?;
            let client = GeminiClient::from_config(&config)?;
            log::info!("model: {}", client.model());

            if !json {
                println!("📸 image-insight - 画像解析\n");
                println!("- {} ({}) を解析中...", image.file_name, image.mime_type);
            }

            let file_name = image.file_name.clone();
            let session = Session::new().apply(Action::SelectImage(image));
            let session =
                analyzer::run_analysis(&client, &session, &refinement.to_refinement()).await;

            if json {
                let report = render::AnalysisReport::from_session(&file_name, &session);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::render_session(&session));
            }

            if let Some(error) = session.last_error() {
                return Err(anyhow::anyhow!(error.clone()));
            }
        }

        Commands::Explore { image } => {
            let image = ImageFile::open(&image)?;
            let client = GeminiClient::from_config(&config)?;
            log::info!("model: {}", client.model());
            explore::run_explorer(&client, image).await?;
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  APIキー: {}",
                    if config.api_key().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
