//! notion-notes CLI
//!
//! Exports a Notion database to Markdown. Exits 0 on success and 1 on any
//! error.

use clap::Parser;
use notion_notes::config::{
    ApiConfig, Config, ENV_BASE_URL, ENV_DATABASE_ID, ENV_NOTION_VERSION, ENV_OUTPUT_DIR,
    ENV_TOKEN, OutputConfig,
};
use notion_notes::{MarkdownWriter, NotionClient, Syncer};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "notion-notes", version)]
#[command(about = "Export a Notion database to Markdown files", long_about = None)]
struct Cli {
    /// Notion integration token
    #[arg(long, env = ENV_TOKEN, hide_env_values = true, default_value = "")]
    token: String,

    /// Database to export
    #[arg(long, env = ENV_DATABASE_ID, default_value = "")]
    database_id: String,

    /// Output directory
    #[arg(short, long, env = ENV_OUTPUT_DIR, default_value = "notion-notes")]
    output: PathBuf,

    /// Notion API base URL
    #[arg(long, env = ENV_BASE_URL, default_value = "https://api.notion.com")]
    base_url: String,

    /// Value of the Notion-Version header
    #[arg(long, env = ENV_NOTION_VERSION, default_value = "2022-06-28")]
    notion_version: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            api: ApiConfig {
                token: self.token,
                database_id: self.database_id,
                base_url: self.base_url,
                notion_version: self.notion_version,
                timeout: Duration::from_secs(self.timeout_secs),
            },
            output: OutputConfig {
                dir: self.output,
                ..Default::default()
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // .env values only fill variables that are not already set
    dotenvy::dotenv().ok();
    let config = Cli::parse().into_config();

    match run(config).await {
        Ok(()) => {
            info!("同步完成！");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("同步失败: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> notion_notes::Result<()> {
    config.validate()?;
    let client = NotionClient::new(&config.api)?;
    let writer = MarkdownWriter::from_config(&config.output);
    let report = Syncer::new(client, writer).run().await?;
    info!(
        documents = report.entries.len(),
        index = %report.index_path.display(),
        "export written"
    );
    Ok(())
}
