//! # SmartVault 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩 후 CLI 플래그로 덮어쓰기
//! 4. 서브커맨드(`generate` / `query`) 실행

use anyhow::Result;
use clap::Parser;
use smartvault::cli::{Cli, Commands};
use smartvault::commands;
use smartvault::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartvault=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);
    tracing::debug!("Using config {:?}", config);

    match &cli.command {
        Commands::Generate { .. } => commands::generate::run(&config).await,
        Commands::Query {
            account_id,
            output_path,
            search_text,
        } => commands::query::run(&config, account_id, output_path, search_text).await,
    }
}
