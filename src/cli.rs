//! 커맨드라인 인터페이스 정의
//!
//! 플래그로 준 값은 환경변수(`Config::from_env`)보다 우선합니다.

use crate::config::Config;
use crate::services::vault::DEFAULT_SEARCH_TEXT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "smartvault")]
#[command(about = "Seeds a SmartVault SQLite store with synthetic data and queries it")]
#[command(version)]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recreate the store and fill it with accounts, users and documents
    Generate {
        /// Number of accounts (overrides ACCOUNT_COUNT)
        #[arg(long)]
        accounts: Option<u32>,

        /// Documents per account (overrides DOCUMENTS_PER_ACCOUNT)
        #[arg(long)]
        documents_per_account: Option<u32>,

        /// Directory of schema descriptors (overrides SCHEMA_DIR)
        #[arg(long)]
        schema_dir: Option<PathBuf>,

        /// Fixture document every generated row points at (overrides FIXTURE_PATH)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
    /// Export matching documents for one account, then print file sizes per account
    Query {
        /// Account whose documents are exported
        account_id: String,

        /// File the filtered content is written to
        output_path: PathBuf,

        /// Case-sensitive text a document must contain to be exported
        #[arg(default_value = DEFAULT_SEARCH_TEXT)]
        search_text: String,
    },
}

impl Cli {
    /// 환경변수 설정 위에 CLI 플래그를 덮어씁니다.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            config.database_path = database.clone();
        }

        if let Commands::Generate {
            accounts,
            documents_per_account,
            schema_dir,
            fixture,
        } = &self.command
        {
            if let Some(accounts) = accounts {
                config.account_count = *accounts;
            }
            if let Some(documents) = documents_per_account {
                config.documents_per_account = *documents;
            }
            if let Some(dir) = schema_dir {
                config.schema_dir = dir.clone();
            }
            if let Some(fixture) = fixture {
                config.fixture_path = fixture.clone();
            }
        }
    }
}
