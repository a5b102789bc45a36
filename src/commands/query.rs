use crate::config::Config;
use crate::db;
use crate::services::vault;
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

/// `query`: 한 계정의 필터링 내보내기를 실행하고, 모든 계정의 파일 크기 합계를 출력합니다.
pub async fn run(
    config: &Config,
    account_id: &str,
    output_path: &Path,
    search_text: &str,
) -> Result<()> {
    let pool = db::open_existing(&config.database_path)
        .await
        .with_context(|| format!("opening store {}", config.database_path.display()))?;

    let outcome = export_and_report(&pool, account_id, output_path, search_text).await;
    pool.close().await;
    outcome
}

async fn export_and_report(
    pool: &SqlitePool,
    account_id: &str,
    output_path: &Path,
    search_text: &str,
) -> Result<()> {
    let report = vault::export_filtered_content(pool, account_id, output_path, search_text).await;
    if report.aborted {
        tracing::warn!(
            "Export for account {} did not finish; {} is partial",
            account_id,
            output_path.display()
        );
    }
    println!(
        "Processing complete! ({} written, {} skipped)",
        report.written, report.skipped
    );

    for (account_id, total) in vault::account_file_sizes(pool).await? {
        println!("Total file size for account {account_id}: {total} bytes");
    }
    Ok(())
}
