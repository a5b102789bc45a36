use crate::config::Config;
use crate::db;
use crate::services::{fixture, generator, GenerationOptions};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sqlx::SqlitePool;

/// `generate`: 픽스처 파일을 준비하고(없을 때만 기본 내용으로 생성), 저장소를 새로 만든 뒤 데이터를 생성합니다.
///
/// 생성이 실패하면 롤백된 상태로 에러를 반환하고(종료 코드 != 0),
/// 성공하면 테이블별 행 수를 출력합니다.
pub async fn run(config: &Config) -> Result<()> {
    let fixture_path = fixture::ensure_fixture(&config.fixture_path)
        .await
        .with_context(|| format!("preparing fixture {}", config.fixture_path.display()))?;

    let pool = db::recreate(&config.database_path)
        .await
        .with_context(|| format!("creating store {}", config.database_path.display()))?;

    let mut options = GenerationOptions::from_config(config);
    options.fixture_path = fixture_path;

    let outcome = generate_and_report(&pool, config, &options).await;
    pool.close().await;
    outcome
}

async fn generate_and_report(
    pool: &SqlitePool,
    config: &Config,
    options: &GenerationOptions,
) -> Result<()> {
    let mut rng = ChaCha8Rng::from_os_rng();
    generator::generate(pool, &config.schema_dir, options, &mut rng)
        .await
        .context("generation rolled back")?;

    for count in db::table_counts(pool).await? {
        println!("{}", count.report_line()?);
    }
    Ok(())
}
