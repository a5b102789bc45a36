//! # 합성 데이터 생성기
//!
//! 스키마 생성과 Account/User/Document 대량 삽입을 **하나의 트랜잭션**으로 실행합니다.
//!
//! ## 생성 순서
//! 1. 스키마 디스크립터 적용 (services::schema)
//! 2. 계정 인덱스 `i`마다 Account(`Account{i}`)와 User(`FName{i}` 등) 한 행씩 삽입
//! 3. 계정마다 `documents_per_account`개의 Document 삽입.
//!    모든 문서는 같은 픽스처 파일을 가리키고, `Length`는 삽입 시점에 파일에서 다시 읽습니다.
//! 4. 커밋
//!
//! ## 원자성
//! 어느 단계에서든 에러가 나면 트랜잭션 전체를 롤백하고 에러를 반환합니다.
//! 일부 행만 남는 경우는 없습니다.

use crate::config::{Config, DEFAULT_ACCOUNT_COUNT, DEFAULT_DOCUMENTS_PER_ACCOUNT};
use crate::db;
use crate::error::AppError;
use crate::models::{Account, Document, User};
use crate::services::fixture;
use crate::services::random_day::{birth_date_floor, RandomDay};
use crate::services::schema;
use chrono::{Local, NaiveDate};
use rand::Rng;
use sqlx::{SqliteConnection, SqlitePool};
use std::path::{Path, PathBuf};

/// 생성 작업 매개변수
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub account_count: u32,
    pub documents_per_account: u32,
    /// 모든 문서가 가리키는 픽스처 파일
    pub fixture_path: PathBuf,
    /// 생년월일 범위의 상한(제외). 테스트에서 고정 날짜를 주입할 수 있습니다.
    pub today: NaiveDate,
}

impl GenerationOptions {
    pub fn new(fixture_path: impl Into<PathBuf>) -> Self {
        Self {
            account_count: DEFAULT_ACCOUNT_COUNT,
            documents_per_account: DEFAULT_DOCUMENTS_PER_ACCOUNT,
            fixture_path: fixture_path.into(),
            today: Local::now().date_naive(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            account_count: config.account_count,
            documents_per_account: config.documents_per_account,
            ..Self::new(config.fixture_path.clone())
        }
    }
}

/// 커밋된 행 수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub accounts: u64,
    pub users: u64,
    pub documents: u64,
}

/// 실행 전체에서 공유되는 Document ID 카운터
///
/// 계정이 바뀌어도 초기화되지 않으며, 삽입되는 행마다 정확히 한 번 증가합니다.
#[derive(Debug, Default)]
pub struct DocumentIdCounter {
    next: i64,
}

impl DocumentIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// 지금까지 발급한 ID 개수
    pub fn issued(&self) -> i64 {
        self.next
    }
}

/// 스키마 생성과 데이터 삽입을 한 트랜잭션으로 실행합니다.
///
/// 성공하면 한 번의 커밋으로 모든 행이 보이게 되고,
/// 실패하면 롤백 후 원래 에러를 반환합니다.
pub async fn generate<R: Rng>(
    pool: &SqlitePool,
    schema_dir: &Path,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GenerationSummary, AppError> {
    tracing::info!(
        "Generating {} accounts with {} documents each",
        options.account_count,
        options.documents_per_account
    );

    let mut tx = pool.begin().await?;

    let outcome = populate(&mut *tx, schema_dir, options, rng).await;
    match outcome {
        Ok(summary) => {
            tx.commit().await?;
            tracing::info!(
                "Committed {} accounts, {} users, {} documents",
                summary.accounts,
                summary.users,
                summary.documents
            );
            Ok(summary)
        }
        Err(e) => {
            tracing::error!("Generation failed, rolling back: {}", e);
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

async fn populate<R: Rng>(
    conn: &mut SqliteConnection,
    schema_dir: &Path,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GenerationSummary, AppError> {
    schema::load_and_apply(conn, schema_dir).await?;

    let document_path = std::path::absolute(&options.fixture_path)?;
    let file_path = document_path.to_string_lossy().into_owned();

    let mut birth_dates = RandomDay::new(rng, birth_date_floor(), options.today);
    let mut document_ids = DocumentIdCounter::new();
    let mut summary = GenerationSummary::default();

    for i in 0..options.account_count {
        let account_index = i64::from(i);

        db::insert_account(conn, &Account::generated(account_index)).await?;
        summary.accounts += 1;

        let date_of_birth = birth_dates.next().unwrap_or_else(birth_date_floor);
        db::insert_user(conn, &User::generated(account_index, date_of_birth)).await?;
        summary.users += 1;

        for position in 0..options.documents_per_account {
            let length = fixture::file_length(&document_path).await?;
            let document = Document {
                id: document_ids.next_id(),
                name: Document::generated_name(account_index, position),
                file_path: file_path.clone(),
                length: stored_length(&document_path, length)?,
                account_id: account_index,
            };
            db::insert_document(conn, &document).await?;
            summary.documents += 1;
        }

        tracing::debug!(
            "Account {} done ({} document ids issued)",
            account_index,
            document_ids.issued()
        );
    }

    Ok(summary)
}

/// 디스크 크기를 `Length` 컬럼 값으로 바꿉니다. 담을 수 없으면 에러입니다.
fn stored_length(path: &Path, length: u64) -> Result<i64, AppError> {
    i64::try_from(length).map_err(|_| AppError::FileTooLarge {
        path: path.to_path_buf(),
        length,
    })
}
