//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! SQLite 저장소와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 생성기(services::generator)와 조회 서비스(services::vault)가 이 모듈을 사용합니다.
//!
//! 각 하위 모듈:
//! - `accounts`: Account 테이블 삽입/조회
//! - `users`: User 테이블 삽입
//! - `documents`: Document 테이블 삽입/경로 조회
//! - `counts`: 생성 후 테이블별 행 수 확인
//! - `oauth`: OAuthIntegration 테이블 저장/조회
//!
//! 삽입 함수는 `&mut SqliteConnection`을 받습니다. 트랜잭션(`&mut *tx`)을 그대로
//! 넘길 수 있어서 생성 작업 전체가 하나의 트랜잭션 안에서 실행됩니다.
//! 조회 함수는 `&SqlitePool`을 받습니다.

pub mod accounts;
pub mod counts;
pub mod documents;
pub mod oauth;
pub mod users;

pub use accounts::*;
pub use counts::*;
pub use documents::*;
pub use oauth::*;
pub use users::*;

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 저장소 파일에 연결합니다. 파일이 없으면 새로 만듭니다.
///
/// 한 번에 한 호출자만 저장소를 사용하므로 연결은 1개로 제한합니다.
/// 호출자가 풀을 소유하고, 끝나면 `pool.close().await`로 닫습니다.
pub async fn connect(database_path: &Path) -> Result<SqlitePool, AppError> {
    open(database_path, true).await
}

/// 이미 생성된 저장소 파일에만 연결합니다. 파일이 없으면 에러입니다.
pub async fn open_existing(database_path: &Path) -> Result<SqlitePool, AppError> {
    open(database_path, false).await
}

async fn open(database_path: &Path, create_if_missing: bool) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// 기존 저장소 파일(과 저널 파일)을 지우고 빈 저장소를 새로 만듭니다.
pub async fn recreate(database_path: &Path) -> Result<SqlitePool, AppError> {
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    for path in store_files(database_path) {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!("Removed existing store file {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!("Creating store at {}", database_path.display());
    connect(database_path).await
}

fn store_files(database_path: &Path) -> [PathBuf; 3] {
    let with_suffix = |suffix: &str| {
        let mut name = database_path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    };
    [
        database_path.to_path_buf(),
        with_suffix("-wal"),
        with_suffix("-shm"),
    ]
}
