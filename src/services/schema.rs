//! # 스키마 로더
//!
//! `schema/` 디렉토리의 디스크립터(JSON)를 읽어, 각 디스크립터에 담긴 DDL 스크립트를
//! 호출자의 트랜잭션 안에서 실행합니다.
//!
//! - 파일 이름순으로 정렬하므로 실행 순서는 항상 같습니다.
//! - 디렉토리가 없거나, 디스크립터가 하나도 없거나, 파싱에 실패하거나,
//!   `Script`가 비어 있으면 에러를 반환합니다. 테이블을 조용히 건너뛰지 않습니다.
//! - 중복 제거는 하지 않습니다. 재실행 안전성은 스크립트의
//!   `CREATE ... IF NOT EXISTS`에 달려 있습니다.

use crate::error::AppError;
use crate::models::BusinessObject;
use sqlx::SqliteConnection;
use std::path::{Path, PathBuf};
use tokio::fs;

const DESCRIPTOR_EXTENSION: &str = "json";

/// 디렉토리 안의 디스크립터 파일 경로를 파일 이름순으로 반환합니다.
pub async fn descriptor_paths(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut entries = fs::read_dir(dir).await.map_err(|e| {
        AppError::Schema(format!("cannot read schema directory {}: {e}", dir.display()))
    })?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_descriptor = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXTENSION));
        if is_descriptor && entry.file_type().await?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// 디스크립터 파일 하나를 읽어 `BusinessObject`로 변환합니다.
pub async fn load_descriptor(path: &Path) -> Result<BusinessObject, AppError> {
    let raw = fs::read_to_string(path).await?;
    let descriptor: BusinessObject =
        serde_json::from_str(&raw).map_err(|source| AppError::Descriptor {
            path: path.to_path_buf(),
            source,
        })?;

    let has_script = descriptor
        .script
        .as_deref()
        .is_some_and(|script| !script.trim().is_empty());
    if !has_script {
        return Err(AppError::Schema(format!(
            "descriptor {} has no Script",
            path.display()
        )));
    }

    Ok(descriptor)
}

/// 디렉토리의 모든 디스크립터를 정해진 순서로 읽습니다.
pub async fn load_descriptors(dir: &Path) -> Result<Vec<BusinessObject>, AppError> {
    let paths = descriptor_paths(dir).await?;
    if paths.is_empty() {
        return Err(AppError::Schema(format!(
            "no schema descriptors found in {}",
            dir.display()
        )));
    }

    let mut descriptors = Vec::with_capacity(paths.len());
    for path in &paths {
        descriptors.push(load_descriptor(path).await?);
    }
    Ok(descriptors)
}

/// 디스크립터의 스크립트를 그대로 실행합니다.
///
/// `conn`에 트랜잭션(`&mut *tx`)을 넘기면 DDL도 그 트랜잭션에 포함되어,
/// 이후 단계가 실패했을 때 함께 롤백됩니다.
pub async fn apply_descriptors(
    conn: &mut SqliteConnection,
    descriptors: &[BusinessObject],
) -> Result<(), AppError> {
    for descriptor in descriptors {
        let Some(script) = descriptor.script.as_deref() else {
            continue;
        };
        let name = descriptor.name.as_deref().unwrap_or("<unnamed>");

        // 스크립트에 여러 문장이 있을 수 있으므로 raw_sql로 실행합니다.
        sqlx::raw_sql(script)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::Schema(format!("script for {name} failed: {e}")))?;

        tracing::debug!("Applied schema descriptor {}", name);
    }
    Ok(())
}

/// 디렉토리를 읽고 곧바로 적용합니다.
pub async fn load_and_apply(conn: &mut SqliteConnection, dir: &Path) -> Result<usize, AppError> {
    let descriptors = load_descriptors(dir).await?;
    apply_descriptors(conn, &descriptors).await?;
    tracing::info!(
        "Applied {} schema descriptors from {}",
        descriptors.len(),
        dir.display()
    );
    Ok(descriptors.len())
}
