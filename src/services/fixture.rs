//! 생성된 모든 문서가 가리키는 공용 픽스처 파일을 다룹니다.
//!
//! 문서별 내용은 의미가 없고, 파일의 존재와 크기만 중요합니다.

use crate::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 기본 픽스처 내용 (세 줄)
pub fn fixture_content() -> String {
    ["This is my test document", "This is my test document", "..."].join("\n")
}

/// 픽스처 파일을 (덮어)쓰고 절대 경로를 반환합니다.
pub async fn write_fixture(path: &Path) -> Result<PathBuf, AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, fixture_content()).await?;

    let absolute = std::path::absolute(path)?;
    tracing::info!("Wrote fixture document {}", absolute.display());
    Ok(absolute)
}

/// 픽스처로 쓸 파일을 준비하고 절대 경로를 반환합니다.
///
/// 이미 있는 파일은 내용을 건드리지 않고 그대로 사용합니다.
/// 파일이 없을 때만 기본 내용으로 새로 씁니다.
pub async fn ensure_fixture(path: &Path) -> Result<PathBuf, AppError> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => {
            let absolute = std::path::absolute(path)?;
            tracing::info!(
                "Using existing fixture document {} ({} bytes)",
                absolute.display(),
                metadata.len()
            );
            Ok(absolute)
        }
        Ok(_) => Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            format!("fixture path {} is not a regular file", path.display()),
        )
        .into()),
        Err(e) if e.kind() == ErrorKind::NotFound => write_fixture(path).await,
        Err(e) => Err(e.into()),
    }
}

/// 파일의 현재 디스크 상 크기(바이트)
pub async fn file_length(path: &Path) -> Result<u64, AppError> {
    Ok(fs::metadata(path).await?.len())
}
