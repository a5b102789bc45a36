//! # 계정 단위 문서 조회 서비스
//!
//! 생성된 저장소와 디스크 파일을 대상으로 하는 읽기 전용 작업들입니다.
//!
//! - `list_document_paths()`: 계정의 문서 경로 목록 (삽입 순서)
//! - `total_file_size()`: 경로 목록에 있는 파일들의 **현재 디스크 크기** 합계
//! - `export_filtered_content()`: 2, 5, 8, … 번째 문서 중 검색어를 포함한 문서를
//!   출력 파일로 내보내기
//!
//! ## 에러 정책
//! 디스크에 없는 파일은 에러가 아니라 "0바이트 / 건너뜀"으로 처리합니다.
//! 내보내기 도중의 그 밖의 실패는 로그로만 남기고 `ExportReport::aborted`로 표시합니다.

use crate::db;
use crate::error::AppError;
use crate::models::ExportReport;
use sqlx::SqlitePool;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};

/// `query` 커맨드의 기본 검색어
pub const DEFAULT_SEARCH_TEXT: &str = "Smith Property";

const EXPORT_FIRST_INDEX: usize = 2;
const EXPORT_STRIDE: usize = 3;

/// 내보내기 대상 인덱스: 2, 5, 8, … (`len` 미만)
pub fn export_indices(len: usize) -> impl Iterator<Item = usize> {
    (EXPORT_FIRST_INDEX..len).step_by(EXPORT_STRIDE)
}

/// 출력 파일에 기록되는 한 항목: 구분선, 내용, 빈 줄
pub fn format_entry(path: &str, content: &str) -> String {
    format!("--- Content from {path} ---\n{content}\n\n")
}

/// 계정이 소유한 문서들의 파일 경로를 반환합니다.
pub async fn list_document_paths(
    pool: &SqlitePool,
    account_id: &str,
) -> Result<Vec<String>, AppError> {
    db::list_document_paths(pool, account_id).await
}

/// 계정 문서 파일들의 실제 디스크 크기 합계(바이트)
///
/// 저장된 `Length` 컬럼이 아니라 매번 파일 메타데이터를 다시 읽습니다.
/// 존재하지 않거나 일반 파일이 아닌 경로는 0으로 계산합니다.
/// 문서가 없거나 모르는 계정이면 0입니다.
pub async fn total_file_size(pool: &SqlitePool, account_id: &str) -> Result<u64, AppError> {
    let paths = db::list_document_paths(pool, account_id).await?;

    let mut total = 0u64;
    for path in &paths {
        if let Some(len) = existing_file_len(Path::new(path)).await {
            total += len;
        }
    }
    Ok(total)
}

/// Account 테이블의 모든 계정에 대해 `(계정 ID, 파일 크기 합계)`를 반환합니다.
pub async fn account_file_sizes(pool: &SqlitePool) -> Result<Vec<(String, u64)>, AppError> {
    let account_ids = db::list_account_ids(pool).await?;

    let mut sizes = Vec::with_capacity(account_ids.len());
    for account_id in account_ids {
        let total = total_file_size(pool, &account_id).await?;
        sizes.push((account_id, total));
    }
    Ok(sizes)
}

/// 2, 5, 8, … 번째 문서 중 `search_text`(대소문자 구분, 부분 문자열)를 포함한 문서를
/// `output_path`에 기록합니다.
///
/// - 출력 디렉토리가 없으면 만들고, 출력 파일은 항상 새로 만듭니다(일치 항목이 없으면 빈 파일).
/// - 디스크에 없는 문서, 읽기 직전에 사라진 문서는 건너뛰고 `skipped`에 셉니다.
/// - 그 밖의 에러는 이 함수 밖으로 나가지 않습니다. 로그를 남기고 `aborted = true`로 반환합니다.
pub async fn export_filtered_content(
    pool: &SqlitePool,
    account_id: &str,
    output_path: &Path,
    search_text: &str,
) -> ExportReport {
    let mut report = ExportReport::default();

    match write_filtered_content(pool, account_id, output_path, search_text, &mut report).await {
        Ok(()) => {
            tracing::info!(
                "Output written to {} ({} written, {} skipped)",
                output_path.display(),
                report.written,
                report.skipped
            );
        }
        Err(e) => {
            tracing::error!(
                "Export for account {} stopped after {} entries: {}",
                account_id,
                report.written,
                e
            );
            report.aborted = true;
        }
    }

    report
}

async fn write_filtered_content(
    pool: &SqlitePool,
    account_id: &str,
    output_path: &Path,
    search_text: &str,
    report: &mut ExportReport,
) -> Result<(), AppError> {
    let paths = db::list_document_paths(pool, account_id).await?;

    if let Some(dir) = output_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).await?;
        }
    }

    let mut writer = BufWriter::new(fs::File::create(output_path).await?);

    for index in export_indices(paths.len()) {
        let path = &paths[index];

        let Some(content) = read_document(Path::new(path)).await? else {
            tracing::debug!("Skipping missing document {}", path);
            report.skipped += 1;
            continue;
        };

        if content.contains(search_text) {
            writer.write_all(format_entry(path, &content).as_bytes()).await?;
            report.written += 1;
        }
    }

    writer.flush().await?;
    Ok(())
}

/// 일반 파일이면 크기, 없거나 읽을 수 없으면 None
async fn existing_file_len(path: &Path) -> Option<u64> {
    match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => Some(metadata.len()),
        _ => None,
    }
}

/// 문서 파일 전체를 텍스트로 읽습니다. 잘못된 UTF-8 바이트는 대체 문자로 바뀝니다.
///
/// 파일이 없으면(확인 후 읽기 전에 사라진 경우 포함) `Ok(None)`입니다.
async fn read_document(path: &Path) -> Result<Option<String>, AppError> {
    if existing_file_len(path).await.is_none() {
        return Ok(None);
    }

    match fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
