//! # 에러 처리 모듈
//!
//! 라이브러리 전체에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 스키마/DB/파일 I/O 에러를 하나의 타입으로 통합
//! - 생성(generate) 경로는 `AppError`를 그대로 호출자에게 전파하고,
//!   조회/내보내기 경로는 파일 단위 에러를 삼키고 로그로만 남깁니다.

use std::path::PathBuf;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
#[derive(Debug, Error)]
pub enum AppError {
    /// 스키마 디스크립터 디렉토리/스크립트 문제 (생성 트랜잭션 전체를 중단시킴)
    #[error("Schema error: {0}")]
    Schema(String),

    /// 디스크립터 JSON 파싱 실패
    #[error("Malformed schema descriptor {}: {source}", .path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 데이터베이스 오류
    /// #[from]: sqlx 함수의 에러에 `?`를 쓰면 자동으로 AppError::Database로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 파일 크기가 `Length` 컬럼(i64)에 담을 수 없을 만큼 큼
    #[error("File {} is too large to record ({length} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, length: u64 },

    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
