//! # 서비스 계층
//!
//! DB 접근 계층(db/) 위에서 파일 I/O와 생성/조회 로직을 담당합니다.
//!
//! - `schema`: 스키마 디스크립터 로딩/적용
//! - `generator`: 단일 트랜잭션 대량 생성
//! - `random_day`: 생년월일 난수 이터레이터
//! - `fixture`: 공용 픽스처 문서
//! - `vault`: 계정 단위 문서 조회/집계/내보내기
//! - `oauth`: OAuth 토큰 목 관리자

pub mod fixture;
pub mod generator;
pub mod oauth;
pub mod random_day;
pub mod schema;
pub mod vault;

pub use generator::{generate, GenerationOptions, GenerationSummary};
pub use vault::{
    account_file_sizes, export_filtered_content, list_document_paths, total_file_size,
};
