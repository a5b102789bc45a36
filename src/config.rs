//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_PATH`: SQLite 데이터베이스 파일 경로
//! - `SCHEMA_DIR`: 스키마 디스크립터(JSON) 디렉토리
//! - `FIXTURE_PATH`: 모든 생성 문서가 가리키는 픽스처 파일 경로
//! - `ACCOUNT_COUNT`: 생성할 계정 수
//! - `DOCUMENTS_PER_ACCOUNT`: 계정당 생성할 문서 수

use std::env;
use std::path::PathBuf;

pub const DEFAULT_ACCOUNT_COUNT: u32 = 100;
pub const DEFAULT_DOCUMENTS_PER_ACCOUNT: u32 = 10_000;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 시작 시 환경변수에서 한 번 읽어온 후, CLI 플래그로 일부 값을 덮어씁니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 파일 경로 (기본값: "data/smartvault.sqlite")
    pub database_path: PathBuf,
    /// 스키마 디스크립터 디렉토리 (기본값: "schema")
    pub schema_dir: PathBuf,
    /// 픽스처 문서 파일 경로 (기본값: "TestDoc.txt")
    pub fixture_path: PathBuf,
    /// 생성할 계정 수 (기본값: 100)
    pub account_count: u32,
    /// 계정당 문서 수 (기본값: 10000)
    pub documents_per_account: u32,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있어 환경변수가 없어도 동작합니다.
    /// 숫자 항목은 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/smartvault.sqlite".to_string())
                .into(),
            schema_dir: env::var("SCHEMA_DIR")
                .unwrap_or_else(|_| "schema".to_string())
                .into(),
            fixture_path: env::var("FIXTURE_PATH")
                .unwrap_or_else(|_| "TestDoc.txt".to_string())
                .into(),
            account_count: parse_or(env::var("ACCOUNT_COUNT").ok(), DEFAULT_ACCOUNT_COUNT),
            documents_per_account: parse_or(
                env::var("DOCUMENTS_PER_ACCOUNT").ok(),
                DEFAULT_DOCUMENTS_PER_ACCOUNT,
            ),
        }
    }
}

fn parse_or(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
