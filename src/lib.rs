//! # SmartVault 픽스처 생성기
//!
//! SQLite 저장소에 Account/User/Document 합성 데이터를 채우고,
//! 계정 단위로 문서 경로 조회, 파일 크기 합계, 내용 검색 내보내기를 제공합니다.
//!
//! 통합 테스트(tests/)와 바이너리(main.rs)가 이 라이브러리를 사용합니다.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
