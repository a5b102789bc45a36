//! # 데이터 모델 모듈
//!
//! 저장소 테이블과 스키마 디스크립터에 대응하는 구조체들을 정의합니다.
//! - `account`, `user`, `document`: 생성기가 채우는 세 테이블
//! - `oauth`: 스키마만 존재하는 `OAuthIntegration` 테이블
//! - `schema`: 스키마 디스크립터(`BusinessObject`)

pub mod account;
pub mod document;
pub mod oauth;
pub mod schema;
pub mod user;

pub use account::*;
pub use document::*;
pub use oauth::*;
pub use schema::*;
pub use user::*;
