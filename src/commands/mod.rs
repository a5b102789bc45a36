//! 서브커맨드 실행부
//!
//! 각 커맨드는 자신의 저장소 핸들(풀)을 열고, 성공/실패와 관계없이 닫은 뒤 결과를 반환합니다.

pub mod generate;
pub mod query;
