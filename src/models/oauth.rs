use chrono::{DateTime, Utc};

/// OAuth 토큰/만료 레코드 — DB의 `OAuthIntegration` 테이블 한 행에 대응합니다.
///
/// 생성기는 이 테이블을 채우지 않습니다. 스키마만 만들어집니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthIntegration {
    pub id: i64,
    pub account_id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub token_expiration: DateTime<Utc>,
}
