//! OAuth 토큰 목(mock) 관리자
//!
//! 실제 OAuth 프로토콜은 구현하지 않습니다. 만료 확인, 토큰 갱신 흉내,
//! `OAuthIntegration` 테이블 저장만 합니다.

use crate::db;
use crate::error::AppError;
use crate::models::OAuthIntegration;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;

pub const REFRESHED_ACCESS_TOKEN: &str = "newAccessToken";
pub const REFRESHED_REFRESH_TOKEN: &str = "newRefreshToken";

#[derive(Debug, Clone)]
pub struct OAuthManager {
    integration: OAuthIntegration,
}

impl OAuthManager {
    pub fn new(integration: OAuthIntegration) -> Self {
        Self { integration }
    }

    pub fn integration(&self) -> &OAuthIntegration {
        &self.integration
    }

    /// 만료 시각이 `now`와 같거나 이전이면 만료된 것으로 봅니다.
    pub fn is_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.integration.token_expiration <= now
    }

    /// 새 토큰을 발급받은 것처럼 값을 바꾸고 만료 시각을 `now + 1시간`으로 설정합니다.
    pub fn refresh_token(&mut self, now: DateTime<Utc>) {
        self.integration.access_token = REFRESHED_ACCESS_TOKEN.to_string();
        self.integration.refresh_token = REFRESHED_REFRESH_TOKEN.to_string();
        self.integration.token_expiration = now + Duration::hours(1);
    }

    pub async fn store(&self, pool: &SqlitePool) -> Result<(), AppError> {
        db::upsert_oauth_integration(pool, &self.integration).await?;
        tracing::info!(
            "Saved OAuth data for account {} (expires {})",
            self.integration.account_id,
            self.integration.token_expiration
        );
        Ok(())
    }
}
