use crate::error::AppError;
use crate::models::OAuthIntegration;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub async fn upsert_oauth_integration(
    pool: &SqlitePool,
    integration: &OAuthIntegration,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO OAuthIntegration (Id, AccountId, AccessToken, RefreshToken, TokenExpiration)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(Id) DO UPDATE SET
            AccountId = excluded.AccountId,
            AccessToken = excluded.AccessToken,
            RefreshToken = excluded.RefreshToken,
            TokenExpiration = excluded.TokenExpiration
        "#,
    )
    .bind(integration.id)
    .bind(integration.account_id)
    .bind(&integration.access_token)
    .bind(&integration.refresh_token)
    .bind(integration.token_expiration.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_oauth_integration(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<OAuthIntegration>, AppError> {
    let row = sqlx::query_as::<_, (i64, i64, String, String, String)>(
        r#"
        SELECT Id, AccountId, AccessToken, RefreshToken, TokenExpiration
        FROM OAuthIntegration
        WHERE Id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some((id, account_id, access_token, refresh_token, expiration)) = row else {
        return Ok(None);
    };

    let token_expiration = DateTime::parse_from_rfc3339(&expiration)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Some(OAuthIntegration {
        id,
        account_id,
        access_token,
        refresh_token,
        token_expiration,
    }))
}
