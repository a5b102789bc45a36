use crate::error::AppError;
use crate::models::Account;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn insert_account(conn: &mut SqliteConnection, account: &Account) -> Result<(), AppError> {
    sqlx::query("INSERT INTO Account (Id, Name) VALUES (?, ?)")
        .bind(account.id)
        .bind(&account.name)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// 모든 계정 ID를 저장 순서대로 문자열로 반환합니다.
///
/// ID 컬럼이 INTEGER든 TEXT든 같은 형태로 다룰 수 있도록 TEXT로 캐스팅합니다.
pub async fn list_account_ids(pool: &SqlitePool) -> Result<Vec<String>, AppError> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT CAST(Id AS TEXT) FROM Account ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

pub async fn list_accounts(pool: &SqlitePool) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>("SELECT Id, Name FROM Account ORDER BY Id")
        .fetch_all(pool)
        .await?;

    Ok(accounts)
}
