//! # 문서(Document) 테이블 쿼리 모듈
//!
//! 생성기가 사용하는 삽입 함수와, 조회 서비스가 사용하는
//! 계정 단위 조회 함수들이 정의되어 있습니다.

use crate::error::AppError;
use crate::models::Document;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn insert_document(
    conn: &mut SqliteConnection,
    document: &Document,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO Document (Id, Name, FilePath, Length, AccountId)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(document.id)
    .bind(&document.name)
    .bind(&document.file_path)
    .bind(document.length)
    .bind(document.account_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// 계정이 소유한 문서들의 `FilePath`를 조회합니다.
///
/// 순서는 삽입 순서(rowid)입니다. 같은 저장소 상태에서는 항상 같은 순서가 나오지만,
/// 그 이상의 정렬은 보장하지 않습니다.
///
/// `account_id`는 문자열로 바인딩됩니다. SQLite는 INTEGER 컬럼과 비교할 때
/// 숫자로 변환하므로 `"5"`는 정수 ID 5와 일치합니다.
pub async fn list_document_paths(
    pool: &SqlitePool,
    account_id: &str,
) -> Result<Vec<String>, AppError> {
    let paths = sqlx::query_scalar::<_, String>(
        "SELECT FilePath FROM Document WHERE AccountId = ? ORDER BY rowid",
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(paths)
}

pub async fn list_documents(
    pool: &SqlitePool,
    account_id: &str,
) -> Result<Vec<Document>, AppError> {
    let documents = sqlx::query_as::<_, Document>(
        r#"
        SELECT Id, Name, FilePath, Length, AccountId
        FROM Document
        WHERE AccountId = ?
        ORDER BY Id
        "#,
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(documents)
}
