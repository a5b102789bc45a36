//! 생성 직후 테이블별 행 수를 확인하는 조회입니다.
//! 관찰 전용이며 상태를 바꾸지 않습니다.

use crate::error::AppError;
use serde::Serialize;
use sqlx::SqlitePool;

/// (보고용 라벨, 테이블 이름)
pub const COUNTED_TABLES: [(&str, &str); 4] = [
    ("AccountCount", "Account"),
    ("DocumentCount", "Document"),
    ("UserCount", "User"),
    ("OAuthCount", "OAuthIntegration"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    pub label: &'static str,
    pub table: &'static str,
    pub rows: i64,
}

/// `SELECT COUNT(*)` 결과 한 행의 JSON 모양
#[derive(Debug, Serialize)]
struct CountRow {
    #[serde(rename = "COUNT(*)")]
    count: i64,
}

impl TableCount {
    /// 보고 한 줄: `AccountCount: [{"COUNT(*)":3}]`
    pub fn report_line(&self) -> Result<String, serde_json::Error> {
        let rows = serde_json::to_string(&[CountRow { count: self.rows }])?;
        Ok(format!("{}: {}", self.label, rows))
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64, AppError> {
    // 테이블 이름은 바인딩할 수 없어 고정 목록에서만 가져옵니다.
    let sql = format!("SELECT COUNT(*) FROM \"{table}\"");
    let rows: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(rows)
}

pub async fn table_counts(pool: &SqlitePool) -> Result<Vec<TableCount>, AppError> {
    let mut counts = Vec::with_capacity(COUNTED_TABLES.len());
    for (label, table) in COUNTED_TABLES {
        let rows = count_rows(pool, table).await?;
        counts.push(TableCount { label, table, rows });
    }
    Ok(counts)
}
