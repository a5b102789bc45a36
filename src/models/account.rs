#[derive(Debug, Clone, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
}

impl Account {
    /// 생성 인덱스 `i`에 대응하는 결정적(deterministic) 계정 행
    pub fn generated(index: i64) -> Self {
        Self {
            id: index,
            name: format!("Account{index}"),
        }
    }
}
