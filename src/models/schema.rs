use serde::Deserialize;

/// 스키마 디스크립터 — `schema/*.json` 파일 하나에 대응합니다.
///
/// ```json
/// { "Name": "Account", "Script": "CREATE TABLE IF NOT EXISTS Account (...);" }
/// ```
///
/// `Script`는 검증 없이 그대로 실행되는 DDL입니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub script: Option<String>,
}
