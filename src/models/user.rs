use chrono::NaiveDate;

/// 모든 생성 사용자에게 동일하게 저장되는 고정 비밀번호 다이제스트 (32자리 hex).
/// 픽스처 전용 값이며 보안 기능이 아닙니다.
pub const FIXTURE_PASSWORD_HASH: &str = "e10adc3949ba59abbe56e057f20f883e";

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    /// 계정 인덱스와 같은 ID를 갖는 사용자 행 (계정 1개당 사용자 1명)
    pub fn generated(index: i64, date_of_birth: NaiveDate) -> Self {
        Self {
            id: index,
            first_name: format!("FName{index}"),
            last_name: format!("LName{index}"),
            date_of_birth,
            account_id: index,
            username: format!("UserName-{index}"),
            password: FIXTURE_PASSWORD_HASH.to_string(),
        }
    }
}
