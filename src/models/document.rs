#[derive(Debug, Clone, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Document {
    pub id: i64,
    pub name: String,
    /// 디스크 상의 절대 경로
    pub file_path: String,
    /// 생성 시점의 실제 파일 크기(바이트)
    pub length: i64,
    pub account_id: i64,
}

impl Document {
    /// `account_index` 계정의 `position`번째 문서 이름: `Document{i}-{d}.txt`
    pub fn generated_name(account_index: i64, position: u32) -> String {
        format!("Document{account_index}-{position}.txt")
    }
}

/// 필터링 내보내기(export) 결과
///
/// - `written`: 검색어가 포함되어 출력 파일에 기록된 문서 수
/// - `skipped`: 디스크에 없어서(또는 읽기 직전에 사라져서) 건너뛴 문서 수
/// - `aborted`: 예상치 못한 에러로 작업이 중간에 멈췄는지 여부
///
/// "일치 항목 없음"과 "도중 실패"를 호출자가 구분할 수 있게 합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: usize,
    pub skipped: usize,
    pub aborted: bool,
}
