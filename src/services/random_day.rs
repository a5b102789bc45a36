use chrono::{Duration, NaiveDate};
use rand::Rng;

/// 생년월일 하한: 1985-01-01
pub fn birth_date_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1985, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// `[start, today)` 범위에서 날짜를 균등하게 뽑는 무한 이터레이터
///
/// 매 호출은 독립적으로 뽑으므로 같은 날짜가 여러 번 나올 수 있습니다.
/// 범위가 비어 있으면(today <= start) 항상 `start`를 반환합니다.
pub struct RandomDay<'a, R: Rng> {
    rng: &'a mut R,
    start: NaiveDate,
    range_days: i64,
}

impl<'a, R: Rng> RandomDay<'a, R> {
    pub fn new(rng: &'a mut R, start: NaiveDate, today: NaiveDate) -> Self {
        Self {
            rng,
            start,
            range_days: (today - start).num_days(),
        }
    }
}

impl<R: Rng> Iterator for RandomDay<'_, R> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.range_days <= 0 {
            return Some(self.start);
        }
        let offset = self.rng.random_range(0..self.range_days);
        Some(self.start + Duration::days(offset))
    }
}
