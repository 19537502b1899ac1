use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Build the service instant from `--service-date` / `--service-time`.
///
/// A time without a date is rejected; a date without a time means midnight.
pub fn parse_service_at(
    date: Option<&str>,
    time: Option<&str>,
) -> AppResult<Option<NaiveDateTime>> {
    match (date, time) {
        (None, None) => Ok(None),
        (None, Some(t)) => Err(AppError::InvalidDate(format!(
            "service time '{t}' given without a service date"
        ))),
        (Some(d), t) => {
            let day = parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            let at = match t {
                Some(t) => parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?,
                None => NaiveTime::MIN,
            };
            Ok(Some(day.and_time(at)))
        }
    }
}
