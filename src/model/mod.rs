pub mod absence;
pub mod identity;
pub mod leave_request;
pub mod role;

use chrono::NaiveDate;

use crate::error::CoreError;

pub(crate) fn parse_date(field: &'static str, raw: Option<&str>) -> Result<NaiveDate, CoreError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or(CoreError::missing(field))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CoreError::malformed(field))
}

pub(crate) fn required_text(field: &'static str, raw: Option<String>) -> Result<String, CoreError> {
    match raw.map(|s| s.trim().to_string()) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(CoreError::missing(field)),
    }
}
