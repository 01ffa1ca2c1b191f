use chrono::NaiveDate;
use thiserror::Error;

/// Registry date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur when reading a registry date
#[derive(Debug, Error)]
pub enum DateError {
    #[error("Malformed date '{value}': {source}")]
    Malformed {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DateError::Malformed {
        value: value.to_string(),
        source,
    })
}

/// Absolute number of days between two dates
pub fn days_between(a: &str, b: &str) -> Result<i64, DateError> {
    let a = parse_date(a)?;
    let b = parse_date(b)?;
    Ok((a - b).num_days().abs())
}
