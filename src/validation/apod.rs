//! Picture-of-the-day query validation.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{GatewayError, Result};

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// First day the provider has a picture for.
pub fn earliest_apod_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

/// Normalized picture-of-the-day query.
///
/// `date: None` means "today", left to the provider's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApodQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Validates an optional `YYYY-MM-DD` date against today's UTC date.
pub fn validate_apod_query(raw_date: Option<&str>) -> Result<ApodQuery> {
    validate_apod_query_on(raw_date, Utc::now().date_naive())
}

/// Validates an optional `YYYY-MM-DD` date against an explicit `today`.
pub fn validate_apod_query_on(raw_date: Option<&str>, today: NaiveDate) -> Result<ApodQuery> {
    let Some(raw) = raw_date else {
        return Ok(ApodQuery::default());
    };

    if !DATE_PATTERN.is_match(raw) {
        return Err(GatewayError::Validation(
            "Invalid date format. Please use YYYY-MM-DD.".to_string(),
        ));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        GatewayError::Validation(format!("Invalid date: {} is not a calendar day.", raw))
    })?;

    if date > today {
        return Err(GatewayError::Validation(
            "Date cannot be in the future.".to_string(),
        ));
    }

    let earliest = earliest_apod_date();
    if date < earliest {
        return Err(GatewayError::Validation(format!(
            "Date cannot be earlier than {}.",
            earliest.format("%Y-%m-%d")
        )));
    }

    Ok(ApodQuery {
        date: Some(raw.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn message(result: Result<ApodQuery>) -> String {
        result.unwrap_err().message().to_string()
    }

    #[test]
    fn test_absent_date_is_default() {
        let query = validate_apod_query_on(None, today()).unwrap();
        assert_eq!(query, ApodQuery::default());
    }

    #[test]
    fn test_valid_date_passes_through() {
        let query = validate_apod_query_on(Some("2023-01-01"), today()).unwrap();
        assert_eq!(query.date.as_deref(), Some("2023-01-01"));
    }

    #[test]
    fn test_bad_format() {
        for raw in ["2023/01/01", "23-01-01", "2023-1-1", "", "2023-01-01 ", "abcd-ef-gh"] {
            let err = validate_apod_query_on(Some(raw), today()).unwrap_err();
            assert_eq!(err.status_code(), 400, "input {:?}", raw);
            assert!(err.message().starts_with("Invalid date format"));
        }
    }

    #[test]
    fn test_impossible_calendar_day() {
        let err = validate_apod_query_on(Some("2023-02-30"), today()).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_future_date() {
        assert_eq!(
            message(validate_apod_query_on(Some("2024-03-11"), today())),
            "Date cannot be in the future."
        );
    }

    #[test]
    fn test_today_is_allowed() {
        assert!(validate_apod_query_on(Some("2024-03-10"), today()).is_ok());
    }

    #[test]
    fn test_earliest_boundary() {
        assert!(validate_apod_query_on(Some("1995-06-16"), today()).is_ok());
        assert_eq!(
            message(validate_apod_query_on(Some("1995-06-15"), today())),
            "Date cannot be earlier than 1995-06-16."
        );
        assert_eq!(
            message(validate_apod_query_on(Some("1990-01-01"), today())),
            "Date cannot be earlier than 1995-06-16."
        );
    }

    #[test]
    fn test_uses_current_utc_day() {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(validate_apod_query(Some(&today)).is_ok());
    }
}
