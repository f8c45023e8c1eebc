//! Date parsing for ClickUp's epoch-millisecond fields.

use chrono::{DateTime, NaiveDate};

use super::error::{ApiError, ApiResult};

/// Convert a caller-supplied date into epoch milliseconds.
///
/// Accepts raw milliseconds (`"1735689600000"`), RFC 3339
/// (`"2025-01-01T09:00:00Z"`) or a plain date (`"2025-01-01"`, midnight UTC).
pub fn to_millis(input: &str) -> ApiResult<i64> {
    let input = input.trim();

    if let Ok(ms) = input.parse::<i64>() {
        return Ok(ms);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.timestamp_millis());
    }

    if let Some(dt) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(dt.and_utc().timestamp_millis());
    }

    Err(ApiError::InvalidRequest {
        message: format!(
            "Unrecognized date '{}'. Use RFC 3339, YYYY-MM-DD or epoch milliseconds",
            input
        ),
    })
}

/// [`to_millis`] for optional inputs.
pub fn opt_millis(input: Option<&str>) -> ApiResult<Option<i64>> {
    input.map(to_millis).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_formats() {
        assert_eq!(to_millis("1735689600000").unwrap(), 1_735_689_600_000);
        assert_eq!(to_millis("2025-01-01T00:00:00Z").unwrap(), 1_735_689_600_000);
        assert_eq!(
            to_millis("2025-01-01T01:00:00+01:00").unwrap(),
            1_735_689_600_000
        );
        assert_eq!(to_millis("2025-01-01").unwrap(), 1_735_689_600_000);
    }

    #[test]
    fn rejects_garbage() {
        let err = to_millis("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn optional_passthrough() {
        assert_eq!(opt_millis(None).unwrap(), None);
        assert_eq!(opt_millis(Some("0")).unwrap(), Some(0));
    }
}
