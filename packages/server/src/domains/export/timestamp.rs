use chrono::DateTime;
use serde_json::Value;

/// Shown wherever a timestamp is missing or unreadable.
pub const MISSING_TIMESTAMP: &str = "-";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render epoch seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Accepts integers, floats (truncated) and integral strings. Anything else,
/// including values chrono cannot represent, renders as [`MISSING_TIMESTAMP`].
pub fn format_timestamp(value: Option<&Value>) -> String {
    value
        .and_then(epoch_seconds)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_TIMESTAMP.to_string())
}

/// String form of [`format_timestamp`] for values that arrive as text.
pub fn format_timestamp_str(value: Option<&str>) -> String {
    format_timestamp(value.map(|s| Value::String(s.to_string())).as_ref())
}

fn epoch_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_epoch_string_formats() {
        assert_eq!(
            format_timestamp_str(Some("1700000000")),
            "2023-11-14 22:13:20"
        );
    }

    #[test]
    fn test_epoch_number_formats() {
        assert_eq!(format_timestamp(Some(&json!(0))), "1970-01-01 00:00:00");
        assert_eq!(
            format_timestamp(Some(&json!(1700000000.9))),
            "2023-11-14 22:13:20"
        );
    }

    #[test]
    fn test_unreadable_values_fall_back() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp_str(None), "-");
        assert_eq!(format_timestamp_str(Some("")), "-");
        assert_eq!(format_timestamp_str(Some("abc")), "-");
        assert_eq!(format_timestamp_str(Some("2024-03-01T10:00:00.000Z")), "-");
        assert_eq!(format_timestamp(Some(&Value::Null)), "-");
        assert_eq!(format_timestamp(Some(&json!(true))), "-");
        assert_eq!(format_timestamp(Some(&json!(["1700000000"]))), "-");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(format_timestamp(Some(&json!(i64::MAX))), "-");
        assert_eq!(format_timestamp(Some(&json!(1e300))), "-");
    }
}
