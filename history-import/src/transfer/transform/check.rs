//! Optional format check for historical timestamps.
//!
//! Checking never changes what gets copied: a malformed value still lands in
//! the draft verbatim, the check only reports it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::transfer::Value;

/// Format of the legacy export's timestamp columns
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to do with timestamp values that don't match the expected format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateCheck {
    /// Copy without looking (default)
    #[default]
    Off,
    /// Copy, but write a warning to the import log
    Warn,
}

/// Describe why `value` isn't a timestamp in `format`, or None if it is one
pub fn malformed_timestamp(value: &Value, format: &str) -> Option<String> {
    match value {
        Value::DateTime(_) => None,
        Value::String(s) => {
            if NaiveDateTime::parse_from_str(s, format).is_ok()
                || NaiveDate::parse_from_str(s, format).is_ok()
            {
                None
            } else {
                Some(format!("'{}' does not match format '{}'", s, format))
            }
        }
        other => Some(format!("{} is not a timestamp string", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_export_format() {
        let value = Value::from("2025-03-01 10:15:00");
        assert!(malformed_timestamp(&value, DEFAULT_DATE_FORMAT).is_none());
    }

    #[test]
    fn test_accepts_date_only_format() {
        let value = Value::from("2001-01-01");
        assert!(malformed_timestamp(&value, "%Y-%m-%d").is_none());
    }

    #[test]
    fn test_reports_wrong_format() {
        let value = Value::from("01/02/2001");
        let message = malformed_timestamp(&value, DEFAULT_DATE_FORMAT).unwrap();
        assert!(message.contains("01/02/2001"));
    }

    #[test]
    fn test_reports_non_string() {
        assert!(malformed_timestamp(&Value::Int(20010101), DEFAULT_DATE_FORMAT).is_some());
    }
}
