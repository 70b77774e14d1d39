#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};
    use habsync::libs::history::{parse_remote_date, parse_remote_timestamp, TimestampError};
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_epoch_millis_number() {
        // 2014-06-11T02:24:54.590Z
        let parsed = parse_remote_timestamp(&json!(1402453494590_i64)).unwrap();
        assert_eq!(parsed.date(), date("2014-06-11"));
        assert_eq!(parsed.time().hour(), 2);
        assert_eq!(parsed.time().minute(), 24);
        assert_eq!(parsed.time().second(), 54);
    }

    #[test]
    fn test_epoch_millis_numeric_string() {
        let parsed = parse_remote_date(&json!("1402453494590")).unwrap();
        assert_eq!(parsed, date("2014-06-11"));
    }

    #[test]
    fn test_iso_string_with_fraction() {
        let parsed = parse_remote_timestamp(&json!("2014-06-11T02:24:54.590Z")).unwrap();
        assert_eq!(parsed.date(), date("2014-06-11"));
        assert_eq!(parsed.time().second(), 54);
    }

    #[test]
    fn test_iso_string_without_fraction() {
        let parsed = parse_remote_date(&json!("2017-01-13T02:00:00Z")).unwrap();
        assert_eq!(parsed, date("2017-01-13"));
    }

    #[test]
    fn test_iso_string_without_zone() {
        let parsed = parse_remote_timestamp(&json!("2017-01-13T02:00:00")).unwrap();
        assert_eq!(parsed.date(), date("2017-01-13"));
        assert_eq!(parsed.time().hour(), 2);
    }

    #[test]
    fn test_bare_calendar_date() {
        let parsed = parse_remote_timestamp(&json!("2017-01-13")).unwrap();
        assert_eq!(parsed.date(), date("2017-01-13"));
        assert_eq!(parsed.time().hour(), 0);
    }

    #[test]
    fn test_both_shapes_agree_on_the_same_instant() {
        // 2024-01-01T08:00:00Z in both encodings
        let from_millis = parse_remote_timestamp(&json!(1704096000000_i64)).unwrap();
        let from_iso = parse_remote_timestamp(&json!("2024-01-01T08:00:00.000Z")).unwrap();
        assert_eq!(from_millis, from_iso);

        // Late-evening instants stay on their UTC date
        let near_midnight = parse_remote_date(&json!(1484351999000_i64)).unwrap();
        assert_eq!(near_midnight, date("2017-01-13"));
        assert_eq!(near_midnight, parse_remote_date(&json!("2017-01-13T23:59:59Z")).unwrap());
    }

    #[test]
    fn test_garbage_string_is_unrecognized() {
        let err = parse_remote_timestamp(&json!("garbage")).unwrap_err();
        assert!(matches!(err, TimestampError::Unrecognized(_)));
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn test_wrong_order_date_is_unrecognized() {
        let err = parse_remote_timestamp(&json!("13/01/2017")).unwrap_err();
        assert!(matches!(err, TimestampError::Unrecognized(_)));
    }

    #[test]
    fn test_empty_and_null_are_missing() {
        assert!(matches!(parse_remote_timestamp(&json!("")).unwrap_err(), TimestampError::Missing));
        assert!(matches!(parse_remote_timestamp(&json!("   ")).unwrap_err(), TimestampError::Missing));
        assert!(matches!(parse_remote_timestamp(&serde_json::Value::Null).unwrap_err(), TimestampError::Missing));
    }

    #[test]
    fn test_non_scalar_values_are_unrecognized() {
        assert!(matches!(parse_remote_timestamp(&json!(true)).unwrap_err(), TimestampError::Unrecognized(_)));
        assert!(matches!(parse_remote_timestamp(&json!({"at": 1})).unwrap_err(), TimestampError::Unrecognized(_)));
        assert!(matches!(parse_remote_timestamp(&json!([1402453494590_i64])).unwrap_err(), TimestampError::Unrecognized(_)));
    }

    #[test]
    fn test_whitespace_around_value_is_tolerated() {
        let parsed = parse_remote_date(&json!("  2017-01-13T02:00:00Z  ")).unwrap();
        assert_eq!(parsed, date("2017-01-13"));
    }
}
