//! Tests for calendar parsing and Arabic date formatting

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use core_kernel::{
    format_arabic_date, format_iso_date, parse_timestamp, Clock, DateFormatError, FixedClock,
    SystemClock, Timezone,
};
use proptest::prelude::*;

fn dubai() -> Timezone {
    Timezone::default()
}

fn utc() -> Timezone {
    Timezone(chrono_tz::UTC)
}

mod arabic_dates {
    use super::*;

    #[test]
    fn test_date_only_formatting() {
        let formatted = format_arabic_date("2021-08-01T12:00:00.000Z", false, dubai()).unwrap();
        assert_eq!(formatted, "الأحد، ١ أغسطس ٢٠٢١");
    }

    #[test]
    fn test_formatting_with_time_uses_display_timezone() {
        let formatted = format_arabic_date("2021-08-01T12:00:00.000Z", true, dubai()).unwrap();
        assert_eq!(formatted, "الأحد، ١ أغسطس ٢٠٢١ في ٤:٠٠:٠٠ م");
    }

    #[test]
    fn test_morning_time_uses_am_marker() {
        let formatted = format_arabic_date("2024-01-05T09:05:07", true, dubai()).unwrap();
        assert_eq!(formatted, "الجمعة، ٥ يناير ٢٠٢٤ في ٩:٠٥:٠٧ ص");
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let formatted = format_arabic_date("2024-01-05T00:00:00+04:00", true, dubai()).unwrap();
        assert!(formatted.ends_with("في ١٢:٠٠:٠٠ ص"));
    }

    #[test]
    fn test_date_only_input_is_utc_midnight() {
        let new_york = Timezone(chrono_tz::America::New_York);
        let formatted = format_arabic_date("2024-01-05", false, new_york).unwrap();
        assert_eq!(formatted, "الخميس، ٤ يناير ٢٠٢٤");
    }

    #[test]
    fn test_postgres_timestamp_shape() {
        let formatted = format_arabic_date("2024-01-05 10:00:00+00", false, utc()).unwrap();
        assert_eq!(formatted, "الجمعة، ٥ يناير ٢٠٢٤");
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        assert_eq!(
            format_arabic_date("not a date", false, dubai()),
            Err(DateFormatError::Unparseable("not a date".to_string()))
        );
        assert!(format_arabic_date("", true, dubai()).is_err());
        assert!(format_arabic_date("2024-13-45", false, dubai()).is_err());
    }

    #[test]
    fn test_far_future_and_past_dates_format() {
        let future = format_arabic_date("9999-12-31T23:59:59Z", false, utc()).unwrap();
        assert!(future.contains("ديسمبر"));
        assert!(future.contains("٩٩٩٩"));

        let past = format_arabic_date("0001-01-01", false, utc()).unwrap();
        assert!(past.contains("يناير"));
    }
}

mod iso_dates {
    use super::*;

    #[test]
    fn test_extracts_day_from_timestamp() {
        assert_eq!(format_iso_date("2021-08-01T12:00:00.000Z").unwrap(), "2021-08-01");
    }

    #[test]
    fn test_day_is_taken_in_timestamp_offset() {
        assert_eq!(format_iso_date("2024-01-05T01:00:00+04:00").unwrap(), "2024-01-05");
        assert_eq!(format_iso_date("2024-01-05T23:30:00-05:00").unwrap(), "2024-01-05");
    }

    #[test]
    fn test_plain_dates_pass_through() {
        assert_eq!(format_iso_date("2024-02-29").unwrap(), "2024-02-29");
        assert_eq!(format_iso_date("2024-02-29T08:15").unwrap(), "2024-02-29");
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(matches!(
            format_iso_date("yesterday"),
            Err(DateFormatError::Unparseable(_))
        ));
    }

    proptest! {
        #[test]
        fn iso_date_round_trips_to_same_calendar_day(
            days in 0i64..3_000_000,
            seconds in 0u32..86_400,
            offset_minutes in -720i32..=840
        ) {
            let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
            let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
            let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
            let stamp = offset.from_local_datetime(&date.and_time(time)).unwrap();

            let iso = format_iso_date(&stamp.to_rfc3339()).unwrap();
            let parsed = NaiveDate::parse_from_str(&iso, "%Y-%m-%d").unwrap();
            prop_assert_eq!(parsed, date);
        }
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_rfc3339_converted_to_display_timezone() {
        let local = parse_timestamp("2024-01-04T22:30:00Z", dubai()).unwrap();
        assert_eq!(local.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_nonexistent_local_time() {
        let new_york = Timezone(chrono_tz::America::New_York);
        assert!(matches!(
            parse_timestamp("2024-03-10T02:30:00", new_york),
            Err(DateFormatError::NonexistentLocalTime { .. })
        ));
    }
}

mod clocks {
    use super::*;

    #[test]
    fn test_system_clock_today_is_near_utc_today() {
        let clock = SystemClock::new(utc());
        let today = clock.today();
        let utc_today = Utc::now().date_naive();
        assert!((today - utc_today).num_days().abs() <= 1);
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        let clock = FixedClock::new(instant, dubai());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }
}
