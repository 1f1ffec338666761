//! Calendar handling for invoices and list views
//!
//! This module provides:
//! - [`Clock`]: where "today" comes from (system or fixed)
//! - [`Timezone`]: the display timezone, serialized as its IANA name
//! - Arabic long-date formatting in the `ar-EG` convention
//! - Extraction of the `YYYY-MM-DD` day used by date inputs

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

const WEEKDAYS_AR: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Errors raised while parsing or formatting dates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("Unparseable date: {0:?}")]
    Unparseable(String),

    #[error("Local time does not exist in {timezone}: {input}")]
    NonexistentLocalTime { input: String, timezone: String },

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Display timezone wrapper
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| DateFormatError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Returns the calendar day of `utc` in this timezone
    pub fn local_day(&self, utc: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc).date_naive()
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Dubai)
    }
}

/// Source of the current instant and the local calendar day
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The timezone whose calendar defines "today"
    fn timezone(&self) -> Timezone;

    /// The local calendar day of [`Clock::now`]
    fn today(&self) -> NaiveDate {
        self.timezone().local_day(self.now())
    }
}

/// Wall clock in a configured timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

/// A clock frozen at one instant, for tests and reprints
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    timezone: Timezone,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, timezone: Timezone) -> Self {
        Self { instant, timezone }
    }

    /// A clock reading noon of `date` in `timezone`.
    ///
    /// Falls back to noon UTC for the rare zones where local noon is ambiguous.
    pub fn on(date: NaiveDate, timezone: Timezone) -> Self {
        let noon = date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::hours(12);
        let instant = timezone
            .0
            .from_local_datetime(&noon)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&noon));
        Self { instant, timezone }
    }

    /// Moves the clock forward (or backward) by whole days
    pub fn advance_days(&self, days: i64) -> Self {
        Self {
            instant: self.instant + chrono::Duration::days(days),
            timezone: self.timezone,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

/// Parses a backend timestamp into the display timezone.
///
/// Accepted shapes:
/// - RFC 3339 (`2021-08-01T12:00:00.000Z`, `2021-08-01T16:00:00+04:00`)
/// - `YYYY-MM-DD HH:MM:SS[.fff]±HH:MM` as printed by PostgreSQL
/// - naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`, read as local time in `tz`
/// - `YYYY-MM-DD`, read as UTC midnight
///
/// # Errors
///
/// `DateFormatError::Unparseable` for anything else, and
/// `DateFormatError::NonexistentLocalTime` for naive times skipped by a DST jump.
pub fn parse_timestamp(input: &str, tz: Timezone) -> Result<DateTime<Tz>, DateFormatError> {
    if let Some(fixed) = parse_with_offset(input) {
        return Ok(fixed.with_timezone(&tz.0));
    }

    let trimmed = input.trim();
    if let Some(naive) = parse_naive_datetime(trimmed) {
        return tz
            .0
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| DateFormatError::NonexistentLocalTime {
                input: input.to_string(),
                timezone: tz.name().to_string(),
            });
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN));
        return Ok(midnight.with_timezone(&tz.0));
    }

    Err(DateFormatError::Unparseable(input.to_string()))
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = input.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f%:z"))
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f%#z"))
        .ok()
}

fn parse_naive_datetime(trimmed: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Replaces ASCII digits with Arabic-Indic digits (٠١٢٣٤٥٦٧٨٩)
pub fn to_arabic_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(ch),
            None => ch,
        })
        .collect()
}

/// Formats a timestamp as a full Arabic date, e.g. `الأحد، ١ أغسطس ٢٠٢١`.
///
/// With `with_time` the wall-clock time follows in 12-hour form:
/// `الأحد، ١ أغسطس ٢٠٢١ في ٤:٠٠:٠٠ م`.
///
/// # Errors
///
/// Malformed input is an error; no placeholder text is ever produced.
pub fn format_arabic_date(
    input: &str,
    with_time: bool,
    tz: Timezone,
) -> Result<String, DateFormatError> {
    let local = parse_timestamp(input, tz)?;
    Ok(arabic_long_date(&local, with_time))
}

/// Formats an already-parsed local datetime as a full Arabic date
pub fn arabic_long_date<T: TimeZone>(local: &DateTime<T>, with_time: bool) -> String {
    let weekday = WEEKDAYS_AR[local.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_AR[local.month0() as usize];
    let date = format!("{weekday}، {} {month} {}", local.day(), local.year());

    if !with_time {
        return to_arabic_digits(&date);
    }

    let (is_pm, hour) = local.hour12();
    let period = if is_pm { "م" } else { "ص" };
    to_arabic_digits(&format!(
        "{date} في {hour}:{:02}:{:02} {period}",
        local.minute(),
        local.second()
    ))
}

/// Returns the `YYYY-MM-DD` calendar day of a timestamp as written.
///
/// The day is taken in the timestamp's own offset, so
/// `2024-01-05T01:00:00+04:00` yields `2024-01-05`.
///
/// # Errors
///
/// `DateFormatError::Unparseable` when the input is not a timestamp.
pub fn format_iso_date(input: &str) -> Result<String, DateFormatError> {
    let trimmed = input.trim();
    let day = if let Some(fixed) = parse_with_offset(trimmed) {
        fixed.date_naive()
    } else if let Some(naive) = parse_naive_datetime(trimmed) {
        naive.date()
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|_| DateFormatError::Unparseable(input.to_string()))?
    };
    Ok(day.format("%Y-%m-%d").to_string())
}
