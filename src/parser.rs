//! Shift record line parsing and formatting.
//!
//! One shift per line, in the form `DD.MM: HH-HH` (e.g. `05.03: 9-18`).
//! Parsing is a pure transformation of one line into one
//! [`ShiftRecord`]; the year is an explicit parameter so that parsing
//! stays deterministic and testable. [`format_record_line`] is the
//! inverse used by the append path.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ShiftRecord;

fn malformed(line: &str, message: impl Into<String>) -> TrackerError {
    TrackerError::MalformedRecord {
        line: line.to_string(),
        message: message.into(),
    }
}

/// Parses one `DD.MM: HH-HH` line into a [`ShiftRecord`].
///
/// # Arguments
///
/// * `line` - One input line, with or without trailing whitespace.
/// * `year` - The calendar year to attach to the parsed day and month.
///
/// # Errors
///
/// Returns [`TrackerError::MalformedRecord`] when the line lacks a `:`
/// separator, the date or time tokens are not integers, the day/month
/// pair is not a valid calendar date in `year`, or the start hour is
/// not before the end hour.
///
/// # Example
///
/// ```
/// use salary_tracker::parser::parse_record_line;
///
/// let record = parse_record_line("05.03: 9-18", 2024).unwrap();
/// assert_eq!(record.total_hours(), 9);
/// assert_eq!(record.date().to_string(), "2024-03-05");
/// ```
pub fn parse_record_line(line: &str, year: i32) -> TrackerResult<ShiftRecord> {
    let trimmed = line.trim();

    let (date_token, time_token) = trimmed
        .split_once(':')
        .ok_or_else(|| malformed(trimmed, "missing ':' separator"))?;

    let (day_token, month_token) = date_token
        .trim()
        .split_once('.')
        .ok_or_else(|| malformed(trimmed, "date is not in DD.MM form"))?;

    let day: u32 = day_token
        .trim()
        .parse()
        .map_err(|_| malformed(trimmed, format!("day '{}' is not an integer", day_token.trim())))?;
    let month: u32 = month_token.trim().parse().map_err(|_| {
        malformed(
            trimmed,
            format!("month '{}' is not an integer", month_token.trim()),
        )
    })?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        malformed(
            trimmed,
            format!("{:02}.{:02} is not a valid calendar date in {}", day, month, year),
        )
    })?;

    let (start_token, end_token) = time_token
        .trim()
        .split_once('-')
        .ok_or_else(|| malformed(trimmed, "time range is not in HH-HH form"))?;

    let start_hour: u32 = start_token.trim().parse().map_err(|_| {
        malformed(
            trimmed,
            format!("start hour '{}' is not an integer", start_token.trim()),
        )
    })?;
    let end_hour: u32 = end_token.trim().parse().map_err(|_| {
        malformed(
            trimmed,
            format!("end hour '{}' is not an integer", end_token.trim()),
        )
    })?;

    ShiftRecord::new(date, start_hour, end_hour).map_err(|e| match e {
        TrackerError::InvalidShift { message, .. } => malformed(trimmed, message),
        other => other,
    })
}

/// Formats a [`ShiftRecord`] back into the `DD.MM: HH-HH` line form.
///
/// Day and month are zero-padded to two digits, hours are unpadded,
/// matching the input file format. Canonical lines round-trip through
/// [`parse_record_line`].
///
/// # Example
///
/// ```
/// use salary_tracker::parser::{format_record_line, parse_record_line};
///
/// let record = parse_record_line("05.03: 9-18", 2024).unwrap();
/// assert_eq!(format_record_line(&record), "05.03: 9-18");
/// ```
pub fn format_record_line(record: &ShiftRecord) -> String {
    use chrono::Datelike;
    format!(
        "{:02}.{:02}: {}-{}",
        record.date().day(),
        record.date().month(),
        record.start_hour(),
        record.end_hour()
    )
}

/// Parses a user-facing month token into a month number (1-12).
///
/// Accepts numeric tokens (`"3"`, `"03"`) as well as English month
/// names and their three-letter abbreviations, case-insensitively.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidMonth`] for anything else, including
/// numbers outside 1-12.
///
/// # Example
///
/// ```
/// use salary_tracker::parser::parse_month_token;
///
/// assert_eq!(parse_month_token("March").unwrap(), 3);
/// assert_eq!(parse_month_token("mar").unwrap(), 3);
/// assert_eq!(parse_month_token("03").unwrap(), 3);
/// assert!(parse_month_token("13").is_err());
/// ```
pub fn parse_month_token(input: &str) -> TrackerResult<u32> {
    let normalized = input.trim().to_lowercase();

    let month = match normalized.as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => normalized.parse::<u32>().ok().filter(|m| (1..=12).contains(m)),
    };

    month.ok_or_else(|| TrackerError::InvalidMonth {
        input: input.trim().to_string(),
    })
}
