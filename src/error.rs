//! Error types for the Salary Tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reading, aggregating,
//! and querying shift records.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Salary Tracker.
///
/// All fallible operations in the crate return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_tracker::error::TrackerError;
///
/// let error = TrackerError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record line failed to parse.
    #[error("Malformed shift record '{line}': {message}")]
    MalformedRecord {
        /// The input line that failed to parse.
        line: String,
        /// A description of what made the line malformed.
        message: String,
    },

    /// A shift was constructed with inconsistent hours.
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The date of the invalid shift.
        date: NaiveDate,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A user-supplied month was outside 1-12 or not recognisable.
    ///
    /// This is a validation message for a user-facing surface, never
    /// a fatal condition.
    #[error("Invalid month: {input}")]
    InvalidMonth {
        /// The month input that was rejected.
        input: String,
    },

    /// A valid month had no shift data recorded.
    ///
    /// Surfaced as an informational "no data" result, not a failure.
    #[error("No shift data recorded for month {month}")]
    MonthNotFound {
        /// The month number (1-12) that had no data.
        month: u32,
    },

    /// A storage read or append failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path of the file being read or written.
        path: String,
        /// A description of the underlying I/O error.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = TrackerError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = TrackerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_malformed_record_displays_line_and_message() {
        let error = TrackerError::MalformedRecord {
            line: "bad-line-no-colon".to_string(),
            message: "missing ':' separator".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed shift record 'bad-line-no-colon': missing ':' separator"
        );
    }

    #[test]
    fn test_invalid_shift_displays_date_and_message() {
        let error = TrackerError::InvalidShift {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            message: "start hour 18 is not before end hour 9".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift on 2024-03-05: start hour 18 is not before end hour 9"
        );
    }

    #[test]
    fn test_invalid_month_displays_input() {
        let error = TrackerError::InvalidMonth {
            input: "13".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month: 13");
    }

    #[test]
    fn test_month_not_found_displays_month() {
        let error = TrackerError::MonthNotFound { month: 7 };
        assert_eq!(error.to_string(), "No shift data recorded for month 7");
    }

    #[test]
    fn test_io_displays_path_and_message() {
        let error = TrackerError::Io {
            path: "input.txt".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "I/O error on 'input.txt': permission denied");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TrackerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_month_not_found() -> TrackerResult<()> {
            Err(TrackerError::MonthNotFound { month: 2 })
        }

        fn propagates_error() -> TrackerResult<()> {
            returns_month_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
