//! Flat-file shift log.
//!
//! This module provides the [`ShiftLog`], a thin repository over the
//! plain-text input file: one shift per line in the `DD.MM: HH-HH`
//! format, read as a whole batch and appended to additively.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ShiftRecord;
use crate::parser::{format_record_line, parse_record_line};

/// A repository over the flat shift-record file.
///
/// The log carries the calendar year applied to every parsed date; the
/// file format has no year of its own. Use [`ShiftLog::new`] with an
/// explicit year to keep reads deterministic, or
/// [`ShiftLog::with_current_year`] at the application edge.
///
/// # Example
///
/// ```no_run
/// use salary_tracker::storage::ShiftLog;
///
/// let log = ShiftLog::new("input.txt", 2024);
/// let records = log.read_all().unwrap();
/// println!("{} shifts on file", records.len());
/// ```
#[derive(Debug, Clone)]
pub struct ShiftLog {
    path: PathBuf,
    year: i32,
}

impl ShiftLog {
    /// Creates a log over the given file, parsing dates into `year`.
    pub fn new<P: AsRef<Path>>(path: P, year: i32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            year,
        }
    }

    /// Creates a log using the current wall-clock year.
    ///
    /// This is the only place the crate touches the clock; everything
    /// downstream works from the year captured here.
    pub fn with_current_year<P: AsRef<Path>>(path: P) -> Self {
        Self::new(path, chrono::Utc::now().year())
    }

    /// Returns the path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the year applied to parsed dates.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Reads and parses every record in the file, in file order.
    ///
    /// Blank lines are skipped. A malformed line aborts the whole read:
    /// the file is the single source of truth for salary figures, and
    /// skipping lines could silently understate a month. The returned
    /// error carries the 1-based line number.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Io`] when the file cannot be read and
    /// [`TrackerError::MalformedRecord`] for the first bad line.
    pub fn read_all(&self) -> TrackerResult<Vec<ShiftRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|e| TrackerError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut records = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = parse_record_line(line, self.year).map_err(|e| match e {
                TrackerError::MalformedRecord { line, message } => TrackerError::MalformedRecord {
                    line,
                    message: format!("line {}: {}", number + 1, message),
                },
                other => other,
            })?;
            records.push(record);
        }

        info!(path = %self.path.display(), count = records.len(), "loaded shift records");
        Ok(records)
    }

    /// Appends one record to the file, creating it if missing.
    ///
    /// The write is additive: existing records are preserved and the
    /// record is formatted back into the input line format.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Io`] when the file cannot be opened or
    /// written.
    pub fn append(&self, record: &ShiftRecord) -> TrackerResult<()> {
        let to_io = |e: std::io::Error| TrackerError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(to_io)?;

        writeln!(file, "{}", format_record_line(record)).map_err(to_io)?;

        info!(path = %self.path.display(), date = %record.date(), "appended shift record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log_with_content(content: &str) -> (tempfile::TempDir, ShiftLog) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, content).unwrap();
        let log = ShiftLog::new(&path, 2024);
        (dir, log)
    }

    /// SL-001: reads records in file order
    #[test]
    fn test_read_all_in_file_order() {
        let (_dir, log) = log_with_content("05.03: 9-18\n03.03: 10-20\n");
        let records = log.read_all().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].date(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
        assert_eq!(
            records[1].date(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
        );
    }

    /// SL-002: blank lines are skipped
    #[test]
    fn test_read_all_skips_blank_lines() {
        let (_dir, log) = log_with_content("05.03: 9-18\n\n  \n06.03: 9-17\n");
        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
    }

    /// SL-003: a malformed line aborts the read with its line number
    #[test]
    fn test_malformed_line_aborts_with_line_number() {
        let (_dir, log) = log_with_content("05.03: 9-18\nbad-line-no-colon\n06.03: 9-17\n");
        let result = log.read_all();

        match result {
            Err(TrackerError::MalformedRecord { line, message }) => {
                assert_eq!(line, "bad-line-no-colon");
                assert!(message.starts_with("line 2:"));
            }
            _ => panic!("Expected MalformedRecord error"),
        }
    }

    /// SL-004: append preserves existing records
    #[test]
    fn test_append_is_additive() {
        let (_dir, log) = log_with_content("05.03: 9-18\n");
        let record =
            ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(), 10, 19).unwrap();
        log.append(&record).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content, "05.03: 9-18\n06.03: 10-19\n");
    }

    /// SL-005: append creates the file when missing
    #[test]
    fn test_append_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let log = ShiftLog::new(&path, 2024);

        let record =
            ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(), 9, 17).unwrap();
        log.append(&record).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "03.03: 9-17\n");
    }

    /// SL-006: appended records read back identically
    #[test]
    fn test_append_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        let log = ShiftLog::new(&path, 2024);

        let record =
            ShiftRecord::new(NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(), 14, 22).unwrap();
        log.append(&record).unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records, vec![record]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let log = ShiftLog::new("/nonexistent/input.txt", 2024);
        assert!(matches!(log.read_all(), Err(TrackerError::Io { .. })));
    }

    #[test]
    fn test_year_is_applied_to_parsed_dates() {
        let (_dir, log) = log_with_content("05.03: 9-18\n");
        assert_eq!(log.year(), 2024);

        let other = ShiftLog::new(log.path(), 2023);
        let records = other.read_all().unwrap();
        assert_eq!(
            records[0].date(),
            NaiveDate::from_ymd_opt(2023, 3, 5).unwrap()
        );
    }
}
