//! Append-only CSV log of completed practice sessions.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::{Date, format_description::FormatItem, macros::format_description};
use tracing::info;

/// Column names written as the first row of a new log file.
pub const LOG_HEADER: [&str; 5] = ["Date", "Category", "Name", "Duration (min)", "Notes"];

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Form input that cannot become a log row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Category, name or duration was left blank.
    #[error("Fill Category, Step/Item and Duration.")]
    MissingField,
    /// Duration is not a whole number.
    #[error("Duration must be a number (minutes).")]
    InvalidDuration,
    /// Duration parsed but is zero or negative.
    #[error("Duration must be a positive number of minutes.")]
    NonPositiveDuration,
}

/// Errors that may occur while writing the practice log.
#[derive(Debug, Error)]
pub enum PracticeLogError {
    /// Failed to open or create the log file.
    #[error("Failed to open practice log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write or flush a row.
    #[error("Failed to write practice log {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
    /// Failed to format the entry date.
    #[error("Failed to format practice date: {0}")]
    FormatDate(#[from] time::error::Format),
}

/// Either half of a `log_practice` failure.
#[derive(Debug, Error)]
pub enum LogPracticeError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Log(#[from] PracticeLogError),
}

/// One completed practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeLogEntry {
    pub date: Date,
    pub category: String,
    pub name: String,
    pub duration_minutes: u32,
    pub notes: String,
}

impl PracticeLogEntry {
    /// Validate raw form fields into an entry dated `date`.
    ///
    /// Inputs are trimmed; notes may be empty.
    pub fn from_form(
        date: Date,
        category: &str,
        name: &str,
        duration: &str,
        notes: &str,
    ) -> Result<Self, EntryError> {
        let category = category.trim();
        let name = name.trim();
        let duration = duration.trim();
        if category.is_empty() || name.is_empty() || duration.is_empty() {
            return Err(EntryError::MissingField);
        }
        let minutes: i64 = duration.parse().map_err(|_| EntryError::InvalidDuration)?;
        if minutes <= 0 {
            return Err(EntryError::NonPositiveDuration);
        }
        let duration_minutes =
            u32::try_from(minutes).map_err(|_| EntryError::InvalidDuration)?;
        Ok(Self {
            date,
            category: category.to_string(),
            name: name.to_string(),
            duration_minutes,
            notes: notes.trim().to_string(),
        })
    }

    fn record(&self) -> Result<[String; 5], PracticeLogError> {
        Ok([
            self.date.format(DATE_FORMAT)?,
            self.category.clone(),
            self.name.clone(),
            self.duration_minutes.to_string(),
            self.notes.clone(),
        ])
    }
}

/// Handle to the CSV file that collects practice entries.
#[derive(Debug, Clone)]
pub struct PracticeLog {
    path: PathBuf,
}

impl PracticeLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate the form and append it as today's entry.
    ///
    /// Nothing touches the file when validation fails.
    pub fn log_practice(
        &self,
        category: &str,
        name: &str,
        duration: &str,
        notes: &str,
    ) -> Result<PracticeLogEntry, LogPracticeError> {
        let entry = PracticeLogEntry::from_form(today(), category, name, duration, notes)?;
        self.append(&entry)?;
        Ok(entry)
    }

    /// Append one row, writing the header first when the file is new or empty.
    pub fn append(&self, entry: &PracticeLogEntry) -> Result<(), PracticeLogError> {
        let record = entry.record()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.open_error(source))?;
        let needs_header = file
            .metadata()
            .map_err(|source| self.open_error(source))?
            .len()
            == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer
                .write_record(LOG_HEADER)
                .map_err(|source| self.write_error(source))?;
        }
        writer
            .write_record(&record)
            .map_err(|source| self.write_error(source))?;
        writer
            .flush()
            .map_err(|source| self.write_error(csv::Error::from(source)))?;
        info!(
            "Logged {} min of {} to {}",
            entry.duration_minutes,
            entry.name,
            self.path.display()
        );
        Ok(())
    }

    fn open_error(&self, source: std::io::Error) -> PracticeLogError {
        PracticeLogError::Open {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: csv::Error) -> PracticeLogError {
        PracticeLogError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Local calendar day, or the UTC day when the local offset is unknown.
pub fn today() -> Date {
    crate::logging::now_local_or_utc().date()
}

/// Render a date the way it appears in the log's first column.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(DATE_FORMAT)
}
