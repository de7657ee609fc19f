//! Error types for event date parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unable to parse start date: {0}")]
    UnparseableStart(String),

    #[error("Unable to parse end date: {0}")]
    UnparseableEnd(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid end day: {0}")]
    InvalidEndDay(String),

    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),

    #[error("Invalid recurring event pattern: {0}")]
    InvalidRecurringPattern(String),

    #[error("Unknown day: {0}")]
    UnknownWeekday(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
