//! Error types for the Split Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during split computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Split Allocation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Every
/// variant represents an invalid input detected before any allocation math
/// runs; the engine never fails part-way through a computation.
///
/// # Example
///
/// ```
/// use split_engine::error::EngineError;
///
/// let error = EngineError::EmptyParticipants;
/// assert_eq!(error.to_string(), "Participant list is empty");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The total amount to split was negative.
    #[error("Total amount cannot be negative: {amount}")]
    InvalidTotalAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// The participant list was empty.
    #[error("Participant list is empty")]
    EmptyParticipants,

    /// A supplied weight was negative.
    #[error("Weight for participant '{participant_id}' cannot be negative: {weight}")]
    NegativeWeight {
        /// The participant the weight belongs to.
        participant_id: String,
        /// The rejected weight.
        weight: Decimal,
    },

    /// A query date range had its start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
    },

    /// An absence interval had its start after its end.
    #[error("Invalid absence interval for member '{member_id}': start {start} is after end {end}")]
    InvalidAbsenceInterval {
        /// The member the interval belongs to.
        member_id: String,
        /// The start of the rejected interval.
        start: NaiveDate,
        /// The end of the rejected interval.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
