//! # Error Types
//!
//! This module defines the error type shared by every part of the N-Queens
//! search. Correctly configured runs never fail mid-epoch; errors come from
//! misconfiguration, malformed candidates handed in from outside, or I/O in
//! the reporting layer.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, Result};
//!
//! fn check_board(board_size: usize) -> Result<()> {
//!     if board_size == 0 {
//!         return Err(GeneticError::Configuration("Board size cannot be zero".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_board(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use nqueens_ga::error::{Result, ResultExt};
//! use std::io::Write;
//!
//! fn write_banner(out: &mut impl Write) -> Result<()> {
//!     writeln!(out, "N-Queens").context("Failed to write banner")
//! }
//!
//! let mut buffer = Vec::new();
//! assert!(write_banner(&mut buffer).is_ok());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the search.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a candidate is not a permutation of the board's columns.
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for the N-Queens search.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// Converts any standard error into a `GeneticError::Other` carrying the
/// supplied context in front of the original message.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}
