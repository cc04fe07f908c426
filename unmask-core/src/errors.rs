//! errors.rs - Custom error types for the unmask-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically,
//! plus a flat report form for consumers that only want a message.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use thiserror::Error;

/// This enum represents all possible error types in the `unmask-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnmaskError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    #[error("Needle set is empty or contains only empty needles")]
    InvalidNeedleSet,

    #[error("Out of memory: {0}")]
    OutOfMemory(String),
}

impl UnmaskError {
    /// Wraps a failed reservation, naming what was being staged.
    pub(crate) fn out_of_memory(what: &str, err: TryReserveError) -> Self {
        UnmaskError::OutOfMemory(format!("failed to reserve {}: {}", what, err))
    }

    /// Converts the error into a flat, serializable report.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// A message plus its byte length, for callers that pass errors across a
/// boundary where only plain data travels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    pub length: usize,
}

impl From<&UnmaskError> for ErrorReport {
    fn from(err: &UnmaskError) -> Self {
        let message = err.to_string();
        let length = message.len();
        ErrorReport { message, length }
    }
}

impl From<UnmaskError> for ErrorReport {
    fn from(err: UnmaskError) -> Self {
        ErrorReport::from(&err)
    }
}
