//! Error types for the rolodex.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of command-layer errors is shown verbatim to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors from record and directory lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No record exists under the requested name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record has no phone equal to the requested one
    #[error("Phone not found.")]
    PhoneNotFound,
}

/// Errors surfaced to the user by the command layer.
///
/// Every handler returns these; the dispatch boundary renders an `Err`
/// as its display text instead of propagating it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// A contact or phone lookup came up empty
    #[error(transparent)]
    Lookup(#[from] DirectoryError),

    /// Too few positional arguments for the command
    #[error("Missing argument. Usage: {0}")]
    MissingArgument(&'static str),
}

/// Errors that can occur while loading or saving the contacts file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid contacts JSON
    #[error("Malformed contacts file: {0}")]
    Format(#[from] serde_json::Error),

    /// The file was written by an incompatible version of this program
    #[error("Unsupported contacts file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
