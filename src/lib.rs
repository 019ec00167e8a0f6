//! Rolodex - a console-driven personal contact directory.
//!
//! Contacts (names, phone numbers, birthdays) live in an in-memory
//! directory that is snapshotted to a versioned JSON file after every
//! mutating command, so the directory survives between runs.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record
//! - **directory**: the name-keyed, insertion-ordered record collection
//! - **storage**: versioned JSON snapshots on disk
//! - **commands**: line parsing, dispatch, and error-to-message rendering
//! - **repl**: the interactive prompt loop
//! - **config**: environment-driven settings
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use commands::Dispatcher;
pub use config::Config;
pub use directory::Directory;
pub use error::{CommandError, ConfigError, DirectoryError, StorageError};
pub use models::Record;
pub use storage::ContactStore;
