//! Error types for migration file handling

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a migration helper run.
///
/// Every variant is fatal: the binaries print the message and exit with
/// [`MigrationError::exit_code`].
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The SQL file does not exist at the configured path.
    #[error("migration file not found: {}", path.display())]
    FileNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The file exists but could not be read (permissions, encoding, I/O fault).
    #[error("failed to read migration file {}: {source}", path.display())]
    UnknownIo {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl MigrationError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MigrationError::FileNotFound { .. } | MigrationError::UnknownIo { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
