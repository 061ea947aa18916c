//! SQL payload loaded from a migration file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{MigrationError, Result};

/// Raw text of a migration file. Read once, never mutated.
#[derive(Debug, Clone)]
pub struct SqlPayload {
    path: PathBuf,
    sql: String,
}

impl SqlPayload {
    /// Check the file exists, then read it in full.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MigrationError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let sql = fs::read_to_string(path).map_err(|source| match source.kind() {
            // Removed between the existence check and the read
            ErrorKind::NotFound => MigrationError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => MigrationError::UnknownIo {
                path: path.to_path_buf(),
                source,
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = sql.len(), "loaded migration file");

        Ok(Self {
            path: path.to_path_buf(),
            sql,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Length in characters (Unicode scalar values), not bytes
    pub fn char_count(&self) -> usize {
        self.sql.chars().count()
    }

    /// Naive statement split on `;`, skipping blanks and pieces that open with a comment.
    ///
    /// This is only used for reporting; the SQL is never parsed.
    pub fn statements(&self) -> Vec<&str> {
        self.sql
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.starts_with("--") && !s.starts_with("/*"))
            .collect()
    }
}
