//! Helpers for applying SQL migrations to a hosted Supabase database.
//!
//! The hosted REST API cannot run schema changes, so both binaries load a
//! migration file, report on it, and print the manual ways to apply it.

pub mod cmd;
pub mod config;
pub mod error;
pub mod execute;
pub mod guidance;
pub mod logging;
pub mod output;
pub mod payload;

pub use config::Config;
pub use error::{MigrationError, Result};
pub use execute::{execute_ddl, ExecutionOutcome};
pub use guidance::{Guidance, ManualMethod};
pub use output::Console;
pub use payload::SqlPayload;
