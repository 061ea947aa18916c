//! Command pipelines behind the two binaries

pub mod deploy;
pub mod guide;

use std::io::Write;
use std::path::PathBuf;

use crate::output::Console;
use crate::payload::SqlPayload;

/// Per-run options shared by both commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Use this file instead of the configured one
    pub file: Option<PathBuf>,
    /// Echo the SQL between separator rules
    pub print_sql: bool,
}

const RULE_WIDTH: usize = 60;

/// Path, size and statement count lines printed before guidance
fn print_summary<W: Write>(console: &mut Console<W>, payload: &SqlPayload) {
    console.line(&format!("📄 Migration file: {}", payload.path().display()));
    console.line(&format!("📊 SQL length: {} characters", payload.char_count()));
    console.line(&format!(
        "📋 Found {} SQL statements",
        payload.statements().len()
    ));
}

fn print_sql<W: Write>(console: &mut Console<W>, payload: &SqlPayload) {
    let rule = "─".repeat(RULE_WIDTH);
    console.blank();
    console.line(&rule);
    // `line` supplies the final newline
    let sql = payload.sql();
    console.line(sql.strip_suffix('\n').unwrap_or(sql));
    console.line(&rule);
}
