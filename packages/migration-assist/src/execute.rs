//! Remote DDL execution, which the hosted REST API does not offer

use std::io::Write;

use crate::guidance::Guidance;
use crate::output::Console;
use crate::payload::SqlPayload;

/// Result of asking the remote service to run a migration.
///
/// The REST API cannot execute schema-changing statements, so the only
/// outcome is a refusal carrying the manual alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    NotSupported { guidance: Guidance },
}

impl ExecutionOutcome {
    /// Whether the SQL was applied to the database
    pub fn executed(&self) -> bool {
        match self {
            ExecutionOutcome::NotSupported { .. } => false,
        }
    }
}

/// Decline to run `payload` remotely and print the manual alternatives.
///
/// Output does not depend on the payload contents.
pub fn execute_ddl<W: Write>(
    console: &mut Console<W>,
    payload: &SqlPayload,
    guidance: Guidance,
) -> ExecutionOutcome {
    tracing::warn!(
        path = %payload.path().display(),
        "DDL execution via REST API is not supported; printing manual alternatives"
    );

    console.blank();
    console.print_warning("⚠️  Direct DDL execution via the Supabase REST API is not supported.");
    console.print_warning("   Apply this migration manually using one of the methods below.");
    guidance.print(console);

    ExecutionOutcome::NotSupported { guidance }
}
