//! Attempt to deploy a migration through the remote API

use std::io::Write;

use crate::cmd::{print_sql, print_summary, RunOptions};
use crate::config::Config;
use crate::error::Result;
use crate::execute::execute_ddl;
use crate::guidance::Guidance;
use crate::output::Console;
use crate::payload::SqlPayload;

pub fn run<W: Write>(console: &mut Console<W>, config: &Config, opts: &RunOptions) -> Result<()> {
    let file = opts.file.as_ref().unwrap_or(&config.deploy_file);
    let path = config.resolve(file);

    let payload = SqlPayload::load(&path)?;

    console.print_header("🚀 Deploying migration via RPC");
    print_summary(console, &payload);

    if opts.print_sql {
        print_sql(console, &payload);
    }

    // Declining to execute is the expected outcome, not a failure
    let outcome = execute_ddl(console, &payload, Guidance::new(config, &path));
    tracing::debug!(executed = outcome.executed(), "deploy finished");

    Ok(())
}
