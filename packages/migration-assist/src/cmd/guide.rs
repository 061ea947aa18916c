//! Load a migration file and explain how to apply it by hand

use std::io::Write;

use crate::cmd::{print_sql, print_summary, RunOptions};
use crate::config::Config;
use crate::error::Result;
use crate::guidance::Guidance;
use crate::output::Console;
use crate::payload::SqlPayload;

pub fn run<W: Write>(console: &mut Console<W>, config: &Config, opts: &RunOptions) -> Result<()> {
    let file = opts.file.as_ref().unwrap_or(&config.guide_file);
    let path = config.resolve(file);

    // Nothing is printed before the file is known to be readable
    let payload = SqlPayload::load(&path)?;

    console.print_header("🚀 Applying migration manually");
    print_summary(console, &payload);

    if opts.print_sql {
        print_sql(console, &payload);
    }

    console.blank();
    console.print_info("The hosted API cannot run this migration. Apply it using one of these methods:");
    Guidance::new(config, &path).print(console);

    console.blank();
    console.print_success("✅ Migration file is ready. Apply it using one of the methods above.");

    Ok(())
}
