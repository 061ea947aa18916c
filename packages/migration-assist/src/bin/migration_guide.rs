//! Load a migration file and print how to apply it by hand

use anyhow::Result;
use clap::Parser;
use migration_assist::cmd::{self, RunOptions};
use migration_assist::{logging, Config, Console, MigrationError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "migration-guide")]
#[command(about = "Load a migration file and print manual apply instructions")]
#[command(version)]
struct Cli {
    /// Only print the essentials
    #[arg(short, long)]
    quiet: bool,

    /// Echo the SQL so it can be copied into the dashboard
    #[arg(long)]
    print_sql: bool,

    /// Migration file (defaults to MIGRATION_GUIDE_FILE)
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {:#}", e);
        let code = e
            .downcast_ref::<MigrationError>()
            .map(MigrationError::exit_code)
            .unwrap_or(1);
        return ExitCode::from(code);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    let mut console = Console::stdout(cli.quiet);

    let opts = RunOptions {
        file: cli.file,
        print_sql: cli.print_sql,
    };

    cmd::guide::run(&mut console, &config, &opts)?;
    Ok(())
}
