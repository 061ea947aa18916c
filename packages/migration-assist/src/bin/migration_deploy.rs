//! Try to deploy a migration through the hosted API

use anyhow::Result;
use clap::Parser;
use migration_assist::cmd::{self, RunOptions};
use migration_assist::{logging, Config, Console, MigrationError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "migration-deploy")]
#[command(about = "Deploy a migration file (prints manual steps: DDL over REST is unsupported)")]
#[command(version)]
struct Cli {
    /// Only print the essentials
    #[arg(short, long)]
    quiet: bool,

    /// Echo the SQL so it can be copied into the dashboard
    #[arg(long)]
    print_sql: bool,

    /// Migration file (defaults to MIGRATION_DEPLOY_FILE)
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

    cmd::deploy::run(&mut console, &config, &opts)?;
    Ok(())
}
