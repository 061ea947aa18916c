//! Shared helpers for migration-assist integration tests

#![allow(dead_code)]

use migration_assist::{Config, Console};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub const GUIDE_FILE: &str = "supabase/apply_phase1_migrations.sql";
pub const DEPLOY_FILE: &str = "supabase/apply_via_rpc.sql";

/// Temp project root, optionally with a migration file written into it
pub fn project_with(file: &str, sql: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(sql) = sql {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, sql).unwrap();
    }
    dir
}

pub fn config_for(root: &Path) -> Config {
    let root = root.to_string_lossy().into_owned();
    Config::from_lookup(|key| match key {
        "MIGRATION_ROOT" => Some(root.clone()),
        "SUPABASE_PROJECT_REF" => Some("testref".to_string()),
        _ => None,
    })
}

pub fn console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), false)
}

pub fn text(console: Console<Vec<u8>>) -> String {
    console::strip_ansi_codes(&String::from_utf8(console.into_inner()).unwrap()).into_owned()
}

/// Run a built binary from `root` with a clean migration environment
pub fn run_bin(bin: &str, root: &Path) -> Output {
    run_bin_with(bin, root, &[])
}

/// Like [`run_bin`], with extra environment variables applied last
pub fn run_bin_with(bin: &str, root: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(bin);
    cmd.current_dir(root)
        .env_remove("MIGRATION_ROOT")
        .env_remove("MIGRATION_GUIDE_FILE")
        .env_remove("MIGRATION_DEPLOY_FILE")
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_DB_HOST")
        .env("SUPABASE_PROJECT_REF", "testref")
        .env("NO_COLOR", "1");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}
