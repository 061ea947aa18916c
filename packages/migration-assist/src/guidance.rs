//! Manual steps for applying a migration by hand

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::output::Console;

/// Channels an operator can use to apply a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualMethod {
    /// Paste into the dashboard SQL editor
    DashboardSqlEditor,
    /// Connect with psql using the database password
    DatabaseClient,
    /// `supabase db push`, once migration history is repaired
    CliPush,
}

impl ManualMethod {
    pub const ALL: [ManualMethod; 3] = [
        ManualMethod::DashboardSqlEditor,
        ManualMethod::DatabaseClient,
        ManualMethod::CliPush,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ManualMethod::DashboardSqlEditor => "Supabase Dashboard SQL Editor",
            ManualMethod::DatabaseClient => "Direct database connection (psql)",
            ManualMethod::CliPush => "Supabase CLI (db push)",
        }
    }
}

/// Operator guidance for one migration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    file: PathBuf,
    dashboard_url: String,
    connection_string: String,
}

impl Guidance {
    pub fn new(config: &Config, file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            dashboard_url: format!(
                "https://supabase.com/dashboard/project/{}/sql",
                config.project_ref_or_placeholder()
            ),
            connection_string: format!(
                "postgresql://postgres:[YOUR-PASSWORD]@{}:5432/postgres",
                config.database_host()
            ),
        }
    }

    pub fn dashboard_url(&self) -> &str {
        &self.dashboard_url
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Step lines for a single method, without the title
    pub fn steps(&self, method: ManualMethod) -> Vec<String> {
        let file = self.file.display();
        match method {
            ManualMethod::DashboardSqlEditor => vec![
                format!("1. Go to: {}", self.dashboard_url),
                "2. Click \"New query\"".to_string(),
                format!("3. Paste the contents of {}", file),
                "4. Click \"Run\"".to_string(),
            ],
            ManualMethod::DatabaseClient => vec![
                "Requires the database password (Project Settings > Database).".to_string(),
                format!("psql \"{}\" -f {}", self.connection_string, file),
            ],
            ManualMethod::CliPush => vec![
                "Fix the remote migration history first:".to_string(),
                "supabase migration repair --status applied <version>".to_string(),
                "Then push pending migrations:".to_string(),
                "supabase db push".to_string(),
            ],
        }
    }

    /// Print all three methods
    pub fn print<W: Write>(&self, console: &mut Console<W>) {
        for (i, method) in ManualMethod::ALL.iter().enumerate() {
            console.blank();
            console.line(&format!("Option {}: {}", i + 1, method.title()));
            for step in self.steps(*method) {
                console.line(&format!("   {}", step));
            }
        }
    }
}
