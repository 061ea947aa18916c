use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_GUIDE_FILE: &str = "supabase/apply_phase1_migrations.sql";
pub const DEFAULT_DEPLOY_FILE: &str = "supabase/apply_via_rpc.sql";

/// Placeholder shown in guidance when no project reference is configured
pub const PROJECT_REF_PLACEHOLDER: &str = "<project-ref>";

const HOSTED_DOMAIN: &str = ".supabase.co";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub guide_file: PathBuf,
    pub deploy_file: PathBuf,
    pub project_ref: Option<String>,
    pub db_host: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to defaults; nothing here fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let project_ref = var("SUPABASE_PROJECT_REF")
            .or_else(|| var("SUPABASE_URL").and_then(|url| project_ref_from_url(&url)));

        Self {
            root: var("MIGRATION_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            guide_file: var("MIGRATION_GUIDE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GUIDE_FILE)),
            deploy_file: var("MIGRATION_DEPLOY_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DEPLOY_FILE)),
            project_ref,
            db_host: var("SUPABASE_DB_HOST"),
        }
    }

    /// Resolve a possibly-relative path against the configured root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || self.root == Path::new(".") {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn project_ref_or_placeholder(&self) -> &str {
        self.project_ref.as_deref().unwrap_or(PROJECT_REF_PLACEHOLDER)
    }

    /// Database host for direct client connections
    pub fn database_host(&self) -> String {
        match &self.db_host {
            Some(host) => host.clone(),
            None => format!("db.{}.supabase.co", self.project_ref_or_placeholder()),
        }
    }
}

/// Extract `<ref>` from `https://<ref>.supabase.co`.
///
/// Any other host (local stack, IP address, custom domain) has no project ref.
fn project_ref_from_url(url: &str) -> Option<String> {
    let host = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split(['/', ':'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match host.strip_suffix(HOSTED_DOMAIN) {
        Some(label) if !label.is_empty() && !label.contains('.') => Some(label.to_string()),
        _ => {
            tracing::warn!(
                url,
                "SUPABASE_URL is not a hosted project URL; using placeholder project ref"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.guide_file, PathBuf::from(DEFAULT_GUIDE_FILE));
        assert_eq!(config.deploy_file, PathBuf::from(DEFAULT_DEPLOY_FILE));
        assert_eq!(config.project_ref_or_placeholder(), PROJECT_REF_PLACEHOLDER);
        assert_eq!(config.database_host(), "db.<project-ref>.supabase.co");
    }

    #[test]
    fn test_empty_file_vars_use_defaults() {
        let config = config_from(&[("MIGRATION_GUIDE_FILE", ""), ("MIGRATION_DEPLOY_FILE", "")]);
        assert_eq!(config.guide_file, PathBuf::from(DEFAULT_GUIDE_FILE));
        assert_eq!(config.deploy_file, PathBuf::from(DEFAULT_DEPLOY_FILE));
    }

    #[test]
    fn test_project_ref_from_supabase_url() {
        let config = config_from(&[("SUPABASE_URL", "https://abcdefgh.supabase.co")]);
        assert_eq!(config.project_ref.as_deref(), Some("abcdefgh"));
        assert_eq!(config.database_host(), "db.abcdefgh.supabase.co");
    }

    #[test]
    fn test_explicit_ref_wins_over_url() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://fromurl.supabase.co"),
            ("SUPABASE_PROJECT_REF", "explicit"),
        ]);
        assert_eq!(config.project_ref.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_local_supabase_url_uses_placeholder() {
        let config = config_from(&[("SUPABASE_URL", "http://localhost:54321")]);
        assert_eq!(config.project_ref, None);
        assert_eq!(config.project_ref_or_placeholder(), PROJECT_REF_PLACEHOLDER);
    }

    #[test]
    fn test_ip_supabase_url_uses_placeholder() {
        let config = config_from(&[("SUPABASE_URL", "http://127.0.0.1:54321")]);
        assert_eq!(config.project_ref, None);
        assert_eq!(config.project_ref_or_placeholder(), PROJECT_REF_PLACEHOLDER);
    }

    #[test]
    fn test_custom_domain_uses_placeholder() {
        let config = config_from(&[("SUPABASE_URL", "https://api.example.com")]);
        assert_eq!(config.project_ref, None);
    }

    #[test]
    fn test_resolve_against_root() {
        let config = config_from(&[("MIGRATION_ROOT", "/srv/app")]);
        assert_eq!(
            config.resolve(&config.guide_file),
            PathBuf::from("/srv/app/supabase/apply_phase1_migrations.sql")
        );
        assert_eq!(
            config.resolve(Path::new("/abs/file.sql")),
            PathBuf::from("/abs/file.sql")
        );
    }

    #[test]
    fn test_resolve_without_root_keeps_relative_path() {
        let config = config_from(&[]);
        assert_eq!(
            config.resolve(&config.deploy_file),
            PathBuf::from(DEFAULT_DEPLOY_FILE)
        );
    }
}
