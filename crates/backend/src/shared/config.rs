use contracts::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub compliance: ComplianceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

/// Defaults for roll-up requests that do not choose explicitly
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ComplianceConfig {
    #[serde(default)]
    pub empty_children: EmptyChildrenPolicy,
    #[serde(default)]
    pub default_signal: ComplianceSignal,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/goals.db"

[server]
port = 3000

[compliance]
empty_children = "exclude"
default_signal = "numeric"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Keeps the loaded configuration for the rest of the process
pub fn install(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Configuration already installed"))
}

/// Compliance defaults, or the built-in ones when nothing was installed
pub fn compliance_settings() -> ComplianceConfig {
    CONFIG
        .get()
        .map(|c| c.compliance.clone())
        .unwrap_or_default()
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.database.path, "target/db/goals.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.compliance.empty_children, EmptyChildrenPolicy::Exclude);
        assert_eq!(config.compliance.default_signal, ComplianceSignal::Numeric);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let config: Config = toml::from_str(
            r#"
            [database]
            path = "/tmp/goals.db"

            [compliance]
            empty_children = "count_as_lagging"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.compliance.empty_children,
            EmptyChildrenPolicy::CountAsLagging
        );
        assert_eq!(config.compliance.default_signal, ComplianceSignal::Numeric);
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/tmp/goals.db")
        );
    }
}
