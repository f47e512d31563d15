use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboards::ReportSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// One `<collection>.json` file per collection in a directory
    Json,
    /// Key-value table in a SQLite file
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    #[serde(default = "default_billing_rate")]
    pub module_billing_rate: f64,
    #[serde(default = "default_doors_per_module")]
    pub doors_per_module: i64,
}

fn default_billing_rate() -> f64 {
    contracts::shared::constants::MODULE_BILLING_RATE
}

fn default_doors_per_module() -> i64 {
    contracts::shared::constants::DOORS_PER_MODULE
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            module_billing_rate: default_billing_rate(),
            doors_per_module: default_doors_per_module(),
        }
    }
}

impl ReportsConfig {
    pub fn settings(&self) -> ReportSettings {
        ReportSettings {
            module_billing_rate: self.module_billing_rate,
            doors_per_module: self.doors_per_module,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: "target/export".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[store]
kind = "json"
path = "target/data"

[reports]
module_billing_rate = 1350.0
doors_per_module = 5

[export]
dir = "target/export"

[logging]
dir = "logs"
"#;

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given as the first CLI argument
    Explicit(PathBuf),
    /// config.toml next to the executable
    NextToExe(PathBuf),
    /// Embedded default; `missing` is the config.toml looked for next to the executable
    Embedded { missing: Option<PathBuf> },
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::NextToExe(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Embedded { .. } => write!(f, "default embedded configuration"),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. Explicit path (first CLI argument)
/// 2. config.toml next to the executable
/// 3. Embedded default config
///
/// Runs before tracing is initialized, so the source is returned for logging
/// instead of being logged here.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read config {}: {}", path.display(), e))?;
        return Ok((
            parse_config(&contents)?,
            ConfigSource::Explicit(path.to_path_buf()),
        ));
    }

    let mut missing = None;
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok((parse_config(&contents)?, ConfigSource::NextToExe(config_path)));
            }
            missing = Some(config_path);
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded { missing }))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve a configured path
/// Relative paths are resolved against the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.store.kind, StoreKind::Json);
        assert_eq!(config.store.path, "target/data");
        assert_eq!(config.reports.settings(), ReportSettings::default());
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = parse_config(
            r#"
[store]
kind = "sqlite"
path = "/var/lib/taller/taller.db"

[reports]
module_billing_rate = 1400.0
"#,
        )
        .unwrap();
        assert_eq!(config.store.kind, StoreKind::Sqlite);
        assert_eq!(config.reports.module_billing_rate, 1400.0);
        assert_eq!(config.reports.doors_per_module, 5);
        assert_eq!(config.export.dir, "target/export");
        assert_eq!(
            resolve_path(&config.store.path),
            PathBuf::from("/var/lib/taller/taller.db")
        );
    }

    #[test]
    fn test_unknown_store_kind_is_rejected() {
        assert!(parse_config("[store]\nkind = \"redis\"\npath = \"x\"\n").is_err());
    }

    #[test]
    fn test_explicit_config_path_is_reported() {
        let path = std::env::temp_dir().join(format!("engine-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[store]\nkind = \"json\"\npath = \"datos\"\n").unwrap();

        let (config, source) = load_config(Some(&path)).unwrap();
        assert_eq!(config.store.path, "datos");
        assert_eq!(source, ConfigSource::Explicit(path.clone()));
        assert_eq!(source.to_string(), path.display().to_string());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let path = std::env::temp_dir().join("engine-config-does-not-exist.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
