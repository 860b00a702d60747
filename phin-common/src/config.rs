//! Configuration loading and resolution
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::lang::Language;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming the database file
pub const ENV_DATABASE: &str = "PHIN_DATABASE";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "PHIN_PORT";

const DEFAULT_PORT: u16 = 5810;

/// Service configuration after resolution
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// SQLite database file path
    pub database: PathBuf,
    /// Bind host (always loopback unless configured otherwise)
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Site default language when no cookie is present
    pub default_language: Language,
}

/// Subset of fields readable from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    default_language: Option<String>,
}

impl ServiceConfig {
    /// Resolve configuration from CLI arguments, environment, config
    /// file, and defaults, in that order.
    pub fn resolve(cli_database: Option<PathBuf>, cli_port: Option<u16>) -> Result<Self> {
        let file = load_config_file().unwrap_or_default();

        let database = cli_database
            .or_else(|| std::env::var(ENV_DATABASE).ok().map(PathBuf::from))
            .or(file.database)
            .unwrap_or_else(default_database_path);

        let port = cli_port
            .or_else(|| {
                std::env::var(ENV_PORT)
                    .ok()
                    .and_then(|v| v.parse::<u16>().ok())
            })
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);

        let host = file.host.unwrap_or_else(|| "127.0.0.1".to_string());

        let default_language = match file.default_language.as_deref() {
            Some(code) => Language::parse(code).ok_or_else(|| {
                Error::Config(format!("Unknown default_language in config file: {code}"))
            })?,
            None => Language::En,
        };

        Ok(Self {
            database,
            host,
            port,
            default_language,
        })
    }

    /// Socket address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locate and parse the config file, if any.
///
/// Looks for `~/.config/phinaccords/config.toml` first, then
/// `/etc/phinaccords/config.toml` on Linux.
fn load_config_file() -> Option<FileConfig> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("phinaccords").join("config.toml"));
    }
    if cfg!(target_os = "linux") {
        candidates.push(PathBuf::from("/etc/phinaccords/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<FileConfig>(&content) {
                Ok(parsed) => return Some(parsed),
                Err(e) => {
                    tracing::warn!("Ignoring unparseable config file {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            }
        }
    }

    None
}

/// OS-dependent default database location
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("phinaccords").join("phinaccords.db"))
        .unwrap_or_else(|| PathBuf::from("./phinaccords.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_everything() {
        let config = ServiceConfig::resolve(Some(PathBuf::from("/tmp/test.db")), Some(9999))
            .expect("resolve should succeed");
        assert_eq!(config.database, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.port, 9999);
    }

    #[test]
    fn test_defaults_apply() {
        let config = ServiceConfig::resolve(Some(PathBuf::from("/tmp/test.db")), None)
            .expect("resolve should succeed");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn test_bind_addr_format() {
        let config = ServiceConfig {
            database: PathBuf::from("/tmp/test.db"),
            host: "127.0.0.1".to_string(),
            port: 5810,
            default_language: Language::En,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:5810");
    }
}
