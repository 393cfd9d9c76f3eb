//! Application configuration
//!
//! Layers, lowest to highest precedence: built-in defaults, the YAML file,
//! `SHELTERCONNECT_*` environment variables (`__` separates sections), and
//! command line flags.

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/shelterconnect.yaml";
pub const ENV_PREFIX: &str = "SHELTERCONNECT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub shelter_service: shelter_service::Config,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Per-request timeout, e.g. `30s`
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Allow cross-origin requests from any origin (the admin UI runs on
    /// its own dev server)
    #[serde(default = "default_true")]
    pub cors_allow_any: bool,

    /// Largest accepted request body
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            request_timeout: default_request_timeout(),
            cors_allow_any: true,
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `sqlite://...` or `postgres://...`
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8087))
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_body_limit_bytes() -> usize {
    8 * 1024 * 1024 // 8MB
}

fn default_database_url() -> String {
    "sqlite://shelterconnect.db?mode=rwc".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Resolve the configuration for this run
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(path) if !path.is_file() => {
                bail!("config file {} not found", path.display())
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        let figment = Self::defaults()
            .merge(Yaml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(with_cli_overrides(figment, cli))
            .with_context(|| format!("invalid configuration (file: {})", path.display()))
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let rows = self.shelter_service.default_rows_per_page;
        if !shelter_service::contract::ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            bail!(
                "shelter_service.default_rows_per_page must be one of {:?}, got {rows}",
                shelter_service::contract::ROWS_PER_PAGE_OPTIONS
            );
        }
        if self.shelter_service.max_logo_bytes > self.server.body_limit_bytes {
            bail!(
                "shelter_service.max_logo_bytes ({}) exceeds server.body_limit_bytes ({})",
                self.shelter_service.max_logo_bytes,
                self.server.body_limit_bytes
            );
        }
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.shelter_service.upload_dir
    }
}

fn with_cli_overrides(mut figment: Figment, cli: &Cli) -> Figment {
    if let Some(bind) = &cli.bind {
        figment = figment.merge(Serialized::default("server.bind_addr", bind));
    }
    if let Some(url) = &cli.database_url {
        figment = figment.merge(Serialized::default("database.url", url));
    }
    if let Some(dir) = &cli.upload_dir {
        figment = figment.merge(Serialized::default("shelter_service.upload_dir", dir));
    }
    figment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str, cli: &Cli) -> Result<AppConfig> {
        AppConfig::extract(with_cli_overrides(
            AppConfig::defaults().merge(Yaml::string(yaml)),
            cli,
        ))
    }

    #[test]
    fn test_defaults() {
        let config = from_yaml("", &Cli::default()).unwrap();
        assert_eq!(config.server.bind_addr.to_string(), "127.0.0.1:8087");
        assert_eq!(config.server.request_timeout, Duration::from_secs(30));
        assert!(config.server.cors_allow_any);
        assert_eq!(config.database.url, "sqlite://shelterconnect.db?mode=rwc");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.upload_dir(), Path::new("./uploads"));
        assert_eq!(config.shelter_service.default_rows_per_page, 5);
    }

    #[test]
    fn test_yaml_sections() {
        let yaml = r#"
server:
  bind_addr: "0.0.0.0:9000"
  request_timeout: 2m
logging:
  json: true
shelter_service:
  upload_dir: /var/lib/shelterconnect/uploads
  default_rows_per_page: 25
"#;
        let config = from_yaml(yaml, &Cli::default()).unwrap();
        assert_eq!(config.server.bind_addr.port(), 9000);
        assert_eq!(config.server.request_timeout, Duration::from_secs(120));
        assert!(config.logging.json);
        assert_eq!(
            config.upload_dir(),
            Path::new("/var/lib/shelterconnect/uploads")
        );
        assert_eq!(config.shelter_service.default_rows_per_page, 25);
        // Untouched keys keep their defaults.
        assert_eq!(config.shelter_service.max_logo_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_cli_flags_win() {
        let cli = Cli {
            bind: Some("127.0.0.1:7000".parse().unwrap()),
            database_url: Some("sqlite::memory:".to_string()),
            upload_dir: Some(PathBuf::from("/tmp/logos")),
            ..Default::default()
        };
        let yaml = "server:\n  bind_addr: \"0.0.0.0:9000\"\ndatabase:\n  url: postgres://db/shelter\n";
        let config = from_yaml(yaml, &cli).unwrap();
        assert_eq!(config.server.bind_addr.port(), 7000);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.upload_dir(), Path::new("/tmp/logos"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(from_yaml("server:\n  colour: blue\n", &Cli::default()).is_err());
        assert!(
            from_yaml("shelter_service:\n  default_rows_per_page: 7\n", &Cli::default()).is_err()
        );
        assert!(from_yaml(
            "server:\n  body_limit_bytes: 1024\nshelter_service:\n  max_logo_bytes: 4096\n",
            &Cli::default()
        )
        .is_err());
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(tmp.path().join("absent.yaml")),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
