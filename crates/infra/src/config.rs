//! Configuration loading and representation.
//!
//! Everything comes from environment variables:
//!
//! | variable | default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `INVENTORY_FILE` | `inventory.txt` |
//! | `IMPORT_DIR` | directory of `INVENTORY_FILE` |
//! | `LOG_FORMAT` | `json` (`json` or `pretty`) |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use thiserror::Error;

use gildedrose_observability::LogFormat;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub inventory_file: PathBuf,
    /// Files loaded over HTTP must live under this directory.
    pub import_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            import_dir: parent_dir(Path::new(DEFAULT_INVENTORY_FILE)),
            log_format: LogFormat::default(),
        }
    }
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn parse_var<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (unset variables return `None`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let inventory_file = lookup("INVENTORY_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_file);

        let import_dir = lookup("IMPORT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| parent_dir(&inventory_file));

        Ok(Self {
            host: parse_var("HOST", lookup("HOST"), defaults.host)?,
            port: parse_var("PORT", lookup("PORT"), defaults.port)?,
            inventory_file,
            import_dir,
            log_format: parse_var("LOG_FORMAT", lookup("LOG_FORMAT"), defaults.log_format)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
