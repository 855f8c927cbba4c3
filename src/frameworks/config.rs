use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

// Runtime/server settings.

pub const CONFIG_PATH_VAR: &str = "LOGIN_CONFIG";
pub const HOST_VAR: &str = "LOGIN_HOST";
pub const PORT_VAR: &str = "LOGIN_PORT";
pub const MAX_BODY_BYTES_VAR: &str = "LOGIN_MAX_BODY_BYTES";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    // Defaults, then the optional TOML file, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        Ok(config.with_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = parse_var(&lookup, HOST_VAR) {
            self.host = host;
        }
        if let Some(port) = parse_var(&lookup, PORT_VAR) {
            self.port = port;
        }
        if let Some(max_body_bytes) = parse_var(&lookup, MAX_BODY_BYTES_VAR) {
            self.max_body_bytes = max_body_bytes;
        }
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// Output format for the tracing subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::from_value(env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    // Only an exact `json` switches to JSON output.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            _ => Self::Compact,
        }
    }
}

// Unparseable values keep the current setting.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring invalid config override");
            None
        }
    }
}
