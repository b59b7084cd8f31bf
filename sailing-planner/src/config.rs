//! Application configuration from environment variables.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::output::OutputFormat;
use crate::planner::{DEFAULT_BASE_CURRENCY, DEFAULT_MAX_LEGS, SearchConfig};

/// Default catalog path.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Default HTTP bind address.
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 3000);

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable has a value we cannot use
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    /// A variable required by another setting is unset
    #[error("{name} must be set when {because}")]
    Missing {
        name: &'static str,
        because: &'static str,
    },
}

/// Where the search request comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Three lines on standard input.
    #[default]
    Stdin,
    /// Three lines in a file.
    File(PathBuf),
    /// JSON requests over HTTP.
    Api,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "file ({})", path.display()),
            InputSource::Api => f.write_str("api"),
        }
    }
}

/// Everything the binary needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the catalog JSON file.
    pub data_file: PathBuf,

    /// Where to read the search request.
    pub input: InputSource,

    /// Result document format.
    pub output_format: OutputFormat,

    /// Print every tied route instead of only the first.
    pub return_multiple_routes: bool,

    /// Planner settings: leg bound and base currency.
    pub search: SearchConfig,

    /// HTTP bind address, used in `Api` mode.
    pub listen_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            input: InputSource::default(),
            output_format: OutputFormat::default(),
            return_multiple_routes: false,
            search: SearchConfig::default(),
            listen_addr: DEFAULT_LISTEN_ADDR,
        }
    }
}

fn invalid(name: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        reason: reason.to_string(),
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(invalid(name, format!("expected true or false, got '{other}'"))),
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DATA_FILE` | `data.json` |
    /// | `INPUT_TYPE` | `stdin` (`file`, `api`) |
    /// | `INPUT_FILE` | required for `file` input |
    /// | `OUTPUT_FORMAT` | `json` |
    /// | `RETURN_MULTIPLE_ROUTES` | `false` |
    /// | `BASE_CURRENCY` | `EUR` |
    /// | `MAX_LEGS` | `4` |
    /// | `LISTEN_ADDR` | `127.0.0.1:3000` |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("DATA_FILE").filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path.trim());
        }

        config.input = match lookup("INPUT_TYPE").as_deref().map(str::trim) {
            None | Some("") | Some("stdin") => InputSource::Stdin,
            Some("file") => {
                let path = lookup("INPUT_FILE")
                    .filter(|p| !p.trim().is_empty())
                    .ok_or(ConfigError::Missing {
                        name: "INPUT_FILE",
                        because: "INPUT_TYPE is file",
                    })?;
                InputSource::File(PathBuf::from(path.trim()))
            }
            Some("api") => InputSource::Api,
            Some(other) => {
                return Err(invalid(
                    "INPUT_TYPE",
                    format!("unknown input type '{other}' (allowed: stdin, file, api)"),
                ));
            }
        };

        if let Some(format) = lookup("OUTPUT_FORMAT") {
            config.output_format =
                OutputFormat::from_str(&format).map_err(|e| invalid("OUTPUT_FORMAT", e))?;
        }

        if let Some(flag) = lookup("RETURN_MULTIPLE_ROUTES") {
            config.return_multiple_routes = parse_flag("RETURN_MULTIPLE_ROUTES", &flag)?;
        }

        let base_currency = lookup("BASE_CURRENCY")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());

        let max_legs = match lookup("MAX_LEGS") {
            None => DEFAULT_MAX_LEGS,
            Some(value) => {
                let legs: usize = value
                    .trim()
                    .parse()
                    .map_err(|e| invalid("MAX_LEGS", e))?;
                if legs == 0 {
                    return Err(invalid("MAX_LEGS", "must be greater than 0"));
                }
                legs
            }
        };
        config.search = SearchConfig::new(max_legs, base_currency);

        if let Some(addr) = lookup("LISTEN_ADDR") {
            config.listen_addr = addr.trim().parse().map_err(|e| invalid("LISTEN_ADDR", e))?;
        }

        Ok(config)
    }
}
