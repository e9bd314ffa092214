use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub runtime: RuntimeSection,
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("IS_POSITIVE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from the given file (if present) and environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("IS_POSITIVE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if let Ok(mode) = env::var("IS_POSITIVE_MODE") {
            config.runtime.mode = mode.parse().context("invalid IS_POSITIVE_MODE")?;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;

        Ok(config)
    }

    /// Reject settings the selected runtime cannot start with.
    pub fn validate(&self) -> Result<()> {
        if matches!(self.runtime.mode, RuntimeMode::Http) {
            if self.server.host.trim().is_empty() {
                bail!("server.host must be specified in http mode");
            }
            if self.server.port == 0 {
                bail!("server.port must be non-zero in http mode");
            }
        }
        Ok(())
    }

    /// Address the local HTTP adapter binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeSection {
    pub mode: RuntimeMode,
}

/// How the function is hosted
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Serve invocations from the Lambda runtime API
    #[default]
    Lambda,
    /// Serve a local HTTP endpoint
    Http,
}

impl std::str::FromStr for RuntimeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lambda" => Ok(RuntimeMode::Lambda),
            "http" => Ok(RuntimeMode::Http),
            other => anyhow::bail!("unsupported runtime mode: {}", other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mode_from_str() {
        assert_eq!("lambda".parse::<RuntimeMode>().unwrap(), RuntimeMode::Lambda);
        assert_eq!(" HTTP ".parse::<RuntimeMode>().unwrap(), RuntimeMode::Http);
        assert!("grpc".parse::<RuntimeMode>().is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }
}
