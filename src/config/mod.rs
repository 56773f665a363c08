use crate::core::{AppError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

pub mod billing;
pub mod server;

pub use billing::{StripeConfig, UnhandledEventPolicy};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub stripe: StripeConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::configuration(format!(
                "Invalid LOG_FORMAT '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Directory served at `/`, already resolved against the working directory
    pub dir: PathBuf,
}

impl StaticFilesConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("STATIC_DIR").unwrap_or_else(|| "client".to_string());
        let cwd = env::current_dir().map_err(|e| {
            AppError::configuration(format!("Cannot resolve working directory: {}", e))
        })?;

        Ok(StaticFilesConfig {
            dir: normalize(&cwd.join(raw)),
        })
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }
}

/// Lexically collapse `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // An explicit ENV_FILE wins over a .env in the working directory
        match env::var("ENV_FILE") {
            Ok(path) => {
                dotenvy::from_path(&path).map_err(|e| {
                    AppError::configuration(format!("Failed to load ENV_FILE {}: {}", path, e))
                })?;
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: LogFormat::parse(
                    &lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
                )?,
            },
            server: ServerConfig::from_lookup(&lookup)?,
            stripe: StripeConfig::from_lookup(&lookup)?,
            static_files: StaticFilesConfig::from_lookup(&lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }

        self.stripe.validate()
    }
}
