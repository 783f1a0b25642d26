use std::collections::HashMap;

/// Default location of the SQLite database file.
pub const DEFAULT_DATABASE_PATH: &str = "./data/playlist.db";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Deployment mode, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Whether internal error details may be exposed in responses.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Log output format, read from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, no credentials.
    Any,
    /// An explicit allow-list.
    List(Vec<String>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Pool size (default: `1`, a single writer).
    pub database_max_connections: u32,
    pub cors_origins: CorsOrigins,
    pub environment: Environment,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `HOST`                     | `0.0.0.0`                     |
    /// | `PORT`                     | `3000`                        |
    /// | `DATABASE_URL`             | `sqlite://<DATABASE_PATH>`    |
    /// | `DATABASE_PATH`            | `./data/playlist.db`          |
    /// | `DATABASE_MAX_CONNECTIONS` | `1`                           |
    /// | `CORS_ORIGINS`             | `*`                           |
    /// | `APP_ENV`                  | `production`                  |
    /// | `LOG_FORMAT`               | `pretty`                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an explicit set of variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match var("PORT") {
            Some(raw) => parse_var("PORT", "port number", &raw)?,
            None => 3000,
        };

        let database_url = var("DATABASE_URL").unwrap_or_else(|| {
            let path = var("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.into());
            format!("sqlite://{path}")
        });

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => {
                let n: u32 = parse_var("DATABASE_MAX_CONNECTIONS", "positive integer", &raw)?;
                if n == 0 {
                    return Err(invalid("DATABASE_MAX_CONNECTIONS", "positive integer", &raw));
                }
                n
            }
            None => 1,
        };

        let cors_origins = match var("CORS_ORIGINS") {
            None => CorsOrigins::Any,
            Some(raw) if raw.trim() == "*" => CorsOrigins::Any,
            Some(raw) => CorsOrigins::List(
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
        };

        let environment = match var("APP_ENV").as_deref().map(str::to_ascii_lowercase) {
            None => Environment::Production,
            Some(v) if v == "development" || v == "dev" => Environment::Development,
            Some(v) if v == "production" || v == "prod" => Environment::Production,
            Some(v) => return Err(invalid("APP_ENV", "environment (development|production)", &v)),
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase) {
            None => LogFormat::Pretty,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) => return Err(invalid("LOG_FORMAT", "log format (pretty|json)", &v)),
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            environment,
            log_format,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(name, expected, raw))
}

fn invalid(name: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    }
}
