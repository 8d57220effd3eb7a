//! Service configuration read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PLAYGROUND_HOST` | `0.0.0.0` |
//! | `PLAYGROUND_PORT` | `8000` |
//! | `PLAYGROUND_API_TOKEN` | `secret123` |
//! | `PLAYGROUND_ADMIN_USERNAME` | `admin` |
//! | `PLAYGROUND_ADMIN_PASSWORD` | `admin` |
//! | `PLAYGROUND_GREETING_DELAY_MS` | `2000` |
//! | `PLAYGROUND_APP_NAME` | `FastAPI-Revision` |
//! | `LOG_FORMAT` | `pretty` |

use axum::http::HeaderValue;
use std::time::Duration;
use thiserror::Error;

use crate::shell::observability::LogFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    pub host: String,
    pub port: u16,
    /// Value the `token` header must carry on protected routes.
    pub api_token: String,
    pub admin: Credentials,
    pub greeting_delay: Duration,
    /// Sent as `X-App-Name` on every response.
    pub app_name: HeaderValue,
    pub log_format: LogFormat,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            api_token: "secret123".into(),
            admin: Credentials {
                username: "admin".into(),
                password: "admin".into(),
            },
            greeting_delay: Duration::from_secs(2),
            app_name: HeaderValue::from_static("FastAPI-Revision"),
            log_format: LogFormat::Pretty,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys keep their
    /// default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("PLAYGROUND_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PLAYGROUND_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "PLAYGROUND_PORT",
                expected: "a port number",
                value: port,
            })?;
        }
        if let Some(token) = lookup("PLAYGROUND_API_TOKEN") {
            config.api_token = token;
        }
        if let Some(username) = lookup("PLAYGROUND_ADMIN_USERNAME") {
            config.admin.username = username;
        }
        if let Some(password) = lookup("PLAYGROUND_ADMIN_PASSWORD") {
            config.admin.password = password;
        }
        if let Some(delay) = lookup("PLAYGROUND_GREETING_DELAY_MS") {
            let millis: u64 = delay.parse().map_err(|_| ConfigError::Invalid {
                key: "PLAYGROUND_GREETING_DELAY_MS",
                expected: "a number of milliseconds",
                value: delay,
            })?;
            config.greeting_delay = Duration::from_millis(millis);
        }
        if let Some(name) = lookup("PLAYGROUND_APP_NAME") {
            config.app_name = HeaderValue::from_str(&name).map_err(|_| ConfigError::Invalid {
                key: "PLAYGROUND_APP_NAME",
                expected: "a valid header value",
                value: name,
            })?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            config.log_format = LogFormat::parse(&format);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
