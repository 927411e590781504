//! Configuration types, read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

/// Number of API key characters that may appear in logs.
const KEY_PREFIX_CHARS: usize = 10;

/// Upstream Gemini endpoint settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Full `generateContent` URL, including the model.
    pub api_url: String,
    pub api_key: SecretString,
    /// Request-level timeout for the upstream call.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// API key shortened for logging, e.g. `AIzaSyA1b2***`.
    pub fn masked_key(&self) -> String {
        mask_key(self.api_key.expose_secret())
    }
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(&lookup, "GEMINI_API_URL")?;
        let api_key = SecretString::from(required(&lookup, "GEMINI_API_KEY")?);

        let port: u16 = parse_or(&lookup, "EMAIL_WRITER_PORT", 8080)?;
        let bind: IpAddr = parse_or(&lookup, "EMAIL_WRITER_BIND", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let timeout_secs: u64 = parse_or(&lookup, "EMAIL_WRITER_TIMEOUT_SECS", 30)?;

        Ok(Self {
            bind,
            port,
            gemini: GeminiConfig {
                api_url,
                api_key,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

/// Keep only the first few characters of a secret.
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(KEY_PREFIX_CHARS).collect();
    format!("{prefix}***")
}
