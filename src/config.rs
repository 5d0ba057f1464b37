// src/config.rs

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for the daily rolling log file.
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    /// Upper bound for request bodies, in bytes.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            max_body_bytes: 256 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", defaults.port);
        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);
        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.cors_origins);

        let max_body_bytes = parse_or("MAX_BODY_BYTES", defaults.max_body_bytes);

        Self {
            host,
            port,
            rust_log,
            log_dir,
            cors_origins,
            max_body_bytes,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads `key` and parses it, falling back to `default` when the variable is
/// missing or malformed.
fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            // Logging is not initialised yet at this point.
            eprintln!("{key}={raw:?} is invalid, using {default}");
            default
        }),
        Err(_) => default,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
