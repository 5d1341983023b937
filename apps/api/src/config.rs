use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default, so a bare `cargo run` starts a usable server.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// HTML-escape user text before it is interpolated into resume markup.
    /// Disable only to reproduce legacy byte-for-byte output.
    pub escape_user_text: bool,
    pub max_body_bytes: usize,
    /// Single allowed browser origin. `None` means permissive CORS.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            escape_user_text: optional_env("ESCAPE_USER_TEXT")
                .map(|v| parse_bool("ESCAPE_USER_TEXT", &v))
                .transpose()?
                .unwrap_or(true),
            max_body_bytes: optional_env("MAX_BODY_BYTES")
                .map(|v| {
                    v.parse::<usize>()
                        .context("MAX_BODY_BYTES must be a byte count")
                })
                .transpose()?
                .unwrap_or(1024 * 1024),
            cors_allow_origin: optional_env("CORS_ALLOW_ORIGIN"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            escape_user_text: true,
            max_body_bytes: 1024 * 1024,
            cors_allow_origin: None,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{key} must be a boolean, got '{other}'"),
    }
}
