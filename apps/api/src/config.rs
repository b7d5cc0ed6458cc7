use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.0-pro-exp-02-05";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; a missing API key is reported by `main` and
/// surfaces as an upstream error on the first request.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config for tests; never read from the process environment.
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            port: 8000,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_api_key_rejects_blank() {
        let mut config = Config::for_tests();
        assert!(config.has_api_key());

        config.gemini_api_key = "   ".to_string();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_env_or_falls_back_for_unset_key() {
        let value = env_or("ECOSYSTEM_API_SURELY_UNSET_VARIABLE", "fallback");
        assert_eq!(value, "fallback");
    }
}
