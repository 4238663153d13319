use std::env;

use anyhow::{Context, Result};

use crate::services::phone_services::normalize_country_code;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Used by `/api/phone/*` when the request carries no country code.
    pub default_country_code: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: split_origins(DEFAULT_ORIGINS),
            default_country_code: "+1".to_string(),
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Reads `BIND_HOST`, `PORT`, `ALLOWED_ORIGINS` and `DEFAULT_COUNTRY_CODE`;
    /// anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(p) => p
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {p:?}"))?,
            Err(_) => defaults.port,
        };

        let default_country_code = match env::var("DEFAULT_COUNTRY_CODE") {
            Ok(code) => {
                let code = normalize_country_code(&code);
                anyhow::ensure!(!code.is_empty(), "DEFAULT_COUNTRY_CODE must contain digits");
                code
            }
            Err(_) => defaults.default_country_code,
        };

        Ok(Self {
            bind_host: env::var("BIND_HOST").unwrap_or(defaults.bind_host),
            port,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or(defaults.allowed_origins),
            default_country_code,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}
