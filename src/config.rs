// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    token_ttl: Option<Duration>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. `DATABASE_URL` is
    /// required; everything else has a local-development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        // Unset means tokens do not expire; revocation happens via logout.
        let token_ttl = match env::var("TOKEN_TTL_SECONDS") {
            Err(_) => None,
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::Invalid("TOKEN_TTL_SECONDS must be a positive integer".into())
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid(
                        "TOKEN_TTL_SECONDS must be a positive integer".into(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            token_ttl,
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
