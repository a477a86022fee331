// src/config.rs
use crate::application::commands::articles::WriteCapability;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    store_url: String,
    store_service_key: String,
    edge_purge_url: String,
    edge_purge_token: String,
    revalidate_secret: Option<String>,
    public_base_url: String,
    redirect_timeout: Duration,
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

fn default_redirect_timeout_ms() -> u64 {
    2000
}

impl AppConfig {
    /// Build configuration from environment variables. The store and edge
    /// endpoints are required; the write secret is optional and its absence
    /// leaves the service read-only.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let store_url = env::var("STORE_URL").map_err(|_| ConfigError::Missing("STORE_URL"))?;
        let store_service_key =
            env::var("STORE_SERVICE_KEY").map_err(|_| ConfigError::Missing("STORE_SERVICE_KEY"))?;
        let edge_purge_url =
            env::var("EDGE_PURGE_URL").map_err(|_| ConfigError::Missing("EDGE_PURGE_URL"))?;
        let edge_purge_token =
            env::var("EDGE_PURGE_TOKEN").map_err(|_| ConfigError::Missing("EDGE_PURGE_TOKEN"))?;

        if !store_url.starts_with("http") {
            return Err(ConfigError::Invalid(
                "STORE_URL must be an http(s) endpoint".into(),
            ));
        }

        let revalidate_secret = env::var("REVALIDATE_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://{listen_addr}"));

        let redirect_timeout_ms = env::var("REDIRECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_redirect_timeout_ms);

        Ok(Self {
            listen_addr,
            store_url,
            store_service_key,
            edge_purge_url,
            edge_purge_token,
            revalidate_secret,
            public_base_url,
            redirect_timeout: Duration::from_millis(redirect_timeout_ms),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    pub fn store_service_key(&self) -> &str {
        &self.store_service_key
    }

    pub fn edge_purge_url(&self) -> &str {
        &self.edge_purge_url
    }

    pub fn edge_purge_token(&self) -> &str {
        &self.edge_purge_token
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn redirect_timeout(&self) -> Duration {
        self.redirect_timeout
    }

    /// The explicit capability value handed to write-path constructors.
    pub fn write_capability(&self) -> Option<WriteCapability> {
        self.revalidate_secret.as_deref().map(WriteCapability::new)
    }
}
