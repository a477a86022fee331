// src/application/commands/articles/capability.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use std::fmt;

/// Capability to perform privileged writes (article mutation, cache
/// invalidation, scheduler trigger).
///
/// Constructed once at startup from configuration and handed to every
/// write-path constructor, so the dependency is visible in signatures rather
/// than read from ambient process state. An absent capability makes write
/// paths fail fast before touching the store.
#[derive(Clone)]
pub struct WriteCapability {
    secret: String,
}

impl WriteCapability {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn matches(&self, presented: &str) -> bool {
        self.secret == presented
    }
}

impl fmt::Debug for WriteCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriteCapability(..)")
    }
}

/// Gate for privileged operations: configuration error when no capability is
/// configured, unauthorized when the presented credential is missing or wrong.
pub fn ensure_write_capability(
    capability: Option<&WriteCapability>,
    presented: Option<&str>,
) -> ApplicationResult<()> {
    let capability = capability.ok_or_else(|| {
        ApplicationError::configuration("write capability is not configured")
    })?;

    match presented {
        Some(token) if capability.matches(token) => Ok(()),
        Some(_) => Err(ApplicationError::unauthorized("invalid credential")),
        None => Err(ApplicationError::unauthorized("missing credential")),
    }
}
