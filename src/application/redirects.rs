// src/application/redirects.rs
//
// Request-time lookup of legacy-path redirect rules. A redirect-service
// outage degrades to normal serving, never to an error page, so every
// failure mode collapses to `None` inside the latency budget.
use crate::domain::redirect::RedirectRuleSource;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

pub struct RedirectResolver {
    source: Arc<dyn RedirectRuleSource>,
    timeout: Duration,
}

impl RedirectResolver {
    pub fn new(source: Arc<dyn RedirectRuleSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub async fn resolve_legacy_path(&self, path: &str) -> Option<String> {
        let lookup = self.source.find_by_source(path);
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(Ok(Some(rule))) => {
                if rule.destination == path {
                    // Self-redirect from malformed data would loop forever.
                    tracing::warn!(path, "ignoring self-redirect rule");
                    None
                } else {
                    Some(rule.destination)
                }
            }
            Ok(Ok(None)) => None,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, path, "redirect rule lookup failed");
                None
            }
            Err(_) => {
                tracing::warn!(path, timeout_ms = self.timeout.as_millis() as u64, "redirect rule lookup timed out");
                None
            }
        }
    }
}
