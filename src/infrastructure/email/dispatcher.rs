use std::{sync::Arc, time::Duration};

use tokio::time::timeout;

use crate::{entities::contact::EmailMessage, settings::AppConfig};
use super::provider::{EmailProvider, LogProvider, ResendProvider};

/// Delivers validated submissions through the configured provider.
///
/// Failures never cross this boundary: provider errors, transport errors
/// and timeouts all collapse into a `false` return with the cause logged.
pub struct EmailDispatcher {
    provider: Arc<dyn EmailProvider>,
    default_to: String,
    default_from: String,
    send_timeout: Duration,
}

impl EmailDispatcher {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        default_to: impl Into<String>,
        default_from: impl Into<String>,
        send_timeout: Duration,
    ) -> Self {
        EmailDispatcher {
            provider,
            default_to: default_to.into(),
            default_from: default_from.into(),
            send_timeout,
        }
    }

    /// Absence of a provider credential is a valid configuration selecting
    /// log-only mode, not an error.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider: Arc<dyn EmailProvider> = match &config.resend_api_key {
            Some(key) if !key.trim().is_empty() => Arc::new(ResendProvider::new(key.clone())),
            _ => Arc::new(LogProvider),
        };

        EmailDispatcher::new(
            provider,
            config.contact_email.clone(),
            config.from_email.clone(),
            Duration::from_secs(config.email_timeout_secs),
        )
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn default_to(&self) -> &str {
        &self.default_to
    }

    pub fn default_from(&self) -> &str {
        &self.default_from
    }

    pub async fn dispatch(&self, email: &EmailMessage) -> bool {
        match timeout(self.send_timeout, self.provider.send(email)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::error!(
                    provider = self.provider.name(),
                    error = %e,
                    "Email dispatch failed"
                );
                false
            }
            Err(_) => {
                tracing::error!(
                    provider = self.provider.name(),
                    timeout = ?self.send_timeout,
                    "Email dispatch timed out"
                );
                false
            }
        }
    }
}
