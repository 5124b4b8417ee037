use async_trait::async_trait;
use derive_more::Display;
use zeroize::Zeroizing;

use crate::entities::contact::EmailMessage;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Display)]
pub enum ProviderError {
    #[display("Provider rejected the message: {_0}")]
    Rejected(String),

    #[display("Provider transport error: {_0}")]
    Transport(String),
}

/// Delivery capability. Selected once at construction; the dispatcher
/// depends only on this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError>;
}

/// Sends through the Resend HTTP API.
pub struct ResendProvider {
    api_key: Zeroizing<String>,
    http: reqwest::Client,
}

impl ResendProvider {
    pub fn new(api_key: String) -> Self {
        ResendProvider {
            api_key: Zeroizing::new(api_key),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        let response = self.http
            .post(RESEND_ENDPOINT)
            .bearer_auth(self.api_key.as_str())
            .json(&serde_json::json!({
                "from": email.from,
                "to": [email.to],
                "subject": email.subject,
                "html": email.html,
            }))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ProviderError::Rejected(format!("{}: {}", status, body)))
        }
    }
}

/// Logs the message instead of sending it. Selected when no provider
/// credential is configured, so local development needs no secrets.
pub struct LogProvider;

#[async_trait]
impl EmailProvider for LogProvider {
    fn name(&self) -> &'static str {
        "log-only"
    }

    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        tracing::info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            "Email would be sent"
        );
        Ok(())
    }
}
