//! Client-side wrapper for the contact endpoint.
//!
//! Bridges local form state to the remote handler: validates with the same
//! rules the server enforces, POSTs the form as JSON, and maps every
//! failure into a message presentable to the end user.

use derive_more::Display;
use serde::Deserialize;
use url::Url;
use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactResponse},
    errors::FieldError,
};

#[derive(Debug, Display)]
pub enum SubmitError {
    /// Local validation rejected the form; no request was made.
    #[display("Validation failed")]
    Invalid(Vec<FieldError>),

    /// The server answered with a non-success status.
    #[display("{message}")]
    Api { status: u16, message: String },

    /// No usable response at all (connect, read, or decode failure).
    #[display("Failed to submit contact form: {_0}")]
    Network(String),
}

impl SubmitError {
    /// A message suitable for showing to the end user. Field errors are
    /// joined; the other variants already read as user-facing text.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(errors) => errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ContactClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl ContactClient {
    pub fn new(endpoint: Url) -> Self {
        ContactClient {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<ContactResponse, SubmitError> {
        form.validate()
            .map_err(|e| SubmitError::Invalid(FieldError::list_from(&e)))?;

        let response = self.http
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP error! status: {}", status.as_u16()));

            return Err(SubmitError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ContactResponse>()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "a@b.com".to_string(),
            subject: "x".to_string(),
            message: "short".to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_form_is_rejected_without_a_request() {
        // Unroutable endpoint: a network attempt would fail differently.
        let client = ContactClient::new(Url::parse("http://192.0.2.1:9/api/contact").unwrap());

        let err = client.submit(&short_form()).await.unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected local validation failure");
        };

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"message"));
    }

    #[test]
    fn user_message_joins_field_errors() {
        let err = SubmitError::Invalid(vec![
            FieldError { field: "name".into(), message: "Nome deve ter pelo menos 3 caracteres".into() },
            FieldError { field: "message".into(), message: "Mensagem deve ter pelo menos 20 caracteres".into() },
        ]);

        assert_eq!(
            err.user_message(),
            "Nome deve ter pelo menos 3 caracteres, Mensagem deve ter pelo menos 20 caracteres"
        );
    }

    #[test]
    fn api_errors_read_as_the_server_message() {
        let err = SubmitError::Api {
            status: 429,
            message: "Too many requests. Please try again later.".to_string(),
        };

        assert_eq!(err.user_message(), "Too many requests. Please try again later.");
    }
}
