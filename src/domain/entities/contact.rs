use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, FieldError};

/// A contact-form submission. The same rules run on the client wrapper
/// and on the server, which re-validates every payload it receives.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(min = 3, message = "Nome deve ter pelo menos 3 caracteres"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Assunto é obrigatório"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 20, message = "Mensagem deve ter pelo menos 20 caracteres"))]
    pub message: String,
}

impl ContactForm {
    /// Validates an untyped payload into a well-formed submission.
    ///
    /// Missing fields default to empty strings and fail the matching field
    /// check; a field of the wrong JSON type is reported against the
    /// payload. Neither is a fault.
    pub fn parse(payload: serde_json::Value) -> Result<Self, AppError> {
        let form: ContactForm = serde_json::from_value(payload).map_err(|e| {
            AppError::ValidationError(vec![FieldError {
                field: "payload".to_string(),
                message: format!("Invalid payload: {}", e),
            }])
        })?;

        form.validate()?;

        Ok(form)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// An outgoing email derived from a validated submission plus the
/// configured destination and sender addresses.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

impl EmailMessage {
    pub fn from_form(form: &ContactForm, to: &str, from: &str) -> Self {
        EmailMessage {
            to: to.to_string(),
            from: from.to_string(),
            subject: format!("Portfolio Contact: {}", form.subject),
            html: render_html(form),
        }
    }
}

/// User content is sanitized before interpolation into the HTML body.
fn render_html(form: &ContactForm) -> String {
    let name = ammonia::clean(&form.name);
    let email = ammonia::clean(&form.email);
    let subject = ammonia::clean(&form.subject);
    let message = ammonia::clean(&form.message).replace('\n', "<br>");

    format!(
        "<h2>Nova mensagem do portfólio</h2>\
         <p><strong>Nome:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Assunto:</strong> {subject}</p>\
         <p><strong>Mensagem:</strong></p>\
         <p>{message}</p>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> serde_json::Value {
        json!({
            "name": "Maria Silva",
            "email": "maria@example.com",
            "subject": "Oportunidade de projeto",
            "message": "Olá! Gostaria de conversar sobre um projeto novo."
        })
    }

    fn field_errors(result: Result<ContactForm, AppError>) -> Vec<FieldError> {
        match result {
            Err(AppError::ValidationError(errors)) => errors,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let form = ContactForm::parse(valid_payload()).unwrap();
        assert_eq!(form.name, "Maria Silva");
        assert_eq!(form.email, "maria@example.com");
    }

    #[test]
    fn short_name_fails_with_name_error() {
        let mut payload = valid_payload();
        payload["name"] = json!("Jo");

        let errors = field_errors(ContactForm::parse(payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Nome deve ter pelo menos 3 caracteres");
    }

    #[test]
    fn three_char_name_passes_name_check() {
        let mut payload = valid_payload();
        payload["name"] = json!("Ana");

        assert!(ContactForm::parse(payload).is_ok());
    }

    #[test]
    fn short_message_fails_with_message_error() {
        let mut payload = valid_payload();
        payload["message"] = json!("short");

        let errors = field_errors(ContactForm::parse(payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "message");
        assert_eq!(errors[0].message, "Mensagem deve ter pelo menos 20 caracteres");
    }

    #[test]
    fn malformed_emails_fail_with_email_error() {
        for bad in ["not-an-email", "user@", "no-domain@", "plain"] {
            let mut payload = valid_payload();
            payload["email"] = json!(bad);

            let errors = field_errors(ContactForm::parse(payload));
            assert!(
                errors.iter().any(|e| e.field == "email" && e.message == "Email inválido"),
                "expected email error for {:?}, got {:?}", bad, errors
            );
        }
    }

    #[test]
    fn empty_subject_fails_with_subject_error() {
        let mut payload = valid_payload();
        payload["subject"] = json!("");

        let errors = field_errors(ContactForm::parse(payload));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "subject");
        assert_eq!(errors[0].message, "Assunto é obrigatório");
    }

    #[test]
    fn missing_fields_fail_every_check() {
        let errors = field_errors(ContactForm::parse(json!({})));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        for field in ["name", "email", "subject", "message"] {
            assert!(fields.contains(&field), "missing error for {field}");
        }
    }

    #[test]
    fn wrong_field_type_is_a_payload_error() {
        let mut payload = valid_payload();
        payload["name"] = json!(42);

        let errors = field_errors(ContactForm::parse(payload));
        assert_eq!(errors[0].field, "payload");
    }

    #[test]
    fn email_message_carries_subject_prefix_and_addresses() {
        let form = ContactForm::parse(valid_payload()).unwrap();
        let email = EmailMessage::from_form(&form, "inbox@example.com", "noreply@example.com");

        assert_eq!(email.to, "inbox@example.com");
        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.subject, "Portfolio Contact: Oportunidade de projeto");
        assert!(email.html.contains("Maria Silva"));
    }

    #[test]
    fn html_body_renders_newlines_and_strips_scripts() {
        let mut payload = valid_payload();
        payload["message"] = json!("first line\nsecond line <script>alert(1)</script> padding");

        let form = ContactForm::parse(payload).unwrap();
        let email = EmailMessage::from_form(&form, "inbox@example.com", "noreply@example.com");

        assert!(email.html.contains("first line<br>second line"));
        assert!(!email.html.contains("<script>"));
    }
}
