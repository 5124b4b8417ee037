use chrono::Utc;
use uuid::Uuid;

use crate::{
    constants::SUCCESS_MESSAGE,
    entities::contact::{ContactForm, ContactResponse, EmailMessage},
    errors::AppError,
    email::dispatcher::EmailDispatcher,
};

/// Orchestrates one contact submission: validate, log, dispatch.
pub struct ContactHandler {
    dispatcher: EmailDispatcher,
}

impl ContactHandler {
    pub fn new(dispatcher: EmailDispatcher) -> Self {
        ContactHandler { dispatcher }
    }

    pub fn provider_name(&self) -> &'static str {
        self.dispatcher.provider_name()
    }

    /// Handles a submission payload that already passed the rate limiter.
    pub async fn submit_contact_message(
        &self,
        payload: serde_json::Value,
        client_key: &str,
    ) -> Result<ContactResponse, AppError> {
        let form = ContactForm::parse(payload)?;

        // Logged once validation passes, before dispatch, so a failed
        // delivery still leaves a record of the message.
        tracing::info!(
            submission_id = %Uuid::new_v4(),
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            body = %form.message,
            client_key = %client_key,
            timestamp = %Utc::now().to_rfc3339(),
            "Contact form submission"
        );

        let email = EmailMessage::from_form(
            &form,
            self.dispatcher.default_to(),
            self.dispatcher.default_from(),
        );

        if !self.dispatcher.dispatch(&email).await {
            return Err(AppError::DispatchFailed);
        }

        Ok(ContactResponse {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}
