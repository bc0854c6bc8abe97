//! Contact form and its delivery through an external mail relay.
//!
//! Delivery is a single request. There is no retry, no queue and no local
//! timeout; the relay's own behaviour governs latency. From the caller's
//! point of view the operation is atomic: the relay acknowledges the
//! message or it does not.

mod relay;

pub use relay::{DEFAULT_RELAY_ENDPOINT, EmailJsRelay, MailRelay, RelaySettings};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::utils::validation::{validate_email, validate_required};

/// Shown after the relay acknowledged the message.
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";

/// Shown when the relay call failed. `{email}` is replaced by the fallback
/// contact address.
pub const FAILURE_MESSAGE: &str =
    "Sorry, your message could not be sent. Please try again or email me directly at {email}.";

/// Failure message with the fallback address filled in.
pub fn failure_message(fallback_email: &str) -> String {
    FAILURE_MESSAGE.replace("{email}", fallback_email)
}

/// The four user-entered fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Copy of the form with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Subject => next.subject = value,
            FormField::Message => next.message = value,
        }
        next
    }

    /// All fields present and the sender address well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in FormField::ALL {
            validate_required(field.label(), self.field(field))?;
        }
        validate_email(&self.email)
    }
}

/// Result of one submission, as far as the UI is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    /// User-visible text for this outcome.
    pub fn message(self, fallback_email: &str) -> String {
        match self {
            SubmitOutcome::Sent => SUCCESS_MESSAGE.to_string(),
            SubmitOutcome::Failed => failure_message(fallback_email),
        }
    }
}

/// Send `form` through `relay` once. Errors are logged and collapsed into
/// [`SubmitOutcome::Failed`].
pub async fn submit<R>(relay: &R, form: &ContactForm) -> SubmitOutcome
where
    R: MailRelay + ?Sized,
{
    match relay.send(form).await {
        Ok(()) => {
            log::info!("Contact message from <{}> delivered", form.email);
            SubmitOutcome::Sent
        }
        Err(e) => {
            log::warn!("Contact message from <{}> failed: {}", form.email, e);
            SubmitOutcome::Failed
        }
    }
}
