use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ContactForm;
use crate::error::RelayError;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Something that can deliver a contact message.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

/// Relay account settings. Every field is optional in the config file; an
/// incomplete set is reported when a relay is built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// Fixed destination address passed to the template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
}

impl RelaySettings {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_RELAY_ENDPOINT)
    }

    /// Names of required fields that are unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ];
        fields
            .into_iter()
            .filter(|(_, v)| v.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS-compatible HTTP relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    to_email: String,
}

impl EmailJsRelay {
    /// Build a relay from settings. `fallback_to` is the destination used
    /// when the settings do not name one.
    pub fn new(settings: &RelaySettings, fallback_to: &str) -> Result<Self, RelayError> {
        if let Some(field) = settings.missing_fields().first() {
            return Err(RelayError::NotConfigured {
                field: field.to_string(),
            });
        }

        // No request timeout: latency is left to the relay.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RelayError::Transport {
                message: format!("client_init: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint().to_string(),
            service_id: settings.service_id.clone().unwrap_or_default(),
            template_id: settings.template_id.clone().unwrap_or_default(),
            public_key: settings.public_key.clone().unwrap_or_default(),
            to_email: settings
                .to_email
                .clone()
                .unwrap_or_else(|| fallback_to.to_string()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn to_email(&self) -> &str {
        &self.to_email
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                subject: &form.subject,
                message: &form.message,
                to_email: &self.to_email,
            },
        };

        log::debug!("POST {} (service {})", self.endpoint, self.service_id);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
