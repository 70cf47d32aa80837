//! Form-submission relay client

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Client;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, Settings};

const SUBMIT_ENDPOINT: &str = "contact";

/// Message reported for an accepted submission
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// Relay endpoint and the access key sent with every submission
#[derive(Clone, PartialEq, Eq)]
pub struct ContactConfig {
    endpoint: String,
    access_key: String,
}

impl ContactConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}

impl fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &"<redacted>")
            .finish()
    }
}

/// Field names the relay owns; visitor-supplied values for these never
/// reach the remote
const RESERVED_FIELDS: [&str; 5] = ["access_key", "name", "email", "subject", "message"];

/// A visitor's contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    /// Any further fields (honeypots, checkboxes, team names) are forwarded
    /// as-is, except the reserved `access_key`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
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
            extra: BTreeMap::new(),
        }
    }

    /// Reject forms missing a sender, an email address or a message
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "name must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(Error::validation("email", "email address is not valid"));
        }
        if self.message.trim().is_empty() {
            return Err(Error::validation("message", "message must not be empty"));
        }
        Ok(())
    }
}

/// Outcome reported by the relay service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ContactOutcome {
    /// Human-readable status to show the visitor
    pub fn status_message(&self) -> &str {
        if self.success {
            SUCCESS_MESSAGE
        } else {
            &self.message
        }
    }
}

/// Outgoing body: the configured access key, the form fields, then any
/// extra field whose name is not reserved
struct Submission<'a> {
    access_key: &'a str,
    form: &'a ContactForm,
}

impl Serialize for Submission<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("access_key", self.access_key)?;
        map.serialize_entry("name", &self.form.name)?;
        map.serialize_entry("email", &self.form.email)?;
        map.serialize_entry("subject", &self.form.subject)?;
        map.serialize_entry("message", &self.form.message)?;
        for (key, value) in &self.form.extra {
            if !RESERVED_FIELDS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Client for the form-submission service
#[derive(Debug, Clone)]
pub struct ContactRelay {
    client: Client,
    config: ContactConfig,
}

impl ContactRelay {
    pub fn new(client: Client, config: ContactConfig) -> Self {
        Self { client, config }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = crate::network::build_http_client(&settings.network)?;
        Ok(Self::new(client, settings.contact_config()?))
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Validate and forward a form.
    ///
    /// A rejected submission whose body still carries `{success, message}`
    /// comes back as an unsuccessful [`ContactOutcome`], not an error.
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactOutcome> {
        form.validate()?;

        tracing::debug!("POST {} (form from {})", self.config.endpoint, form.email);

        if form.extra.contains_key("access_key") {
            tracing::warn!("Ignoring access_key supplied in a contact form");
        }

        let body = Submission {
            access_key: &self.config.access_key,
            form,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach contact relay: {}", e);
                Error::network(SUBMIT_ENDPOINT, e)
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network(SUBMIT_ENDPOINT, e))?;

        match serde_json::from_slice::<ContactOutcome>(&bytes) {
            Ok(outcome) => {
                if !outcome.success {
                    tracing::warn!("Contact relay rejected submission: {}", outcome.message);
                }
                Ok(outcome)
            }
            Err(_) if !status.is_success() => {
                let message = status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string();
                tracing::error!("Contact relay returned error status {}", status);
                Err(Error::remote(SUBMIT_ENDPOINT, status.as_u16(), message))
            }
            Err(e) => Err(Error::decode(SUBMIT_ENDPOINT, e.to_string())),
        }
    }
}
