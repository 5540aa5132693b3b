//! Fields shared by every message class.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Generate an id suitable for `clientId`, `messageId` or the `DSId` header.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Routing/correlation metadata plus the payload body.
///
/// `messageId` is assigned at most once per instance: it is set from
/// [`EnvelopeOptions`] at construction or lazily by
/// [`Envelope::ensure_message_id`], and never overwritten afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    /// Data delivered to the remote destination.
    pub body: Value,
    /// Message agent that sent the message.
    pub client_id: Option<String>,
    /// Target service.
    pub destination: Option<String>,
    /// Message headers. Core names are in [`super::headers`].
    pub headers: Map<String, Value>,
    message_id: Option<String>,
    /// Generation time, milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    /// Validity window in milliseconds. Interpreted by delivery schedulers.
    pub time_to_live: Option<i64>,
    /// Processing metadata. Never serialized.
    #[serde(skip)]
    pub context: Option<Value>,
}

impl Envelope {
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// Return the message id, generating a fresh one if none was set.
    pub fn ensure_message_id(&mut self) -> &str {
        self.message_id.get_or_insert_with(generate_id)
    }

    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers.get(name)
    }
}

/// Construction options for [`Envelope`]. Unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct EnvelopeOptions {
    pub body: Value,
    pub client_id: Option<String>,
    pub destination: Option<String>,
    pub headers: Map<String, Value>,
    pub message_id: Option<String>,
    pub timestamp: Option<i64>,
    pub time_to_live: Option<i64>,
    pub context: Option<Value>,
}

impl From<EnvelopeOptions> for Envelope {
    fn from(opts: EnvelopeOptions) -> Self {
        Self {
            body: opts.body,
            client_id: opts.client_id,
            destination: opts.destination,
            headers: opts.headers,
            message_id: opts.message_id,
            timestamp: opts.timestamp,
            time_to_live: opts.time_to_live,
            context: opts.context,
        }
    }
}
