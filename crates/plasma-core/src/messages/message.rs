//! The message family: a shared [`Envelope`] plus a [`MessageKind`] holding
//! the class-specific fields.
//!
//! On the wire a message is one flat record of its static attributes,
//! tagged with the class alias under `_explicitType`:
//!
//! ```text
//! { "_explicitType": "flex.messaging.messages.CommandMessage",
//!   "body": null, "clientId": null, ..., "correlationId": null, "operation": 5 }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::envelope::{Envelope, EnvelopeOptions};
use super::operations::Operation;
use crate::registry::{self, ClassDef};

/// `correlationId` carried by every asynchronous message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsyncFields {
    /// `messageId` of the message this one answers.
    pub correlation_id: Option<String>,
}

/// Publish/subscribe, ping and cluster commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandFields {
    pub correlation_id: Option<String>,
    /// Raw operation code as decoded. It may be any number, including ones
    /// outside the registry or of float type; see [`CommandFields::operation`].
    #[serde(rename = "operation")]
    pub operation_code: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_ref_type: Option<String>,
}

impl CommandFields {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation_code: operation.code().into(),
            ..Self::default()
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        Operation::from_number(&self.operation_code)
    }
}

impl Default for CommandFields {
    fn default() -> Self {
        Self {
            correlation_id: None,
            operation_code: Operation::UNKNOWN.into(),
            message_ref_type: None,
        }
    }
}

/// Error reported back to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorFields {
    pub correlation_id: Option<String>,
    /// Custom data the destination attached for client-side processing.
    pub extended_data: Map<String, Value>,
    pub fault_code: Option<String>,
    /// Detailed description of what caused the error.
    pub fault_detail: Option<String>,
    /// Simple description of the error.
    pub fault_string: Option<String>,
    /// Underlying cause (for example a traceback), when one exists.
    pub root_cause: Map<String, Value>,
}

impl ErrorFields {
    /// Fault code used when a message may not have been delivered.
    pub const DELIVERY_IN_DOUBT: &'static str = "Client.Error.DeliveryInDoubt";
}

/// One-shot RPC call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemotingFields {
    /// Remote method name.
    pub operation: Option<String>,
    /// Remote service name, including package.
    pub source: Option<String>,
}

/// Class of a message and its class-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_explicitType")]
pub enum MessageKind {
    #[serde(rename = "flex.messaging.messages.AbstractMessage")]
    Abstract,
    #[serde(rename = "flex.messaging.messages.AsyncMessage")]
    Async(AsyncFields),
    /// Successful receipt, no further payload.
    #[serde(rename = "flex.messaging.messages.AcknowledgeMessage")]
    Acknowledge(AsyncFields),
    #[serde(rename = "flex.messaging.messages.CommandMessage")]
    Command(CommandFields),
    /// An acknowledgement reporting a failure.
    #[serde(rename = "flex.messaging.messages.ErrorMessage")]
    Error(ErrorFields),
    #[serde(rename = "flex.messaging.messages.RemotingMessage")]
    Remoting(RemotingFields),
}

impl MessageKind {
    /// Unqualified class name, e.g. `CommandMessage`.
    pub fn class_name(&self) -> &'static str {
        match self {
            MessageKind::Abstract => "AbstractMessage",
            MessageKind::Async(_) => "AsyncMessage",
            MessageKind::Acknowledge(_) => "AcknowledgeMessage",
            MessageKind::Command(_) => "CommandMessage",
            MessageKind::Error(_) => "ErrorMessage",
            MessageKind::Remoting(_) => "RemotingMessage",
        }
    }

    /// Registry entry (alias and static attributes) for this class.
    pub fn class_def(&self) -> &'static ClassDef {
        match self {
            MessageKind::Abstract => &registry::ABSTRACT_MESSAGE,
            MessageKind::Async(_) => &registry::ASYNC_MESSAGE,
            MessageKind::Acknowledge(_) => &registry::ACKNOWLEDGE_MESSAGE,
            MessageKind::Command(_) => &registry::COMMAND_MESSAGE,
            MessageKind::Error(_) => &registry::ERROR_MESSAGE,
            MessageKind::Remoting(_) => &registry::REMOTING_MESSAGE,
        }
    }

    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            MessageKind::Async(f) | MessageKind::Acknowledge(f) => f.correlation_id.as_deref(),
            MessageKind::Command(f) => f.correlation_id.as_deref(),
            MessageKind::Error(f) => f.correlation_id.as_deref(),
            MessageKind::Abstract | MessageKind::Remoting(_) => None,
        }
    }

    /// Mutable `correlationId` slot; `None` for classes without one.
    pub(crate) fn correlation_slot(&mut self) -> Option<&mut Option<String>> {
        match self {
            MessageKind::Async(f) | MessageKind::Acknowledge(f) => Some(&mut f.correlation_id),
            MessageKind::Command(f) => Some(&mut f.correlation_id),
            MessageKind::Error(f) => Some(&mut f.correlation_id),
            MessageKind::Abstract | MessageKind::Remoting(_) => None,
        }
    }
}

/// A complete message: shared envelope fields plus the class variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl Message {
    /// Message with every envelope field defaulted.
    pub fn new(kind: MessageKind) -> Self {
        Self {
            envelope: Envelope::default(),
            kind,
        }
    }

    pub fn with_options(options: EnvelopeOptions, kind: MessageKind) -> Self {
        Self {
            envelope: options.into(),
            kind,
        }
    }

    pub fn async_message() -> Self {
        Self::new(MessageKind::Async(AsyncFields::default()))
    }

    pub fn acknowledge_message() -> Self {
        Self::new(MessageKind::Acknowledge(AsyncFields::default()))
    }

    pub fn command(operation: Operation) -> Self {
        Self::new(MessageKind::Command(CommandFields::new(operation)))
    }

    pub fn error_message(fields: ErrorFields) -> Self {
        Self::new(MessageKind::Error(fields))
    }

    pub fn remoting(source: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(MessageKind::Remoting(RemotingFields {
            operation: Some(operation.into()),
            source: Some(source.into()),
        }))
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Wire alias, e.g. `flex.messaging.messages.AcknowledgeMessage`.
    pub fn alias(&self) -> &'static str {
        self.kind.class_def().alias
    }

    /// Ordered serializable attribute names. `context` is never among them.
    pub fn static_attrs(&self) -> &'static [&'static str] {
        self.kind.class_def().static_attrs
    }

    pub fn message_id(&self) -> Option<&str> {
        self.envelope.message_id()
    }

    pub fn ensure_message_id(&mut self) -> &str {
        self.envelope.ensure_message_id()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.kind.correlation_id()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.envelope.client_id.as_deref()
    }

    pub fn headers(&self) -> &Map<String, Value> {
        &self.envelope.headers
    }

    pub fn body(&self) -> &Value {
        &self.envelope.body
    }
}
