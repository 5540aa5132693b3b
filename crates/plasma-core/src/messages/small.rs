//! Compact-form projections (`DSA`, `DSK`, `DSC`).
//!
//! A small message carries exactly the same fields as its full form under a
//! short alias; converting back is lossless.

use serde::{Deserialize, Serialize};

use super::envelope::Envelope;
use super::message::{AsyncFields, CommandFields, Message, MessageKind};
use crate::error::{PlasmaError, Result};
use crate::registry::{self, ClassDef};

/// Envelope plus class fields of a compact-form message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallParts<F> {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub fields: F,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_explicitType")]
pub enum SmallMessage {
    #[serde(rename = "DSA")]
    AsyncExt(SmallParts<AsyncFields>),
    #[serde(rename = "DSK")]
    AcknowledgeExt(SmallParts<AsyncFields>),
    #[serde(rename = "DSC")]
    CommandExt(SmallParts<CommandFields>),
}

impl SmallMessage {
    pub fn class_def(&self) -> &'static ClassDef {
        match self {
            SmallMessage::AsyncExt(_) => &registry::ASYNC_MESSAGE_EXT,
            SmallMessage::AcknowledgeExt(_) => &registry::ACKNOWLEDGE_MESSAGE_EXT,
            SmallMessage::CommandExt(_) => &registry::COMMAND_MESSAGE_EXT,
        }
    }

    pub fn alias(&self) -> &'static str {
        self.class_def().alias
    }

    /// Restore the full-form message.
    pub fn into_message(self) -> Message {
        match self {
            SmallMessage::AsyncExt(p) => Message {
                envelope: p.envelope,
                kind: MessageKind::Async(p.fields),
            },
            SmallMessage::AcknowledgeExt(p) => Message {
                envelope: p.envelope,
                kind: MessageKind::Acknowledge(p.fields),
            },
            SmallMessage::CommandExt(p) => Message {
                envelope: p.envelope,
                kind: MessageKind::Command(p.fields),
            },
        }
    }
}

impl From<SmallMessage> for Message {
    fn from(small: SmallMessage) -> Self {
        small.into_message()
    }
}

impl Message {
    /// Compact-form projection of this message.
    ///
    /// Available for async, acknowledge and command messages only; every
    /// other class fails with `CapabilityUnavailable`.
    pub fn small_message(&self) -> Result<SmallMessage> {
        let envelope = self.envelope.clone();
        match &self.kind {
            MessageKind::Async(f) => Ok(SmallMessage::AsyncExt(SmallParts {
                envelope,
                fields: f.clone(),
            })),
            MessageKind::Acknowledge(f) => Ok(SmallMessage::AcknowledgeExt(SmallParts {
                envelope,
                fields: f.clone(),
            })),
            MessageKind::Command(f) => Ok(SmallMessage::CommandExt(SmallParts {
                envelope,
                fields: f.clone(),
            })),
            other => Err(PlasmaError::CapabilityUnavailable(other.class_name())),
        }
    }
}
