//! Acknowledgement protocol and command dispatch.
//!
//! Neither operation mutates the message it reads: `acknowledge` writes only
//! to the reply, `respond` allocates fresh replies.

use serde_json::Value;
use tracing::trace;

use super::envelope::generate_id;
use super::headers::FLEX_CLIENT_ID;
use super::message::{Message, MessageKind};
use super::operations::Operation;
use crate::error::{PlasmaError, Result};

/// Handler bound to a command operation.
pub type CommandFn = fn(&Message) -> Result<Vec<Message>>;

/// Handler bound to `operation`, if this core implements one.
///
/// Only `ping` carries logic here. Every other registered operation is an
/// extension point and resolves to `None`.
pub fn handler_for(operation: Operation) -> Option<CommandFn> {
    match operation {
        Operation::Ping => Some(ping),
        _ => None,
    }
}

/// Connectivity check: a single acknowledgement correlated to `cmd`.
fn ping(cmd: &Message) -> Result<Vec<Message>> {
    let mut ack = Message::acknowledge_message();
    ack.acknowledge(cmd)?;
    Ok(vec![ack])
}

impl Message {
    /// Correlate this reply to `original`.
    ///
    /// Sets `correlationId` to the original `messageId`, copies the `DSId`
    /// header (null when absent) and takes over the original `clientId`,
    /// generating a new one if the original had none.
    ///
    /// Abstract and remoting messages have no `correlationId` field. Rather
    /// than growing one on the fly, the call fails with `InvalidOperation`
    /// on them and leaves the message untouched.
    pub fn acknowledge(&mut self, original: &Message) -> Result<()> {
        let class = self.class_name();
        let slot = self.kind.correlation_slot().ok_or_else(|| {
            PlasmaError::InvalidOperation(format!("{class} cannot acknowledge a message"))
        })?;
        *slot = original.message_id().map(str::to_owned);

        let flex_client_id = original
            .headers()
            .get(FLEX_CLIENT_ID)
            .cloned()
            .unwrap_or(Value::Null);
        self.envelope
            .headers
            .insert(FLEX_CLIENT_ID.to_owned(), flex_client_id);

        self.envelope.client_id = Some(
            original
                .envelope
                .client_id
                .clone()
                .unwrap_or_else(generate_id),
        );
        Ok(())
    }

    /// Produce the replies owed for this message.
    ///
    /// Only command messages respond. The operation code must resolve in the
    /// registry (`InvalidOperation` otherwise) and have a handler bound
    /// (`OperationNotImplemented` otherwise).
    pub fn respond(&self) -> Result<Vec<Message>> {
        let cmd = match &self.kind {
            MessageKind::Command(cmd) => cmd,
            other => {
                return Err(PlasmaError::InvalidOperation(format!(
                    "cannot respond to {}",
                    other.class_name()
                )))
            }
        };

        let operation = cmd.operation().ok_or_else(|| {
            PlasmaError::InvalidOperation(format!(
                "invalid command operation: '{}'",
                cmd.operation_code
            ))
        })?;
        let handler =
            handler_for(operation).ok_or(PlasmaError::OperationNotImplemented(operation))?;

        trace!(%operation, message_id = ?self.message_id(), "command respond");
        handler(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn only_ping_is_bound() {
        for op in Operation::ALL {
            assert_eq!(handler_for(op).is_some(), op == Operation::Ping, "{op}");
        }
    }

    #[test]
    fn acknowledge_overwrites_existing_dsid() {
        let mut original = Message::command(Operation::Ping);
        original.ensure_message_id();

        let mut reply = Message::acknowledge_message();
        reply
            .envelope
            .headers
            .insert(FLEX_CLIENT_ID.into(), Value::String("stale".into()));
        reply.acknowledge(&original).unwrap();

        assert_eq!(reply.headers().get(FLEX_CLIENT_ID), Some(&Value::Null));
    }
}
