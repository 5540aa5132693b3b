//! Flex messaging envelopes.
//!
//! This module hosts the message classes exchanged with Flex data services:
//! - `AbstractMessage`, `AsyncMessage`, `AcknowledgeMessage`,
//!   `CommandMessage`, `ErrorMessage`, `RemotingMessage` as [`MessageKind`]
//!   variants over a shared [`Envelope`].
//! - The acknowledgement protocol and command dispatch ([`Message::respond`]).
//! - Compact-form projections ([`SmallMessage`]).
//!
//! Byte-level framing belongs to the codec; this module only declares which
//! fields exist and how a message answers.

pub mod dispatch;
pub mod envelope;
pub mod headers;
pub mod message;
pub mod operations;
pub mod small;

pub use dispatch::{handler_for, CommandFn};
pub use envelope::{generate_id, Envelope, EnvelopeOptions};
pub use message::{
    AsyncFields, CommandFields, ErrorFields, Message, MessageKind, RemotingFields,
};
pub use operations::Operation;
pub use small::{SmallMessage, SmallParts};
