//! Plasma core: Flex messaging envelopes, command dispatch and collection proxies.
//!
//! This crate declares the message classes exchanged between a Flex client
//! and a service endpoint, how a message acknowledges or responds, and the
//! `flex.messaging.io` proxies that carry collections across a codec. It
//! carries no transport, runtime or byte-level codec so any serde-driven
//! encoder can sit on top of it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `PlasmaError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod io;
pub mod messages;
pub mod registry;

/// Shared result type.
pub use error::{FaultCode, PlasmaError, Result};
