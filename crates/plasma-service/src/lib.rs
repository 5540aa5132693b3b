//! Plasma service library entry.
//!
//! This crate is the caller side of the message core: it routes inbound
//! envelopes to registered command handlers and remoting services, and turns
//! failures into correlated `ErrorMessage` replies. Transport and codec stay
//! outside; callers hand in decoded messages and encode what comes back.

pub mod config;
pub mod dispatch;
pub mod fault;
pub mod services;
