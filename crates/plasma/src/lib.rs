//! Top-level facade crate for Plasma.
//!
//! Re-exports the message core and the service layer so users can depend on a single crate.

pub mod core {
    pub use plasma_core::*;
}

pub mod service {
    pub use plasma_service::*;
}
