//! Built-in remoting services.

pub mod echo;

pub use echo::EchoService;
