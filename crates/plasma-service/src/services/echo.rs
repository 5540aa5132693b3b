use async_trait::async_trait;
use serde_json::Value;

use plasma_core::error::Result;

use crate::dispatch::RemotingService;

/// Returns its arguments unchanged, whatever the operation. Useful to prove
/// remoting routing end to end.
pub struct EchoService {
    destination: String,
}

impl EchoService {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

#[async_trait]
impl RemotingService for EchoService {
    fn destination(&self) -> &str {
        &self.destination
    }

    async fn invoke(&self, _operation: &str, args: Value) -> Result<Value> {
        Ok(args)
    }
}
