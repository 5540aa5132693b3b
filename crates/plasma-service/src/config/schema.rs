use std::collections::HashSet;

use serde::Deserialize;
use plasma_core::error::{PlasmaError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub endpoint: EndpointSection,

    #[serde(default)]
    pub destinations: Vec<DestinationConfig>,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PlasmaError::UnsupportedVersion);
        }
        if self.destinations.is_empty() {
            return Err(PlasmaError::Config("destinations must not be empty".into()));
        }

        self.endpoint.validate()?;

        let mut seen = HashSet::new();
        for dest in &self.destinations {
            if dest.id.trim().is_empty() {
                return Err(PlasmaError::Config("destination id must not be empty".into()));
            }
            if !seen.insert(dest.id.as_str()) {
                return Err(PlasmaError::Config(format!(
                    "duplicate destination id: {}",
                    dest.id
                )));
            }
        }

        Ok(())
    }

    pub fn destination(&self, id: &str) -> Option<&DestinationConfig> {
        self.destinations.iter().find(|d| d.id == id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointSection {
    /// Stamped into the `DSEndpoint` header of outbound replies.
    #[serde(default = "default_endpoint_id")]
    pub id: String,

    /// Put the debug rendering of a failure into `ErrorMessage.faultDetail`.
    #[serde(default)]
    pub expose_fault_detail: bool,

    /// `timeToLive` for replies that carry none. 0 leaves it unset.
    #[serde(default)]
    pub default_time_to_live_ms: i64,
}

impl Default for EndpointSection {
    fn default() -> Self {
        Self {
            id: default_endpoint_id(),
            expose_fault_detail: false,
            default_time_to_live_ms: 0,
        }
    }
}

impl EndpointSection {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PlasmaError::Config("endpoint.id must not be empty".into()));
        }
        if self.default_time_to_live_ms < 0 {
            return Err(PlasmaError::Config(
                "endpoint.default_time_to_live_ms must not be negative".into(),
            ));
        }
        Ok(())
    }
}

fn default_endpoint_id() -> String {
    "my-amf".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DestinationConfig {
    pub id: String,
    /// Expected `RemotingMessage.source`, if the destination pins one.
    #[serde(default)]
    pub source: Option<String>,
}
