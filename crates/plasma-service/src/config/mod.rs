//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use plasma_core::error::{PlasmaError, Result};
use tracing::debug;

pub use schema::{DestinationConfig, EndpointSection, ServiceConfig};

/// Read and validate the YAML config at `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        PlasmaError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    let cfg = load_from_str(&s)?;
    debug!(
        path = %path.display(),
        endpoint = %cfg.endpoint.id,
        destinations = cfg.destinations.len(),
        "config loaded"
    );
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| PlasmaError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
