//! Conversion of dispatch failures into wire-level `ErrorMessage` replies.

use serde_json::{json, Map};
use tracing::error;

use plasma_core::error::PlasmaError;
use plasma_core::messages::{ErrorFields, Message};

/// Build an `ErrorMessage` correlated to `original` describing `err`.
///
/// `faultDetail` carries the debug rendering of the error only when
/// `expose_detail` is set.
pub fn error_reply(original: &Message, err: &PlasmaError, expose_detail: bool) -> Message {
    let mut extended_data = Map::new();
    if let PlasmaError::OperationNotImplemented(op) = err {
        extended_data.insert("operation".into(), json!(op.code()));
    }

    let mut reply = Message::error_message(ErrorFields {
        extended_data,
        fault_code: Some(err.fault_code().as_str().into()),
        fault_detail: expose_detail.then(|| format!("{err:?}")),
        fault_string: Some(err.to_string()),
        ..Default::default()
    });

    if let Err(e) = reply.acknowledge(original) {
        error!(error = %e, "error reply left uncorrelated");
    }
    reply
}
