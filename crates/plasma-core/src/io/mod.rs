//! Collection proxies (`flex.messaging.io`).
//!
//! Adapter types that cross the codec boundary under their Flex aliases while
//! staying usable as native containers.

pub mod array_collection;
pub mod object_proxy;

pub use array_collection::ArrayCollection;
pub use object_proxy::ObjectProxy;

use serde_json::Value;

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a keyed record",
    }
}
