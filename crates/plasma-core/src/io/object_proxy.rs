use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::value_kind;
use crate::error::{PlasmaError, Result};
use crate::registry::{ALIAS_KEY, OBJECT_PROXY};

/// Transparent proxy over a keyed record (`flex.messaging.io.ObjectProxy`).
///
/// The wrapped record may be absent, which is distinct from an empty record:
/// `null` and `{}` both encode and decode to themselves. A record tagged
/// with the proxy's own alias loses the tag on decode; any other tag is
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObjectProxy {
    object: Option<Map<String, Value>>,
}

impl ObjectProxy {
    pub fn new(object: Map<String, Value>) -> Self {
        Self {
            object: Some(object),
        }
    }

    /// Proxy whose wrapped record is absent.
    pub fn null() -> Self {
        Self { object: None }
    }

    pub fn is_null(&self) -> bool {
        self.object.is_none()
    }

    pub fn object(&self) -> Option<&Map<String, Value>> {
        self.object.as_ref()
    }

    pub fn set_object(&mut self, object: Option<Map<String, Value>>) {
        self.object = object;
    }

    pub fn into_inner(self) -> Option<Map<String, Value>> {
        self.object
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.as_ref().and_then(|o| o.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.object.as_mut().and_then(|o| o.get_mut(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.object.as_ref().is_some_and(|o| o.contains_key(key))
    }

    /// Set a field on the wrapped record, returning the previous value.
    ///
    /// Fails with `TypeMismatch` when the wrapped record is absent.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        let object = self.object.as_mut().ok_or_else(|| {
            PlasmaError::TypeMismatch("cannot set a field on a null ObjectProxy".into())
        })?;
        Ok(object.insert(key.into(), value))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.object.as_mut().and_then(|o| o.remove(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.object.iter().flat_map(|o| o.keys())
    }
}

impl Default for ObjectProxy {
    fn default() -> Self {
        Self::new(Map::new())
    }
}

impl From<Map<String, Value>> for ObjectProxy {
    fn from(object: Map<String, Value>) -> Self {
        Self::new(object)
    }
}

impl TryFrom<Value> for ObjectProxy {
    type Error = PlasmaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self::new(untag(object)?)),
            Value::Null => Ok(Self::null()),
            other => Err(PlasmaError::TypeMismatch(format!(
                "ObjectProxy requires a keyed record, got {}",
                value_kind(&other)
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for ObjectProxy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<Map<String, Value>>::deserialize(deserializer)? {
            Some(object) => untag(object).map(Self::new).map_err(de::Error::custom),
            None => Ok(Self::null()),
        }
    }
}

fn untag(mut object: Map<String, Value>) -> Result<Map<String, Value>> {
    let tagged = match object.get(ALIAS_KEY) {
        None => false,
        Some(Value::String(alias)) if alias == OBJECT_PROXY.alias => true,
        Some(other) => {
            return Err(PlasmaError::TypeMismatch(format!(
                "ObjectProxy record tagged as {other}"
            )))
        }
    };
    if tagged {
        object.retain(|key, _| key != ALIAS_KEY);
    }
    Ok(object)
}
