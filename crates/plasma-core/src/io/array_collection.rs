use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::value_kind;
use crate::error::{PlasmaError, Result};
use crate::registry::{ALIAS_KEY, ARRAY_COLLECTION};

/// Record key under which a wrapped collection carries its items.
pub const SOURCE_FIELD: &str = "source";

/// Ordered, index-addressable list (`flex.messaging.io.ArrayCollection`).
///
/// Positional operations check bounds against the live length on every
/// call. Encodes as a plain sequence; decodes from a sequence or from a
/// `{ "source": [...] }` record, optionally tagged with its own alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCollection<T = Value> {
    source: Vec<T>,
}

impl<T> ArrayCollection<T> {
    pub fn new() -> Self {
        Self { source: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Append `item`.
    pub fn add_item(&mut self, item: T) {
        self.source.push(item);
    }

    /// Insert `item` at `index`, `0 <= index <= len`.
    pub fn add_item_at(&mut self, item: T, index: usize) -> Result<()> {
        self.check_bound(index, self.len() + 1)?;
        self.source.insert(index, item);
        Ok(())
    }

    pub fn get_item_at(&self, index: usize) -> Result<&T> {
        self.check_bound(index, self.len())?;
        Ok(&self.source[index])
    }

    /// Remove and return the item at `index`.
    pub fn remove_item_at(&mut self, index: usize) -> Result<T> {
        self.check_bound(index, self.len())?;
        Ok(self.source.remove(index))
    }

    /// Empty the collection in place.
    pub fn remove_all(&mut self) {
        self.source.clear();
    }

    /// Replace the item at `index`, returning the previous one.
    pub fn set_item_at(&mut self, item: T, index: usize) -> Result<T> {
        self.check_bound(index, self.len())?;
        Ok(std::mem::replace(&mut self.source[index], item))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.source.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.source
    }

    pub fn into_vec(self) -> Vec<T> {
        self.source
    }

    fn check_bound(&self, index: usize, upper: usize) -> Result<()> {
        if index < upper {
            Ok(())
        } else {
            Err(PlasmaError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

impl<T: PartialEq> ArrayCollection<T> {
    /// Position of the first item equal to `item`; `None` when absent.
    pub fn get_item_index(&self, item: &T) -> Option<usize> {
        self.source.iter().position(|x| x == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.source.contains(item)
    }
}

impl<T> Default for ArrayCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayCollection<T> {
    fn from(source: Vec<T>) -> Self {
        Self { source }
    }
}

impl<T: Clone> From<&[T]> for ArrayCollection<T> {
    fn from(items: &[T]) -> Self {
        Self {
            source: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for ArrayCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            source: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.source.extend(iter);
    }
}

impl<T> IntoIterator for ArrayCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.source.iter()
    }
}

/// Keyed records and ordered collections are not interchangeable: building
/// a collection from an object fails with `TypeMismatch`.
impl TryFrom<Value> for ArrayCollection {
    type Error = PlasmaError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self::from(items)),
            other => Err(PlasmaError::TypeMismatch(format!(
                "ArrayCollection requires an ordered sequence, got {}",
                value_kind(&other)
            ))),
        }
    }
}

impl<T: Serialize> Serialize for ArrayCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}

struct CollectionVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for CollectionVisitor<T> {
    type Value = ArrayCollection<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence or a record holding a single `source` sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut source = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(item) = seq.next_element()? {
            source.push(item);
        }
        Ok(ArrayCollection { source })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut source: Option<Vec<T>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                SOURCE_FIELD => {
                    if source.is_some() {
                        return Err(de::Error::duplicate_field(SOURCE_FIELD));
                    }
                    source = Some(map.next_value()?);
                }
                ALIAS_KEY => {
                    let alias: String = map.next_value()?;
                    if alias != ARRAY_COLLECTION.alias {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Str(&alias),
                            &ARRAY_COLLECTION.alias,
                        ));
                    }
                }
                _ => return Err(de::Error::unknown_field(&key, &[SOURCE_FIELD, ALIAS_KEY])),
            }
        }
        let source = source.ok_or_else(|| de::Error::missing_field(SOURCE_FIELD))?;
        Ok(ArrayCollection { source })
    }
}
