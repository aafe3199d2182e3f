//! Transparent serialization: `Some(value)` serializes exactly like `value`, `None` as null.
//!
//! Deserialization goes through [`Deserializer::deserialize_option`], so null becomes `None`, and a
//! field that is missing from an enclosing struct also becomes `None` without needing
//! `#[serde(default)]`. Errors from the inner type are propagated as is.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
  #[inline]
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self.as_option() {
      Some(value) => serializer.serialize_some(value),
      None => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
  #[inline]
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Self::from)
  }
}
