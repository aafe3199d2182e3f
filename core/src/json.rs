//! Encode and decode [`Optional`] values to and from JSON.
//!
//! These are the hooks a caller uses when an optional value is the whole document rather than a
//! field of a larger structure. Nested values go through the [`serde`] impls directly.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use tracing::{debug, trace};

use crate::Optional;

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
  #[error("Failed to encode optional value as JSON: {0}")]
  Encode(#[source] serde_json::Error),
  #[error("Failed to decode optional value from JSON: {0}")]
  Decode(#[source] serde_json::Error),
}
impl JsonError {
  #[inline]
  pub fn inner(&self) -> &serde_json::Error {
    match self {
      Self::Encode(cause) => cause,
      Self::Decode(cause) => cause,
    }
  }

  /// Whether the input was syntactically invalid, ended early, was well-formed JSON of the wrong
  /// shape for the value type, or failed on I/O.
  #[inline]
  pub fn category(&self) -> Category {
    self.inner().classify()
  }
}

/// Encodes `optional` into JSON bytes: the encoding of the value if `Some`, `null` if `None`.
pub fn encode<T: Serialize>(optional: &Optional<T>) -> Result<Vec<u8>, JsonError> {
  let bytes = serde_json::to_vec(optional).map_err(encode_error)?;
  trace!(has = optional.has(), len = bytes.len(), "encoded optional value");
  Ok(bytes)
}

/// Decodes an optional from JSON bytes: `null` becomes `None`, anything else must decode as `T`.
///
/// A malformed value for `T` is an error, it is never turned into `None`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<Optional<T>, JsonError> {
  let optional: Optional<T> = serde_json::from_slice(bytes).map_err(decode_error)?;
  trace!(has = optional.has(), len = bytes.len(), "decoded optional value");
  Ok(optional)
}

fn encode_error(cause: serde_json::Error) -> JsonError {
  debug!(%cause, "failed to encode optional value");
  JsonError::Encode(cause)
}

fn decode_error(cause: serde_json::Error) -> JsonError {
  debug!(%cause, category = ?cause.classify(), "failed to decode optional value");
  JsonError::Decode(cause)
}

impl<T: Serialize> Optional<T> {
  #[inline]
  pub fn to_json_string(&self) -> Result<String, JsonError> {
    let json = serde_json::to_string(self).map_err(encode_error)?;
    trace!(has = self.has(), len = json.len(), "encoded optional value");
    Ok(json)
  }
}

impl<T: DeserializeOwned> Optional<T> {
  #[inline]
  pub fn from_json_str(json: &str) -> Result<Self, JsonError> {
    decode(json.as_bytes())
  }
}


#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;
  use std::error::Error;

  use serde::{Deserialize, Serialize};
  use serde_json::error::Category;

  use super::*;

  fn init_tracing() {
    let _ = tracing_subscriber::fmt()
      .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
  }

  #[test]
  fn encodes_some_as_value() {
    init_tracing();
    assert_eq!(encode(&Optional::some(1)).unwrap(), b"1");
    assert_eq!(Optional::some("text").to_json_string().unwrap(), r#""text""#);
  }

  #[test]
  fn encodes_none_as_null() {
    init_tracing();
    assert_eq!(encode(&Optional::<i32>::none()).unwrap(), b"null");
    assert_eq!(Optional::<String>::none().to_json_string().unwrap(), "null");
  }

  #[test]
  fn decodes_null_as_none() {
    init_tracing();
    let optional: Optional<i32> = decode(b"null").unwrap();
    assert!(!optional.has());
  }

  #[test]
  fn decodes_value_as_some() {
    init_tracing();
    let optional = Optional::<Vec<u8>>::from_json_str("[1, 2, 3]").unwrap();
    assert_eq!(optional.value(), vec![1, 2, 3]);
  }

  #[test]
  fn round_trips() {
    init_tracing();
    let some = Optional::some(String::from("round trip"));
    assert_eq!(decode::<String>(&encode(&some).unwrap()).unwrap(), some);
    let none = Optional::<String>::none();
    assert_eq!(decode::<String>(&encode(&none).unwrap()).unwrap(), none);
  }

  #[test]
  fn wrong_type_is_a_data_error() {
    init_tracing();
    let error = Optional::<i32>::from_json_str(r#""not-a-number""#).unwrap_err();
    assert!(matches!(error, JsonError::Decode(_)));
    assert_eq!(error.category(), Category::Data);
    assert!(error.source().is_some());
    assert!(error.to_string().starts_with("Failed to decode optional value from JSON"));
  }

  #[test]
  fn malformed_json_is_a_syntax_error() {
    init_tracing();
    let error = decode::<i32>(b"nope").unwrap_err();
    assert_eq!(error.category(), Category::Syntax);
    let error = decode::<i32>(b"").unwrap_err();
    assert_eq!(error.category(), Category::Eof);
  }

  #[test]
  fn failed_decode_leaves_slot_untouched() {
    init_tracing();
    let mut slot = Optional::some(5);
    if let Ok(decoded) = Optional::<i32>::from_json_str("{") {
      slot = decoded;
    }
    assert_eq!(slot, Optional::some(5));
  }

  #[test]
  fn encode_error_is_reported() {
    init_tracing();
    // JSON object keys must be strings.
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], 1);
    let error = encode(&Optional::some(map)).unwrap_err();
    assert!(matches!(error, JsonError::Encode(_)));
  }

  #[derive(PartialEq, Debug, Serialize, Deserialize)]
  struct Profile {
    name: String,
    nickname: Optional<String>,
    age: Optional<u8>,
  }

  #[test]
  fn fields_in_documents() {
    init_tracing();
    let profile = Profile { name: "Ferris".into(), nickname: Optional::none(), age: Optional::some(8) };
    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"Ferris","nickname":null,"age":8}"#);

    let decoded: Profile = serde_json::from_str(r#"{"name":"Ferris","age":8}"#).unwrap();
    assert_eq!(decoded, profile);

    let error = serde_json::from_str::<Profile>(r#"{"name":"Ferris","age":-1}"#).unwrap_err();
    assert_eq!(error.classify(), Category::Data);
  }
}
