//! An explicit optional value: [`Optional<T>`] is either `Some` or `None`, replacing nullable
//! references with a contract the compiler checks.
//!
//! With the `serde` feature, an `Optional` serializes transparently: `Some(value)` exactly like
//! `value`, `None` as null. With the `json` feature (enabled by default), [`json`] provides
//! encode/decode hooks for whole JSON documents.
//!
//! ```
//! use optional::Optional;
//!
//! let present = Optional::some(1);
//! let absent = Optional::<i32>::none();
//! assert!(present.has());
//! assert_eq!(present.value(), 1);
//! assert_eq!(absent.or(2), 2);
//! assert_eq!(absent.or_lazy(|| 3), 3);
//! ```

pub mod optional;

#[cfg(feature = "serde")]
mod serde_impls;
#[cfg(feature = "json")]
pub mod json;

pub use optional::Optional;
