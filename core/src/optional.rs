use std::fmt::{self, Debug, Formatter};

/// A value that is either `Some` (has a value) or `None` (no value).
///
/// Unlike a nullable pointer, the value can only be reached through [`value`](Self::value) (which
/// panics on `None`) or through the fallback accessors [`or`](Self::or) and
/// [`or_lazy`](Self::or_lazy), making absence explicit at every use site.
///
/// Under the hood this is an [`Option<T>`], so the niche optimization applies: `Optional<&T>`,
/// `Optional<Box<T>>`, and `Optional<NonNull<T>>` are exactly the size of a pointer. For a `T` without
/// a niche (such as `i32`), the size is that of `T` plus a discriminant, never an extra allocation.
///
/// An `Optional` is immutable once constructed; replace it wholesale to change its state.
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Optional<T> {
  value: Option<T>,
}

impl<T> Optional<T> {
  /// Creates an optional that represents the `Some` variant, taking ownership of `value`.
  #[inline]
  pub const fn some(value: T) -> Self {
    Self { value: Some(value) }
  }

  /// Creates an optional that represents the `None` variant.
  #[inline]
  pub const fn none() -> Self {
    Self { value: None }
  }


  /// Returns `true` if this optional is `Some`.
  #[inline]
  pub const fn has(&self) -> bool {
    self.value.is_some()
  }

  /// Takes the value out of this optional.
  ///
  /// # Panics
  ///
  /// Panics if this optional is `None`. Calling this on `None` is a programming error: check
  /// [`has`](Self::has) first, or use [`or`](Self::or)/[`or_lazy`](Self::or_lazy).
  #[inline]
  #[track_caller]
  pub fn value(self) -> T {
    match self.value {
      Some(value) => value,
      None => value_on_none(),
    }
  }

  /// Borrows the value in this optional.
  ///
  /// # Panics
  ///
  /// Panics if this optional is `None`, like [`value`](Self::value).
  #[inline]
  #[track_caller]
  pub fn value_ref(&self) -> &T {
    match &self.value {
      Some(value) => value,
      None => value_on_none(),
    }
  }

  /// Gets the value if `Some`, or `fallback` if `None`.
  ///
  /// `fallback` is evaluated eagerly: it is constructed by the caller before this is called, even
  /// when this optional is `Some` and the fallback is thrown away. Use [`or_lazy`](Self::or_lazy)
  /// when the fallback is expensive to construct or has side effects.
  #[inline]
  pub fn or(self, fallback: T) -> T {
    match self.value {
      Some(value) => value,
      None => fallback,
    }
  }

  /// Gets the value if `Some`, or calls `fallback` if `None`.
  ///
  /// `fallback` is called at most once, and only when this optional is `None`.
  #[inline]
  pub fn or_lazy(self, fallback: impl FnOnce() -> T) -> T {
    match self.value {
      Some(value) => value,
      None => fallback(),
    }
  }


  #[inline]
  pub const fn as_option(&self) -> Option<&T> {
    self.value.as_ref()
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    self.value
  }
}

#[cold]
#[track_caller]
fn value_on_none() -> ! {
  panic!("called `Optional::value()` on a `None` value")
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self {
    Self::none()
  }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    Self { value }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    optional.value
  }
}

impl<T> From<T> for Optional<T> {
  #[inline]
  fn from(value: T) -> Self {
    Self::some(value)
  }
}

impl<T: Debug> Debug for Optional<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.value {
      Some(value) => f.debug_tuple("Some").field(value).finish(),
      None => f.write_str("None"),
    }
  }
}
