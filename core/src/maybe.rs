//! Optional value container with monadic combinators.
//!
//! A [`Maybe<T>`] holds zero or one `T`. Containers are compared, hashed, and displayed by their payload, and every
//! combinator consumes the receiver and returns a new container instead of mutating in place.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::util::guard;

/// Hash written for an absent container.
pub const ABSENT_HASH: u64 = 0;

/// A value of type `T` that may or may not be present.
///
/// The [default](Default) container is [absent](Maybe::Absent).
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub enum Maybe<T> {
  Absent,
  Present(T),
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}


// Construction

impl<T> Maybe<T> {
  /// Creates a present container holding `value`.
  #[inline]
  pub const fn some(value: T) -> Self { Self::Present(value) }
  /// Creates an absent container.
  #[inline]
  pub const fn none() -> Self { Self::Absent }

  /// Creates a container from a possibly-null `value`: absent if `value` is `None`, present otherwise. This is the
  /// canonical conversion from a nullable source; [`From<Option<T>>`] does the same.
  #[inline]
  pub fn from_option(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  /// Creates a present container from `value`, failing with [`Error::InvalidArgument`] if `value` is `None`. Use this
  /// where absence is a programming error rather than an expected case.
  #[inline]
  pub fn with_guaranteed_value(value: Option<T>) -> Result<Self> {
    guard::ensure_not_null(value, "value").map(Self::Present)
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_option(value) }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self { maybe.into_option() }
}

/// Conversion into a [`Maybe`] that never double-wraps: converting a `Maybe<T>` returns it unchanged.
pub trait IntoMaybe<T> {
  fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Maybe<T> {
  #[inline]
  fn into_maybe(self) -> Maybe<T> { self }
}

impl<T> IntoMaybe<T> for Option<T> {
  #[inline]
  fn into_maybe(self) -> Maybe<T> { Maybe::from_option(self) }
}


// Inspection

impl<T> Maybe<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Self::Absent) }

  #[inline]
  pub const fn value(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Maybe<&mut T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  #[inline]
  pub fn iter(&self) -> std::option::IntoIter<&T> {
    self.value().into_iter()
  }

  /// Returns whether a value is present, along with the value, or `T::default()` if absent.
  #[inline]
  pub fn try_get_value(self) -> (bool, T) where
    T: Default
  {
    match self {
      Self::Present(value) => (true, value),
      Self::Absent => (false, T::default()),
    }
  }
}


// Combinators

impl<T> Maybe<T> {
  /// Calls `on_some` with the payload if present, otherwise calls `on_none`, wrapping the result in a present
  /// container.
  #[inline]
  pub fn match_value<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> Maybe<R> {
    match self {
      Self::Present(value) => Maybe::Present(on_some(value)),
      Self::Absent => Maybe::Present(on_none()),
    }
  }

  /// Calls `on_some` with the payload if present, otherwise calls `on_none`.
  #[inline]
  pub fn match_action(self, on_some: impl FnOnce(T), on_none: impl FnOnce()) {
    match self {
      Self::Present(value) => on_some(value),
      Self::Absent => on_none(),
    }
  }

  /// Calls `action` with a reference to the payload if present.
  #[inline]
  pub fn if_exists(&self, action: impl FnOnce(&T)) {
    if let Self::Present(value) = self {
      action(value);
    }
  }

  #[inline]
  pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Maybe<R> {
    match self {
      Self::Present(value) => Maybe::Present(f(value)),
      Self::Absent => Maybe::Absent,
    }
  }
  /// Alias of [`map`](Self::map).
  #[inline]
  pub fn select<R>(self, f: impl FnOnce(T) -> R) -> Maybe<R> { self.map(f) }
  /// Alias of [`map`](Self::map).
  #[inline]
  pub fn apply_value<R>(self, f: impl FnOnce(T) -> R) -> Maybe<R> { self.map(f) }

  /// Returns `f(payload)` if present without re-wrapping it, otherwise absent.
  #[inline]
  pub fn bind<R>(self, f: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Maybe::Absent,
    }
  }
  /// Alias of [`bind`](Self::bind).
  #[inline]
  pub fn apply<R>(self, f: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> { self.bind(f) }

  /// Binds `convert` and combines the payload with its result. Absent if either the receiver or the intermediate
  /// result is absent; neither function is called when the receiver is absent.
  #[inline]
  pub fn select_many<U, R>(self, convert: impl FnOnce(&T) -> Maybe<U>, combine: impl FnOnce(T, U) -> R) -> Maybe<R> {
    let Self::Present(value) = self else { return Maybe::Absent };
    match convert(&value) {
      Maybe::Present(intermediate) => Maybe::Present(combine(value, intermediate)),
      Maybe::Absent => Maybe::Absent,
    }
  }

  /// Returns the receiver if it is present and `predicate` holds for its payload, otherwise absent. `predicate` is not
  /// called when the receiver is absent. This is `where` in query terms.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) => if predicate(&value) { Self::Present(value) } else { Self::Absent },
      Self::Absent => Self::Absent,
    }
  }

  #[inline]
  pub fn or(self, alternative: Maybe<T>) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => alternative,
    }
  }
  #[inline]
  pub fn or_else(self, alternative: impl FnOnce() -> Maybe<T>) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => alternative(),
    }
  }
}

impl<T> Maybe<Maybe<T>> {
  #[inline]
  pub fn flatten(self) -> Maybe<T> { self.bind(|inner| inner) }
}


// Value extraction

impl<T> Maybe<T> {
  #[inline]
  pub fn get_value_or(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }

  #[inline]
  pub fn get_value_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default(),
    }
  }

  #[inline]
  pub fn get_value_or_default(self) -> T where
    T: Default
  {
    self.get_value_or_else(T::default)
  }

  /// Returns the payload if present, otherwise the result of `default`. Fails with [`Error::InvalidArgument`] if
  /// `default` is called and returns `None`; `default` is not called when the receiver is present.
  #[inline]
  pub fn get_value_or_else_checked(self, default: impl FnOnce() -> Option<T>) -> Result<T> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => guard::ensure_not_null(default(), "default"),
    }
  }

  /// Returns the receiver if present, otherwise `alternative`. Fails with [`Error::InvalidArgument`] if `alternative`
  /// is absent, regardless of whether the receiver is present.
  #[inline]
  pub fn get_value_or_maybe(self, alternative: Maybe<T>) -> Result<Self> {
    if alternative.is_none() {
      return Err(guard::reject::<Self>("alternative", "must not be absent"));
    }
    Ok(self.or(alternative))
  }

  /// Returns the receiver if present, otherwise the result of `alternative`. Fails with [`Error::InvalidArgument`] if
  /// `alternative` is called and returns an absent container.
  #[inline]
  pub fn get_value_or_maybe_else(self, alternative: impl FnOnce() -> Maybe<T>) -> Result<Self> {
    match self {
      Self::Present(_) => Ok(self),
      Self::Absent => match alternative() {
        Self::Absent => Err(guard::reject::<Self>("alternative", "must not return an absent value")),
        present => Ok(present),
      },
    }
  }

  /// Returns the payload if present, otherwise fails with [`Error::InvalidOperation`] carrying `message`.
  #[inline]
  pub fn get_value_or_throw(self, message: impl Into<String>) -> Result<T> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(Error::invalid_operation(message)),
    }
  }
}

impl Maybe<String> {
  #[inline]
  pub fn get_value_or_empty(self) -> String { self.get_value_or_default() }
}

impl<T> Maybe<Vec<T>> {
  #[inline]
  pub fn get_value_or_empty(self) -> Vec<T> { self.get_value_or_else(Vec::new) }
}

impl<T> Maybe<Box<[T]>> {
  #[inline]
  pub fn get_value_or_empty(self) -> Box<[T]> { self.get_value_or_else(|| Box::new([])) }
}


// Standard traits

impl<T: Hash> Hash for Maybe<T> {
  /// Present containers hash exactly like their payload; absent containers write [`ABSENT_HASH`].
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    match self {
      Self::Present(value) => value.hash(state),
      Self::Absent => state.write_u64(ABSENT_HASH),
    }
  }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
  /// Present containers display their payload; absent containers display nothing. Use
  /// [`to_string_or_default`](Maybe::to_string_or_default) to render the string form of `T::default()` instead.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => value.fmt(f),
      Self::Absent => Ok(()),
    }
  }
}

impl<T: fmt::Display + Default> Maybe<T> {
  /// Returns the payload's string form if present, otherwise the string form of `T::default()`.
  pub fn to_string_or_default(&self) -> String {
    match self {
      Self::Present(value) => value.to_string(),
      Self::Absent => T::default().to_string(),
    }
  }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.value().serialize(serializer)
  }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Self::from_option)
  }
}
