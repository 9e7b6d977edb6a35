//! Argument validation that either passes the value through or fails with
//! [`Error::InvalidArgument`] naming the parameter.

use crate::error::{Error, Result};
use crate::util::type_name::short_type_name;
use crate::Maybe;

/// Returns the value inside `value`, or fails if it is `None`.
#[inline]
pub fn ensure_not_null<T>(value: Option<T>, parameter: &'static str) -> Result<T> {
  match value {
    Some(value) => Ok(value),
    None => Err(reject::<T>(parameter, "must not be null")),
  }
}

/// Returns the payload of `value`, or fails if it is absent.
#[inline]
pub fn ensure_present<T>(value: Maybe<T>, parameter: &'static str) -> Result<T> {
  match value {
    Maybe::Present(value) => Ok(value),
    Maybe::Absent => Err(reject::<T>(parameter, "must not be absent")),
  }
}

/// Returns `value`, or fails if it contains no elements.
#[inline]
pub fn ensure_not_empty<S: AsRef<[E]>, E>(value: S, parameter: &'static str) -> Result<S> {
  if value.as_ref().is_empty() {
    Err(reject::<S>(parameter, "must not be empty"))
  } else {
    Ok(value)
  }
}

/// Returns `value`, or fails if it is the empty string.
#[inline]
pub fn ensure_not_empty_str<S: AsRef<str>>(value: S, parameter: &'static str) -> Result<S> {
  if value.as_ref().is_empty() {
    Err(reject::<S>(parameter, "must not be empty"))
  } else {
    Ok(value)
  }
}

/// Returns `value`, or fails if it is empty or consists only of whitespace.
#[inline]
pub fn ensure_not_blank<S: AsRef<str>>(value: S, parameter: &'static str) -> Result<S> {
  if value.as_ref().trim().is_empty() {
    Err(reject::<S>(parameter, "must not be empty or whitespace"))
  } else {
    Ok(value)
  }
}

pub(crate) fn reject<T: ?Sized>(parameter: &'static str, reason: &str) -> Error {
  let type_name = short_type_name::<T>();
  #[cfg(feature = "tracing")]
  tracing::trace!(parameter, type_name = %type_name, reason, "rejected argument");
  Error::invalid_argument(parameter, format!("{} {}", type_name, reason))
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_null_passes_value_through() {
    assert_eq!(ensure_not_null(Some("x"), "value"), Ok("x"));
  }

  #[test]
  fn null_names_parameter_and_type() {
    let error = ensure_not_null::<String>(None, "name").unwrap_err();
    assert_eq!(error, Error::invalid_argument("name", "String must not be null"));
  }

  #[test]
  fn present_passes_payload_through() {
    assert_eq!(ensure_present(Maybe::some(3), "count"), Ok(3));
    let error = ensure_present(Maybe::<u8>::none(), "count").unwrap_err();
    assert_eq!(error.parameter(), Some("count"));
  }

  #[test]
  fn empty_collections_are_rejected() {
    assert_eq!(ensure_not_empty(vec![1, 2], "items"), Ok(vec![1, 2]));
    let error = ensure_not_empty(Vec::<u8>::new(), "items").unwrap_err();
    assert_eq!(error, Error::invalid_argument("items", "Vec<u8> must not be empty"));
    assert!(ensure_not_empty(&[0u8; 0][..], "items").is_err());
  }

  #[test]
  fn empty_and_blank_strings_are_rejected() {
    assert_eq!(ensure_not_empty_str("a", "label"), Ok("a"));
    assert!(ensure_not_empty_str("", "label").is_err());
    assert_eq!(ensure_not_empty_str(" ", "label"), Ok(" "));

    assert_eq!(ensure_not_blank(String::from(" a "), "label"), Ok(String::from(" a ")));
    let error = ensure_not_blank(" \t", "label").unwrap_err();
    assert_eq!(error, Error::invalid_argument("label", "&str must not be empty or whitespace"));
  }

  #[cfg(feature = "tracing")]
  mod tracing_events {
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;

    #[derive(Clone, Default)]
    struct RecordParameters(Arc<Mutex<Vec<String>>>);
    impl<S: Subscriber> Layer<S> for RecordParameters {
      fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = ParameterVisitor::default();
        event.record(&mut visitor);
        if let Some(parameter) = visitor.0 {
          self.0.lock().unwrap().push(parameter);
        }
      }
    }

    #[derive(Default)]
    struct ParameterVisitor(Option<String>);
    impl Visit for ParameterVisitor {
      fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "parameter" {
          self.0 = Some(value.to_string());
        }
      }
      fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    #[test]
    fn rejection_emits_one_event_and_still_fails() {
      let recorder = RecordParameters::default();
      let subscriber = tracing_subscriber::registry().with(recorder.clone());
      let result = tracing::subscriber::with_default(subscriber, || ensure_not_null::<u8>(None, "x"));

      assert_eq!(result, Err(Error::invalid_argument("x", "u8 must not be null")));
      assert_eq!(*recorder.0.lock().unwrap(), vec!["x".to_string()]);
    }

    #[test]
    fn accepted_argument_emits_nothing() {
      let recorder = RecordParameters::default();
      let subscriber = tracing_subscriber::registry().with(recorder.clone());
      let result = tracing::subscriber::with_default(subscriber, || ensure_not_null(Some(1u8), "x"));

      assert_eq!(result, Ok(1));
      assert!(recorder.0.lock().unwrap().is_empty());
    }
  }
}
