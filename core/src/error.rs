use thiserror::Error;

/// Error produced by [`Maybe`](crate::Maybe) operations and the [guard](crate::util::guard) functions.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Error {
  /// A required argument was absent or otherwise unusable.
  #[error("Invalid argument '{parameter}': {message}")]
  InvalidArgument {
    parameter: &'static str,
    message: String,
  },
  /// A value was demanded from an absent container.
  #[error("{message}")]
  InvalidOperation {
    message: String,
  },
}

impl Error {
  #[inline]
  pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
    Self::InvalidArgument { parameter, message: message.into() }
  }
  #[inline]
  pub fn invalid_operation(message: impl Into<String>) -> Self {
    Self::InvalidOperation { message: message.into() }
  }

  #[inline]
  pub fn is_invalid_argument(&self) -> bool { matches!(self, Self::InvalidArgument { .. }) }
  #[inline]
  pub fn is_invalid_operation(&self) -> bool { matches!(self, Self::InvalidOperation { .. }) }

  /// Name of the offending parameter, if this is an [invalid argument](Self::InvalidArgument) error.
  #[inline]
  pub fn parameter(&self) -> Option<&'static str> {
    match self {
      Self::InvalidArgument { parameter, .. } => Some(parameter),
      Self::InvalidOperation { .. } => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_argument_message_names_parameter() {
    let error = Error::invalid_argument("fallback", "must not be absent");
    assert!(error.is_invalid_argument());
    assert_eq!(error.parameter(), Some("fallback"));
    assert_eq!(error.to_string(), "Invalid argument 'fallback': must not be absent");
  }

  #[test]
  fn invalid_operation_message_is_verbatim() {
    let error = Error::invalid_operation("no user configured");
    assert!(error.is_invalid_operation());
    assert_eq!(error.parameter(), None);
    assert_eq!(error.to_string(), "no user configured");
  }
}
