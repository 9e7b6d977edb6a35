//! Optional value container ([`Maybe`]) with monadic combinators, operations over sequences of optional values, and
//! the argument validation and diagnostic helpers they build on.

pub mod error;
pub mod maybe;
pub mod sequence;
pub mod util;

pub use error::{Error, Result};
pub use maybe::{IntoMaybe, Maybe};
pub use sequence::{MaybeSequenceExt, PlainSequenceExt, ValuesThatExist};
