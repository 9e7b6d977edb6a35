//! Operations over sequences of [`Maybe`] values.
//!
//! The free functions accept `Option<I>` where `None` stands for a missing sequence, and treat it like an empty one
//! (except [`all_exist_or_none`], which is absent for a missing sequence). The extension traits expose the same
//! operations as methods on sequences that are known to exist.

use std::iter::FusedIterator;

use crate::Maybe;

/// Lazily yields the payloads of the present elements of a sequence of [`Maybe`], in order.
///
/// Holds no buffered results: restarting requires restarting (or [cloning](Clone)) the inner iterator.
#[derive(Clone, Debug)]
pub struct ValuesThatExist<I> {
  inner: Option<I>,
}
impl<I> ValuesThatExist<I> {
  /// Creates an adapter over `inner`, which behaves as an empty sequence when `None`.
  #[inline]
  pub fn new(inner: Option<I>) -> Self {
    Self { inner }
  }
}

impl<I: Iterator<Item=Maybe<T>>, T> Iterator for ValuesThatExist<I> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<T> {
    self.inner.as_mut()?.find_map(Maybe::into_option)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let upper = self.inner.as_ref().map_or(Some(0), |i| i.size_hint().1);
    (0, upper)
  }
}

impl<I: DoubleEndedIterator<Item=Maybe<T>>, T> DoubleEndedIterator for ValuesThatExist<I> {
  #[inline]
  fn next_back(&mut self) -> Option<T> {
    let inner = self.inner.as_mut()?;
    while let Some(maybe) = inner.next_back() {
      if let Maybe::Present(value) = maybe {
        return Some(value);
      }
    }
    None
  }
}

impl<I: FusedIterator<Item=Maybe<T>>, T> FusedIterator for ValuesThatExist<I> {}


/// Returns a lazy iterator over the payloads of the present elements of `sequence`.
#[inline]
pub fn values_that_exist<I, T>(sequence: Option<I>) -> ValuesThatExist<I::IntoIter> where
  I: IntoIterator<Item=Maybe<T>>
{
  ValuesThatExist::new(sequence.map(IntoIterator::into_iter))
}

/// Returns the payload of the first present element of `sequence`, consuming no further elements.
#[inline]
pub fn first_that_exists<I, T>(sequence: Option<I>) -> Maybe<T> where
  I: IntoIterator<Item=Maybe<T>>
{
  values_that_exist(sequence).next().into()
}

/// Returns the payload of the first present element of `sequence` for which `predicate` holds.
#[inline]
pub fn first_where<I, T>(sequence: Option<I>, predicate: impl FnMut(&T) -> bool) -> Maybe<T> where
  I: IntoIterator<Item=Maybe<T>>
{
  values_that_exist(sequence).find(predicate).into()
}

/// Returns the first element of a sequence of plain values, or absent if the sequence is missing or empty.
///
/// For sequences of nullable elements, [`bind`](Maybe::bind) the result with
/// [`IntoMaybe::into_maybe`](crate::IntoMaybe::into_maybe) so that a null first element is absent as well.
#[inline]
pub fn first_of_plain_sequence<I: IntoIterator>(sequence: Option<I>) -> Maybe<I::Item> {
  sequence.and_then(|sequence| sequence.into_iter().next()).into()
}

/// Returns a reference to the first element of `slice`, or absent if the slice is missing or empty.
#[inline]
pub fn first_of_slice<T>(slice: Option<&[T]>) -> Maybe<&T> {
  slice.and_then(|slice| slice.first()).into()
}

/// Returns all payloads of `sequence` if every element is present, otherwise absent. Stops consuming `sequence` at the
/// first absent element. A missing sequence is absent, an empty sequence is present and empty.
#[inline]
pub fn all_exist_or_none<I, T>(sequence: Option<I>) -> Maybe<Vec<T>> where
  I: IntoIterator<Item=Maybe<T>>
{
  let Some(sequence) = sequence else { return Maybe::none() };
  sequence.into_iter()
    .map(Maybe::into_option)
    .collect::<Option<Vec<T>>>()
    .into()
}


/// Methods over sequences of [`Maybe`].
pub trait MaybeSequenceExt<T>: IntoIterator<Item=Maybe<T>> + Sized {
  #[inline]
  fn values_that_exist(self) -> ValuesThatExist<Self::IntoIter> {
    crate::sequence::values_that_exist(Some(self))
  }

  #[inline]
  fn first_that_exists(self) -> Maybe<T> {
    crate::sequence::first_that_exists(Some(self))
  }

  #[inline]
  fn first_where(self, predicate: impl FnMut(&T) -> bool) -> Maybe<T> {
    crate::sequence::first_where(Some(self), predicate)
  }

  #[inline]
  fn all_exist_or_none(self) -> Maybe<Vec<T>> {
    crate::sequence::all_exist_or_none(Some(self))
  }
}

impl<I: IntoIterator<Item=Maybe<T>>, T> MaybeSequenceExt<T> for I {}

/// Methods over sequences of plain values.
pub trait PlainSequenceExt: IntoIterator + Sized {
  #[inline]
  fn first_maybe(self) -> Maybe<Self::Item> {
    first_of_plain_sequence(Some(self))
  }
}

impl<I: IntoIterator> PlainSequenceExt for I {}
