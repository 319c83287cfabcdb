use std::fmt::{self, Debug, Display, Formatter};
use std::panic::Location;

use tracing::warn;

use crate::error::{Absent, OptError};
use crate::guess::Guess;
use crate::iter::{IntoIter, Iter, IterMut};

/// Optional value: either `Some` value or `None`.
///
/// The discriminant and the payload are stored together, so a `None` never carries an observable payload, and every
/// mutation leaves the instance either fully `Some` or fully `None`.
///
/// Most combinators consume `self`. The few that mutate in place ([`map_in_place`](Self::map_in_place),
/// [`take`](Self::take), [`take_value`](Self::take_value), [`replace`](Self::replace), [`insert`](Self::insert))
/// take `&mut self`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Opt<T> {
  inner: Option<T>,
}


// Construction

impl<T> Opt<T> {
  /// Create `Some(value)`. Never inspects `value`: `Opt::from_some(f64::NAN)` is `Some`.
  #[inline]
  pub const fn from_some(value: T) -> Self {
    Self { inner: Some(value) }
  }
  /// Create `None`.
  #[inline]
  pub const fn from_none() -> Self {
    Self { inner: None }
  }

  #[inline]
  pub const fn some(value: T) -> Self { Self::from_some(value) }
  #[inline]
  pub const fn none() -> Self { Self::from_none() }
  #[inline]
  pub const fn new() -> Self { Self::from_none() }

  /// Create an option by guessing whether `value` is present. See [`Guess`] for the classification rules.
  #[inline]
  pub fn from_guess<G: Guess<Output=T>>(value: G) -> Self {
    value.guess()
  }
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self::from_none() }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(inner: Option<T>) -> Self { Self { inner } }
}
impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(opt: Opt<T>) -> Self { opt.inner }
}
impl<T> From<T> for Opt<T> {
  #[inline]
  fn from(value: T) -> Self { Self::from_some(value) }
}

impl<T: Debug> Debug for Opt<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      Some(value) => f.debug_tuple("Some").field(value).finish(),
      None => f.write_str("None"),
    }
  }
}


// Predicates and views

impl<T> Opt<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { self.inner.is_some() }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  #[inline]
  pub fn as_option(&self) -> Option<&T> { self.inner.as_ref() }
  #[inline]
  pub fn as_mut(&mut self) -> Option<&mut T> { self.inner.as_mut() }
  #[inline]
  pub fn as_ref(&self) -> Opt<&T> { Opt { inner: self.inner.as_ref() } }
  #[inline]
  pub fn into_option(self) -> Option<T> { self.inner }
}


// Extraction

impl<T> Opt<T> {
  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with [`OptError::UnwrapOnNone`] if `self` is `None`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.inner {
      Some(value) => value,
      None => panic!("{}", OptError::UnwrapOnNone),
    }
  }

  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with `message` if `self` is `None`. Use `message` to document the invariant that should have made this
  /// option `Some`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: impl Display) -> T {
    match self.inner {
      Some(value) => value,
      None => panic!("{}", OptError::expect_failure(message)),
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> Result<T, OptError> {
    self.inner.ok_or(OptError::UnwrapOnNone)
  }

  #[inline]
  pub fn try_expect(self, message: impl Display) -> Result<T, OptError> {
    self.inner.ok_or_else(|| OptError::expect_failure(message))
  }
}


// Transformation

impl<T> Opt<T> {
  /// Maps the contained value with `f`, producing a new option. `f` is not called when `self` is `None`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
    Opt { inner: self.inner.map(f) }
  }

  /// Replaces the contained value with `f(value)` in place, returning `self` for chaining. Does nothing when `self`
  /// is `None`.
  ///
  /// This is destructive: every later read of this instance observes the mapped value. Clone beforehand, or use
  /// [`map`](Self::map), to keep the original. If `f` panics, `self` is left `None`.
  #[inline]
  pub fn map_in_place(&mut self, f: impl FnOnce(T) -> T) -> &mut Self {
    if let Some(value) = self.inner.take() {
      self.inner = Some(f(value));
    }
    self
  }

  /// Returns `f(value)` when `Some`, without wrapping it again. Returns `None` when `None`, without calling `f`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
    match self.inner {
      Some(value) => f(value),
      None => Opt::from_none(),
    }
  }

  /// Returns `None` when `self` is `None`, otherwise `optb`.
  #[inline]
  pub fn and<U>(self, optb: Opt<U>) -> Opt<U> {
    if self.is_none() {
      return Opt::from_none();
    }
    optb
  }
}


// Fallback

impl<T> Opt<T> {
  /// Returns the contained value, or `optb` when `None`.
  ///
  /// Unlike [`and`](Self::and), this returns the unwrapped value rather than an option; see [`or_opt`](Self::or_opt)
  /// for the option-shaped form.
  #[inline]
  pub fn or(self, optb: T) -> T {
    match self.inner {
      Some(value) => value,
      None => optb,
    }
  }

  /// Returns the contained value, or `f()` when `None`. `f` is only called when `None`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> T) -> T {
    match self.inner {
      Some(value) => value,
      None => f(),
    }
  }

  #[inline]
  pub fn or_opt(self, optb: Opt<T>) -> Opt<T> {
    if self.is_some() {
      return self;
    }
    optb
  }

  #[inline]
  pub fn or_else_opt(self, f: impl FnOnce() -> Opt<T>) -> Opt<T> {
    if self.is_some() {
      return self;
    }
    f()
  }
}


// In-place mutation

impl<T> Opt<T> {
  /// Sets `self` to `None`, dropping any contained value, and returns `self`.
  ///
  /// The returned reference is therefore always `None`. Use [`take_value`](Self::take_value) to get the contained
  /// value out instead.
  #[inline]
  pub fn take(&mut self) -> &mut Self {
    self.inner = None;
    self
  }

  /// Moves the contained value out, leaving `None` in `self`.
  #[inline]
  pub fn take_value(&mut self) -> Opt<T> {
    Opt { inner: self.inner.take() }
  }

  /// Sets `self` to `Some(value)`, returning the previous option.
  #[inline]
  pub fn replace(&mut self, value: T) -> Opt<T> {
    Opt { inner: self.inner.replace(value) }
  }

  #[inline]
  pub fn insert(&mut self, value: T) -> &mut T {
    self.inner.insert(value)
  }
}


// Pattern matching and adapters

impl<T> Opt<T> {
  /// Calls `some` with the value when `Some`, or `none` when `None`. A missing handler for the current variant is
  /// skipped.
  ///
  /// When `none` is not given, a warning about the unhandled `None` case is logged, even if `self` is `Some`. The
  /// warning is a `tracing` event: it is only written somewhere if a subscriber is installed, for example through
  /// [`AppTracingBuilder`](crate::app::tracing::AppTracingBuilder). Nothing is written to stderr otherwise.
  ///
  /// A missing handler is passed as a typed `None`:
  ///
  /// ```
  /// use optio_core::Opt;
  ///
  /// let mut seen = 0;
  /// Opt::from_some(3).match_with(Some(|value: i32| seen = value), Some(|| {}));
  /// assert_eq!(seen, 3);
  ///
  /// Opt::<i32>::from_none().match_with(None::<fn(i32)>, Some(|| println!("none")));
  /// ```
  #[track_caller]
  pub fn match_with<S, N>(self, some: Option<S>, none: Option<N>) where
    S: FnOnce(T),
    N: FnOnce(),
  {
    let none_handled = none.is_some();
    match self.inner {
      Some(value) => if let Some(some) = some { some(value) },
      None => if let Some(none) = none { none() },
    }
    if !none_handled {
      let location = Location::caller();
      warn!(%location, "Unhandled None-case in Opt::match_with expression!");
    }
  }

  /// Returns `some(value)` when `Some`, or `none()` when `None`.
  #[inline]
  pub fn match_or<R>(self, some: impl FnOnce(T) -> R, none: impl FnOnce() -> R) -> R {
    match self.inner {
      Some(value) => some(value),
      None => none(),
    }
  }

  /// Calls `handler` once with an `(error, value)` pair: `(Some(Absent), None)` when `None`, and
  /// `(None, Some(value))` when `Some`.
  #[inline]
  pub fn node<R>(self, handler: impl FnOnce(Option<Absent>, Option<T>) -> R) -> R {
    match self.inner {
      Some(value) => handler(None, Some(value)),
      None => handler(Some(Absent), None),
    }
  }
}


// Iteration

impl<T> Opt<T> {
  /// Returns an iterator over the contained value, yielding at most one element.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.inner.as_ref()) }
  #[inline]
  pub fn iter_mut(&mut self) -> IterMut<'_, T> { IterMut::new(self.inner.as_mut()) }
}

impl<T> IntoIterator for Opt<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.inner) }
}
impl<'a, T> IntoIterator for &'a Opt<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
impl<'a, T> IntoIterator for &'a mut Opt<T> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

/// Collects the first element of an iterator, or `None` if it is empty.
impl<T> FromIterator<T> for Opt<T> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    iter.into_iter().next().into()
  }
}
