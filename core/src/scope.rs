use std::fmt::{self, Debug, Formatter};

use hashlink::LinkedHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::opt::Opt;

/// Name that [`Scope::register_globals`] binds to [`Opt::from_some`].
pub const SOME: &str = "Some";
/// Name that [`Scope::register_globals`] binds to [`Opt::from_none`].
pub const NONE: &str = "None";

/// Constructor bound to a name in a [`Scope`].
pub enum Constructor<T> {
  Some(fn(T) -> Opt<T>),
  None(fn() -> Opt<T>),
}
impl<T> Clone for Constructor<T> {
  #[inline]
  fn clone(&self) -> Self { *self }
}
impl<T> Copy for Constructor<T> {}
impl<T> Debug for Constructor<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Constructor::Some(_) => f.write_str("Constructor::Some"),
      Constructor::None(_) => f.write_str("Constructor::None"),
    }
  }
}

/// A name binding: a constructor plus free-form properties attached to it by the caller.
#[derive(Debug)]
pub struct Binding<T> {
  constructor: Constructor<T>,
  properties: LinkedHashMap<String, String>,
}
impl<T> Binding<T> {
  #[inline]
  fn new(constructor: Constructor<T>) -> Self {
    Self { constructor, properties: LinkedHashMap::new() }
  }

  #[inline]
  pub fn constructor(&self) -> Constructor<T> { self.constructor }

  #[inline]
  pub fn property(&self, key: &str) -> Option<&str> {
    self.properties.get(key).map(String::as_str)
  }
  /// Sets property `key` to `value`, returning the previous value.
  #[inline]
  pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.properties.insert(key.into(), value.into())
  }
  #[inline]
  pub fn properties(&self) -> impl Iterator<Item=(&str, &str)> {
    self.properties.iter().map(|(key, value)| (key.as_str(), value.as_str()))
  }
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ScopeError {
  #[error("`{0}` is not bound in this scope; call `register_globals` first")]
  Unbound(&'static str),
}

/// Namespace that binds the `Some` and `None` names to option constructors.
///
/// A scope is held and passed around by the caller; there is no process-wide state. Registration happens at most
/// once per scope, so later [`register_globals`](Self::register_globals) calls keep existing bindings, including
/// their properties.
#[derive(Debug)]
pub struct Scope<T> {
  registered: bool,
  bindings: LinkedHashMap<&'static str, Binding<T>>,
}
impl<T> Default for Scope<T> {
  #[inline]
  fn default() -> Self {
    Self { registered: false, bindings: LinkedHashMap::new() }
  }
}
impl<T> Scope<T> {
  #[inline]
  pub fn new() -> Self { Self::default() }

  /// Binds [`SOME`] to [`Opt::from_some`] and [`NONE`] to [`Opt::from_none`]. Does nothing if this scope is already
  /// registered.
  pub fn register_globals(&mut self) -> &mut Self {
    if self.registered {
      trace!("globals already registered; skipping");
      return self;
    }
    self.bindings.insert(SOME, Binding::new(Constructor::Some(Opt::from_some)));
    self.bindings.insert(NONE, Binding::new(Constructor::None(Opt::from_none)));
    self.registered = true;
    debug!(names = ?[SOME, NONE], "registered globals");
    self
  }

  #[inline]
  pub fn is_registered(&self) -> bool { self.registered }

  #[inline]
  pub fn binding(&self, name: &str) -> Option<&Binding<T>> {
    self.bindings.get(name)
  }
  #[inline]
  pub fn binding_mut(&mut self, name: &str) -> Option<&mut Binding<T>> {
    self.bindings.get_mut(name)
  }
  #[inline]
  pub fn names(&self) -> impl Iterator<Item=&'static str> + '_ {
    self.bindings.keys().copied()
  }


  /// Creates `Some(value)` through the [`SOME`] binding.
  pub fn some(&self, value: T) -> Result<Opt<T>, ScopeError> {
    match self.binding(SOME).map(Binding::constructor) {
      Some(Constructor::Some(from_some)) => Ok(from_some(value)),
      _ => Err(ScopeError::Unbound(SOME)),
    }
  }
  /// Creates `None` through the [`NONE`] binding.
  pub fn none(&self) -> Result<Opt<T>, ScopeError> {
    match self.binding(NONE).map(Binding::constructor) {
      Some(Constructor::None(from_none)) => Ok(from_none()),
      _ => Err(ScopeError::Unbound(NONE)),
    }
  }
}
