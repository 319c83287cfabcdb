use thiserror::Error;

/// Error for extracting the value out of a `None`.
///
/// [`Opt::unwrap`](crate::Opt::unwrap) and [`Opt::expect`](crate::Opt::expect) panic with the [`Display`] text of
/// this error, [`Opt::try_unwrap`](crate::Opt::try_unwrap) and [`Opt::try_expect`](crate::Opt::try_expect) return
/// it.
///
/// [`Display`]: std::fmt::Display
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptError {
  #[error("Cannot unwrap `None`!")]
  UnwrapOnNone,
  #[error("{0}")]
  ExpectFailure(String),
}

impl OptError {
  #[inline]
  pub fn expect_failure(message: impl std::fmt::Display) -> Self {
    Self::ExpectFailure(message.to_string())
  }
}

/// Error sentinel handed to [`Opt::node`](crate::Opt::node) handlers when there is no value.
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Error)]
#[error("value is `None`")]
pub struct Absent;
