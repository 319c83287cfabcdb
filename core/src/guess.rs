use crate::opt::Opt;

/// Classify a raw value as present or absent.
///
/// Implementations follow these rules, in order:
///
/// 1. absent input (`Option::None`, JSON `null`) is `None`;
/// 2. input whose textual representation is `NaN` (`f32::NAN`, `f64::NAN`, the string `"NaN"`, and sequences whose
///    single element renders as `NaN`, see [`RendersAsNan`]) is `None`;
/// 3. an empty sequence (`Vec`, slice, array, JSON `[]`) is `None`;
/// 4. anything else is `Some`.
///
/// These are heuristics, not a notion of "falsy": `0`, `false`, and `""` are all `Some`.
pub trait Guess {
  type Output;

  fn guess(self) -> Opt<Self::Output>;
}

macro_rules! always_some_guess_impl {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Guess for $ty {
        type Output = $ty;
        #[inline]
        fn guess(self) -> Opt<Self::Output> { Opt::from_some(self) }
      }
    )*
  };
}

always_some_guess_impl!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Whether a value renders as the text `NaN`.
///
/// Sequences render as their elements joined by commas, so a sequence with a single element that renders as `NaN`
/// does too; `None` renders as the empty string.
pub trait RendersAsNan {
  fn renders_as_nan(&self) -> bool;
}

macro_rules! never_nan_impl {
  ($($ty:ty),* $(,)?) => {
    $(
      impl RendersAsNan for $ty {
        #[inline]
        fn renders_as_nan(&self) -> bool { false }
      }
    )*
  };
}

never_nan_impl!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

const NAN_TEXT: &str = "NaN";

impl RendersAsNan for f32 {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.is_nan() }
}
impl RendersAsNan for f64 {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.is_nan() }
}
impl RendersAsNan for str {
  #[inline]
  fn renders_as_nan(&self) -> bool { self == NAN_TEXT }
}
impl RendersAsNan for String {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.as_str().renders_as_nan() }
}
impl<T: RendersAsNan> RendersAsNan for [T] {
  #[inline]
  fn renders_as_nan(&self) -> bool { matches!(self, [item] if item.renders_as_nan()) }
}
impl<T: RendersAsNan> RendersAsNan for Vec<T> {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.as_slice().renders_as_nan() }
}
impl<T: RendersAsNan, const N: usize> RendersAsNan for [T; N] {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.as_slice().renders_as_nan() }
}
impl<T: RendersAsNan> RendersAsNan for Option<T> {
  #[inline]
  fn renders_as_nan(&self) -> bool { self.as_ref().is_some_and(RendersAsNan::renders_as_nan) }
}
impl<T: RendersAsNan + ?Sized> RendersAsNan for &T {
  #[inline]
  fn renders_as_nan(&self) -> bool { (**self).renders_as_nan() }
}

macro_rules! unless_nan_guess_impl {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Guess for $ty {
        type Output = $ty;
        #[inline]
        fn guess(self) -> Opt<Self::Output> {
          if self.renders_as_nan() { Opt::from_none() } else { Opt::from_some(self) }
        }
      }
    )*
  };
}

unless_nan_guess_impl!(f32, f64, String);

impl<'a> Guess for &'a str {
  type Output = &'a str;
  #[inline]
  fn guess(self) -> Opt<Self::Output> {
    if self.renders_as_nan() { Opt::from_none() } else { Opt::from_some(self) }
  }
}

impl<T: RendersAsNan> Guess for Vec<T> {
  type Output = Vec<T>;
  #[inline]
  fn guess(self) -> Opt<Self::Output> {
    if self.is_empty() || self.renders_as_nan() { Opt::from_none() } else { Opt::from_some(self) }
  }
}
impl<'a, T: RendersAsNan> Guess for &'a [T] {
  type Output = &'a [T];
  #[inline]
  fn guess(self) -> Opt<Self::Output> {
    if self.is_empty() || self.renders_as_nan() { Opt::from_none() } else { Opt::from_some(self) }
  }
}
impl<T: RendersAsNan, const N: usize> Guess for [T; N] {
  type Output = [T; N];
  #[inline]
  fn guess(self) -> Opt<Self::Output> {
    if N == 0 || self.renders_as_nan() { Opt::from_none() } else { Opt::from_some(self) }
  }
}

/// `None` is absent; `Some(value)` is classified by guessing on `value`.
impl<G: Guess> Guess for Option<G> {
  type Output = G::Output;
  #[inline]
  fn guess(self) -> Opt<Self::Output> {
    match self {
      Some(value) => value.guess(),
      None => Opt::from_none(),
    }
  }
}

#[cfg(feature = "guess_json")]
mod json {
  use serde_json::Value;

  use crate::opt::Opt;

  use super::{Guess, RendersAsNan};

  impl RendersAsNan for Value {
    fn renders_as_nan(&self) -> bool {
      match self {
        Value::String(string) => string.renders_as_nan(),
        Value::Array(items) => items.renders_as_nan(),
        _ => false,
      }
    }
  }

  impl Guess for Value {
    type Output = Value;

    fn guess(self) -> Opt<Self::Output> {
      let absent = match &self {
        Value::Null => true,
        Value::Array(items) if items.is_empty() => true,
        value => value.renders_as_nan(),
      };
      if absent { Opt::from_none() } else { Opt::from_some(self) }
    }
  }

  #[cfg(test)]
  mod tests {
    use serde_json::{json, Value};

    use crate::Opt;

    #[test]
    fn null_and_empty_array_are_none() {
      assert!(Opt::from_guess(Value::Null).is_none());
      assert!(Opt::from_guess(json!([])).is_none());
    }

    #[test]
    fn nan_text_is_none() {
      assert!(Opt::from_guess(json!("NaN")).is_none());
      assert!(Opt::from_guess(json!(["NaN"])).is_none());
      assert!(Opt::from_guess(json!([["NaN"]])).is_none());
      // Non-finite floats serialize to null.
      assert!(Opt::from_guess(json!(f64::NAN)).is_none());
    }

    #[test]
    fn other_values_are_some() {
      for value in [json!(0), json!(""), json!(false), json!([1]), json!([1, 2, 3, ""]), json!({}), json!(["NaN", 1])] {
        assert_eq!(Opt::from_guess(value.clone()), Opt::from_some(value));
      }
    }
  }
}
