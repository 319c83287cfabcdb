//! Iterators over the value of an [`Opt`](crate::Opt), yielding at most one element.

use std::iter::FusedIterator;

/// Iterator over a reference to the contained value. Created by [`Opt::iter`](crate::Opt::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a T>) -> Self { Self { inner } }
}
impl<'a, T> Clone for Iter<'a, T> {
  #[inline]
  fn clone(&self) -> Self { Self { inner: self.inner } }
}

/// Iterator over a mutable reference to the contained value. Created by [`Opt::iter_mut`](crate::Opt::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
  inner: Option<&'a mut T>,
}
impl<'a, T> IterMut<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a mut T>) -> Self { Self { inner } }
}

/// Iterator over the contained value, moved out of the option.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Option<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(inner: Option<T>) -> Self { Self { inner } }
}

macro_rules! single_item_iterator_impl {
  ($iter_ty:ty, $item_ty:ty $(, $lt:lifetime)?) => {
    impl<$($lt,)? T> Iterator for $iter_ty {
      type Item = $item_ty;

      #[inline]
      fn next(&mut self) -> Option<Self::Item> { self.inner.take() }
      #[inline]
      fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
      }
    }
    impl<$($lt,)? T> DoubleEndedIterator for $iter_ty {
      #[inline]
      fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
    }
    impl<$($lt,)? T> ExactSizeIterator for $iter_ty {}
    impl<$($lt,)? T> FusedIterator for $iter_ty {}
  };
}

single_item_iterator_impl!(Iter<'a, T>, &'a T, 'a);
single_item_iterator_impl!(IterMut<'a, T>, &'a mut T, 'a);
single_item_iterator_impl!(IntoIter<T>, T);

#[cfg(test)]
mod tests {
  use crate::Opt;

  #[test]
  fn some_yields_once_then_fuses() {
    let opt = Opt::from_some(7);
    let mut iter = opt.iter();
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
  }

  #[test]
  fn none_yields_nothing() {
    let opt = Opt::<u8>::from_none();
    assert_eq!(opt.iter().size_hint(), (0, Some(0)));
    assert_eq!(opt.iter().next(), None);
    assert_eq!(opt.into_iter().next(), None);
  }

  #[test]
  fn restartable_by_calling_iter_again() {
    let opt = Opt::from_some("once");
    assert_eq!(opt.iter().count(), 1);
    assert_eq!(opt.iter().count(), 1);
  }

  #[test]
  fn cloned_iterator_is_independent() {
    let opt = Opt::from_some(1);
    let mut iter = opt.iter();
    let clone = iter.clone();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(clone.rev().next(), Some(&1));
  }

  #[test]
  fn chains_with_other_iterators() {
    let values: Vec<u8> = Opt::from_some(1).into_iter()
      .chain(Opt::from_none())
      .chain(Opt::from_some(3))
      .collect();
    assert_eq!(values, vec![1, 3]);
  }
}
