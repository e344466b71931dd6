use super::PairedSequence;
use crate::Pair;
use std::iter::{FusedIterator, Zip};
use std::slice;

/// Iterator over the pairs of a
/// [`PairedSequence`](struct.PairedSequence.html).
///
/// Pairs are yielded as [`Pair`] of references into the container,
/// in the order they were appended.
pub struct Iter<'a, First, Second> {
    inner: Zip<slice::Iter<'a, First>, slice::Iter<'a, Second>>,
}

impl<'a, First, Second> Iter<'a, First, Second> {
    pub(super) fn new(c: &'a PairedSequence<First, Second>) -> Self {
        Iter {
            inner: c.firsts.iter().zip(c.seconds.iter()),
        }
    }
}

impl<'a, First, Second> Iterator for Iter<'a, First, Second> {
    type Item = Pair<&'a First, &'a Second>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, First, Second> DoubleEndedIterator for Iter<'a, First, Second> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Pair::from)
    }
}

impl<'a, First, Second> ExactSizeIterator for Iter<'a, First, Second> {}

impl<'a, First, Second> FusedIterator for Iter<'a, First, Second> {}

impl<'a, First, Second> IntoIterator for &'a PairedSequence<First, Second> {
    type Item = Pair<&'a First, &'a Second>;
    type IntoIter = Iter<'a, First, Second>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
