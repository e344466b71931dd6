use crate::{Pair, PairError};
use std::fmt;
use std::vec::Vec;

/// In-memory ordered container of `(First, Second)` pairs.
///
/// [`PairedSequence`] is built on top of two [`std::vec::Vec`], one for
/// the first part of each pair and one for the second part. Position `i`
/// in both vectors forms the pair `i`. Storing each part contiguously
/// avoids the padding a `Vec<(First, Second)>` would carry when the two
/// parts have different alignments.
///
/// Both vectors always have the same length: the only way to grow the
/// container is [`append()`](struct.PairedSequence.html#method.append),
/// which pushes onto both, and there is no way to remove elements.
///
/// * Append complexity is amortized `$O(1)$`.
/// * Positional read complexity is `$O(1)$`.
/// * Length and capacity queries are `$O(1)$`.
///
/// The container puts no bound on `First` and `Second`.
/// Reading a pair by value with
/// [`get()`](struct.PairedSequence.html#method.get) requires both parts to
/// be [`Clone`], while [`iter()`](struct.PairedSequence.html#method.iter)
/// borrows them.
///
/// ## Examples
///
/// ```
/// use pairseq::{PairedSequence, PairError};
///
/// let mut c = PairedSequence::<i32, String>::new();
/// c.append((1, String::from("foo")));
/// c.append((2, String::from("bar")));
///
/// assert_eq!(c.len(), 2);
/// assert_eq!(c.get(0).unwrap(), (1, String::from("foo")));
/// assert_eq!(c.get(1).unwrap(), (2, String::from("bar")));
/// assert_eq!(
///     c.get(2).unwrap_err(),
///     PairError::IndexOutOfRange { index: 2, len: 2 }
/// );
/// ```
///
/// [`PairedSequence`] can also be built from a
/// [configuration](config/configs/struct.PairedSequenceConfig.html) when the
/// `config` feature is enabled.
pub struct PairedSequence<First, Second> {
    pub(super) firsts: Vec<First>,
    pub(super) seconds: Vec<Second>,
}

impl<First, Second> PairedSequence<First, Second> {
    /// Create an empty container.
    pub fn new() -> Self {
        PairedSequence {
            firsts: Vec::new(),
            seconds: Vec::new(),
        }
    }

    /// Create an empty container with room for at least `n` pairs before
    /// reallocating.
    pub fn with_capacity(n: usize) -> Self {
        PairedSequence {
            firsts: Vec::with_capacity(n),
            seconds: Vec::with_capacity(n),
        }
    }

    /// Number of pairs the container can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.firsts.capacity().min(self.seconds.capacity())
    }

    /// Number of pairs in the container.
    pub fn len(&self) -> usize {
        self.firsts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firsts.is_empty()
    }

    /// Add `pair` at the end of the container.
    ///
    /// The first part of the pair is pushed before the second part.
    /// The length of the container grows by exactly one.
    ///
    /// ```
    /// use pairseq::{Pair, PairedSequence};
    ///
    /// let mut c = PairedSequence::<&str, u8>::new();
    /// c.append(("first", 1u8));
    /// c.append(Pair::new("second", 2u8));
    /// assert_eq!(c.len(), 2);
    /// ```
    pub fn append<P: Into<Pair<First, Second>>>(&mut self, pair: P) {
        let (first, second) = pair.into().into_inner();
        self.firsts.push(first);
        self.seconds.push(second);
    }

    /// Iterate over borrowed pairs, from position `0` to `len() - 1`.
    ///
    /// ```
    /// use pairseq::PairedSequence;
    ///
    /// let mut c = PairedSequence::<i32, char>::new();
    /// c.append((1, 'a'));
    /// c.append((2, 'b'));
    ///
    /// let firsts: Vec<i32> = c.iter().map(|p| **p.first()).collect();
    /// assert_eq!(firsts, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> super::Iter<'_, First, Second> {
        super::Iter::new(self)
    }
}

impl<First: Clone, Second: Clone> PairedSequence<First, Second> {
    /// Read a copy of the pair at position `index`.
    ///
    /// The returned [`Pair`] does not borrow the container.
    /// If `index` is not lower than
    /// [`len()`](struct.PairedSequence.html#method.len),
    /// [`PairError::IndexOutOfRange`] is returned and nothing else happens.
    pub fn get(
        &self,
        index: usize,
    ) -> Result<Pair<First, Second>, PairError> {
        match (self.firsts.get(index), self.seconds.get(index)) {
            (Some(first), Some(second)) => {
                Ok(Pair::new(first.clone(), second.clone()))
            }
            _ => {
                log::trace!(
                    "Rejected read at index {} of PairedSequence of len {}.",
                    index,
                    self.len()
                );
                Err(PairError::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
            }
        }
    }
}

impl<First, Second> Default for PairedSequence<First, Second> {
    fn default() -> Self {
        Self::new()
    }
}

impl<First: Clone, Second: Clone> Clone for PairedSequence<First, Second> {
    fn clone(&self) -> Self {
        PairedSequence {
            firsts: self.firsts.clone(),
            seconds: self.seconds.clone(),
        }
    }
}

impl<First: fmt::Debug, Second: fmt::Debug> fmt::Debug
    for PairedSequence<First, Second>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|p| p.into_inner()))
            .finish()
    }
}

impl<First: PartialEq, Second: PartialEq> PartialEq
    for PairedSequence<First, Second>
{
    fn eq(&self, other: &Self) -> bool {
        self.firsts == other.firsts && self.seconds == other.seconds
    }
}

impl<First: Eq, Second: Eq> Eq for PairedSequence<First, Second> {}
