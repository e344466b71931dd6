/// An immutable `(First, Second)` value.
///
/// [`Pair`] is the unit appended to and read from a
/// [`PairedSequence`](struct.PairedSequence.html). A pair read from a
/// container is a value of its own: it does not borrow the container
/// storage (unless the pair is made of references as yielded by
/// [`iter()`](struct.PairedSequence.html#method.iter)) and is not affected
/// by later appends.
///
/// A [`Pair`] converts from and into a `(First, Second)` tuple.
///
/// ## Examples
///
/// ```
/// use pairseq::Pair;
///
/// let pair = Pair::new(1, "foo");
/// assert_eq!(*pair.first(), 1);
/// assert_eq!(*pair.second(), "foo");
///
/// let pair: Pair<i32, &str> = (2, "bar").into();
/// assert_eq!(pair.into_inner(), (2, "bar"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Pair<First, Second> {
    pub fn new(first: First, second: Second) -> Self {
        Pair { first, second }
    }

    /// The first part of the pair.
    pub fn first(&self) -> &First {
        &self.first
    }

    /// The second part of the pair.
    pub fn second(&self) -> &Second {
        &self.second
    }

    /// Split the pair into a tuple of its two parts.
    pub fn into_inner(self) -> (First, Second) {
        (self.first, self.second)
    }

    /// Borrow both parts of the pair.
    pub fn as_refs(&self) -> Pair<&First, &Second> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }
}

impl<First: Clone, Second: Clone> Pair<&First, &Second> {
    /// Make an owned pair out of a pair of references.
    pub fn cloned(self) -> Pair<First, Second> {
        Pair {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<First, Second> From<(First, Second)> for Pair<First, Second> {
    fn from((first, second): (First, Second)) -> Self {
        Pair { first, second }
    }
}

impl<First, Second> From<Pair<First, Second>> for (First, Second) {
    fn from(pair: Pair<First, Second>) -> Self {
        pair.into_inner()
    }
}

impl<First, Second> PartialEq<(First, Second)> for Pair<First, Second>
where
    First: PartialEq,
    Second: PartialEq,
{
    fn eq(&self, other: &(First, Second)) -> bool {
        self.first == other.0 && self.second == other.1
    }
}

#[cfg(test)]
mod tests {
    use super::Pair;

    #[test]
    fn pair_accessors() {
        let pair = Pair::new(3u8, String::from("three"));
        assert_eq!(*pair.first(), 3u8);
        assert_eq!(pair.second(), "three");
        let (first, second) = pair.into_inner();
        assert_eq!(first, 3u8);
        assert_eq!(second, "three");
    }

    #[test]
    fn pair_tuple_conversions() {
        let pair: Pair<u8, bool> = (1, true).into();
        assert_eq!(pair, (1, true));
        let tuple: (u8, bool) = pair.into();
        assert_eq!(tuple, (1, true));
    }

    #[test]
    fn pair_cloned_from_references() {
        let owned = Pair::new(String::from("a"), vec![1, 2]);
        let borrowed = owned.as_refs();
        assert_eq!(borrowed.cloned(), owned);
    }
}
