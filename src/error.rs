use std::fmt;

/// Error returned by [`PairedSequence`](struct.PairedSequence.html)
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairError {
    /// The requested position is not lower than the container length.
    /// The container is left unchanged.
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Length of the container at the time of the request.
        len: usize,
    },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::IndexOutOfRange { index, len } => write!(
                f,
                "index out of range: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl std::error::Error for PairError {}

#[cfg(test)]
mod tests {
    use super::PairError;

    #[test]
    fn index_out_of_range_display() {
        let e = PairError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(
            e.to_string(),
            "index out of range: the len is 2 but the index is 2"
        );
    }
}
