//! An ordered container of `(First, Second)` pairs stored as two parallel
//! sequences.
//!
//! [`PairedSequence`] keeps the first part of every pair in one vector and
//! the second part in another. The two vectors grow together on
//! [`append()`](struct.PairedSequence.html#method.append) and position `i`
//! in both of them forms the pair `i`, read back by value with
//! [`get()`](struct.PairedSequence.html#method.get).
//!
//! ```
//! use pairseq::{PairedSequence, PairError};
//!
//! let mut l = PairedSequence::<i32, &str>::new();
//! l.append((1, "foo"));
//! l.append((2, "bar"));
//!
//! assert_eq!(l.len(), 2);
//! assert_eq!(l.get(0), Ok((1, "foo").into()));
//! assert_eq!(l.get(1), Ok((2, "bar").into()));
//! assert!(matches!(l.get(2), Err(PairError::IndexOutOfRange { .. })));
//! ```
//!
//! The container does not synchronize its accesses. Appending takes the
//! container by mutable reference, so sharing it across threads requires
//! an outer lock such as [`std::sync::RwLock`].

mod pair;
pub use pair::Pair;
mod error;
pub use error::PairError;
mod paired_sequence;
pub use paired_sequence::{Iter, PairedSequence};

/// Containers instantiation from configuration files.
#[cfg(feature = "config")]
pub mod config;

/// Crate-private test drivers, compiled with unit tests only.
/// This module tests the expected behavior of
/// [`PairedSequence`](../struct.PairedSequence.html) with
/// `test_paired_sequence()` and `test_iter()`.
#[cfg(test)]
mod tests;
