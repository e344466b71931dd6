#[allow(clippy::module_inception)]
mod paired_sequence;
pub use paired_sequence::PairedSequence;
mod iter;
pub use iter::Iter;
#[cfg(feature = "config")]
pub(crate) mod config;
