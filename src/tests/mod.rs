mod paired_sequence;
pub use paired_sequence::{test_iter, test_paired_sequence};
