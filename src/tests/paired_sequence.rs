extern crate rand;
use crate::{PairError, PairedSequence};
use rand::random;

pub type TestFirst = u16;
pub type TestSecond = String;
pub type TestElement = (TestFirst, TestSecond);
pub type TestElements = Vec<TestElement>;

pub fn rand(a: u64, b: u64) -> u64 {
    a + (random::<u64>() % (b - a))
}

/// Make `n` random pairs.
pub fn elements(n: usize) -> TestElements {
    (0..n)
        .map(|_| {
            let first = random::<TestFirst>();
            (first, format!("{}", rand(0, 1 << 32)))
        })
        .collect()
}

fn test_append(
    c: &mut PairedSequence<TestFirst, TestSecond>,
    kv: TestElements,
) {
    let num_before_insertion = c.len();
    let num_insertion = kv.len();

    for (i, e) in kv.into_iter().enumerate() {
        c.append(e);
        // The count is updated correctly.
        assert_eq!(c.len(), num_before_insertion + i + 1);
        assert!(!c.is_empty());
    }
    assert_eq!(c.len(), num_before_insertion + num_insertion);
}

fn test_get(c: &PairedSequence<TestFirst, TestSecond>, kv: &[TestElement]) {
    // Elements read back in the order they were appended.
    for (i, e) in kv.iter().enumerate() {
        assert_eq!(c.get(i).unwrap(), e.clone());
    }

    // Reads past the end fail and do not change the container.
    let len = c.len();
    for index in [len, len + 1, len + rand(2, 100) as usize, usize::MAX] {
        assert_eq!(
            c.get(index),
            Err(PairError::IndexOutOfRange { index, len })
        );
        assert_eq!(c.len(), len);
    }
}

/// Append `n` random pairs to an empty container and read them back.
pub fn test_paired_sequence(
    mut c: PairedSequence<TestFirst, TestSecond>,
    n: usize,
) {
    assert!(c.is_empty());
    test_get(&c, &[]);

    let kv = elements(n);
    test_append(&mut c, kv.clone());
    test_get(&c, kv.as_slice());

    // Appending more keeps earlier pairs in place.
    let more = elements(n / 2 + 1);
    test_append(&mut c, more.clone());
    let all: TestElements = kv.into_iter().chain(more).collect();
    test_get(&c, all.as_slice());
}

/// Append `n` random pairs to an empty container and walk them with an
/// iterator.
pub fn test_iter(mut c: PairedSequence<TestFirst, TestSecond>, n: usize) {
    assert_eq!(c.iter().count(), 0);

    let kv = elements(n);
    for e in kv.iter() {
        c.append(e.clone());
    }

    let it = c.iter();
    assert_eq!(it.len(), n);
    for (pair, e) in it.zip(kv.iter()) {
        assert_eq!(pair.first(), &&e.0);
        assert_eq!(pair.second(), &&e.1);
    }

    for (pair, e) in c.iter().rev().zip(kv.iter().rev()) {
        assert_eq!(pair.cloned(), e.clone());
    }
}
