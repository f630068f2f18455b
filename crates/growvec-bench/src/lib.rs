//! Benchmark workloads for the growvec container.
//!
//! - [`filled`]: a container built by `n` plain appends
//! - [`insertion_indices`]: deterministic pseudo-random insertion points

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec::{GrowVec, NullObserver};

/// Build a container holding `0..n` by repeated appends.
///
/// Uses [`NullObserver`] so diagnostics do not skew timings.
pub fn filled(n: usize) -> GrowVec<u64, NullObserver> {
    let mut vec = GrowVec::with_observer(NullObserver);
    for i in 0..n as u64 {
        vec.append(i);
    }
    vec
}

/// Generate `count` insertion indices valid for a container that starts
/// with `start_len` elements and gains one element per insertion.
///
/// The same `seed` always yields the same sequence.
pub fn insertion_indices(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(start_len > 0, "insertion needs at least one live element");
    let mut state = seed;
    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as usize) % (start_len + i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_has_requested_len() {
        let vec = filled(100);
        assert_eq!(vec.len(), 100);
        assert_eq!(vec.get(99), Some(99));
    }

    #[test]
    fn insertion_indices_always_in_range() {
        let indices = insertion_indices(1, 500, 42);
        for (i, &idx) in indices.iter().enumerate() {
            assert!(idx < 1 + i, "index {idx} out of range at step {i}");
        }
    }

    #[test]
    fn insertion_indices_deterministic() {
        assert_eq!(insertion_indices(10, 50, 7), insertion_indices(10, 50, 7));
    }
}
