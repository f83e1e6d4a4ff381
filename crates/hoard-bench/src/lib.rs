//! Benchmark fixtures for hoard block operations.
//!
//! Provides deterministic block builders shared by the benches:
//!
//! - [`sequential_block`]: ascending values starting at 0
//! - [`striped_block`]: alternating positive/negative values

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hoard::Block;

/// Build a block of `len` elements holding `0, 1, 2, ...`.
///
/// Values wrap on overflow, so any `len` up to [`Block::MAX_LEN`] is fine.
pub fn sequential_block(len: usize) -> Block {
    (0..len).map(|i| i as i32).collect()
}

/// Build a block of `len` elements alternating `v, -v` by index.
pub fn striped_block(len: usize) -> Block {
    (0..len)
        .map(|i| {
            let v = i as i32;
            if i % 2 == 0 {
                v
            } else {
                -v
            }
        })
        .collect()
}
