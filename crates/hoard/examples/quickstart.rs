//! Hoard quickstart — the block lifecycle from construction to release.
//!
//! Demonstrates:
//!   1. Zero-initialised construction and element access
//!   2. Deep-copy duplication (`clone` / `clone_from`)
//!   3. Concatenation, with the result received by move
//!   4. Ownership transfer via `take`, leaving the source drained
//!
//! Run with:
//!   cargo run --example quickstart

use hoard::Block;

fn main() {
    // ── Construction ────────────────────────────────────────────

    let mut a = Block::zeroed(5);
    for i in 0..a.len() {
        a[i] = (i as i32) * 2;
    }
    println!("a           = {a}");
    assert_eq!(a.to_string(), "0 2 4 6 8 ");

    // ── Duplication ─────────────────────────────────────────────

    // `clone` always deep-copies; mutating the duplicate leaves the
    // source untouched.
    let mut b = a.clone();
    b[0] = 99;
    println!("b (mutated) = {b}");
    assert_eq!(a[0], 0);

    // `clone_from` is the assigning form; it reuses the destination's
    // allocation when the lengths match.
    let mut c = Block::zeroed(5);
    c.clone_from(&a);
    println!("c           = {c}");
    assert_eq!(c, a);

    // ── Concatenation ───────────────────────────────────────────

    // The result is a fresh block, moved into its binding — neither
    // input is copied again or mutated.
    let joined = &a + &b;
    println!("a + b       = {joined}");
    assert_eq!(joined.len(), a.len() + b.len());

    // ── Transfer ────────────────────────────────────────────────

    // `take` hands the storage to a new owner without copying and
    // leaves the source drained. Dropping the drained source releases
    // nothing; the storage is freed exactly once, with `moved`.
    let mut staging = joined;
    let moved = staging.take();
    println!("moved       = {moved}");
    assert!(staging.is_empty());
    drop(staging);
    assert_eq!(moved.len(), 10);

    println!("lifecycle complete");
}
