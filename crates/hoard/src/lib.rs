//! Exclusively-owned integer block storage with full value semantics.
//!
//! [`Block`] owns a contiguous, heap-allocated, fixed-length run of `i32`
//! and carries the complete create/duplicate/transfer/release lifecycle:
//!
//! - **Create:** [`Block::zeroed`] allocates a zero-initialised block.
//! - **Duplicate:** [`Clone`] always deep-copies — two live blocks never
//!   share storage.
//! - **Transfer:** moves hand the existing storage to a new owner without
//!   copying; [`Block::take`] is the in-place form, leaving the source
//!   drained.
//! - **Release:** storage is freed exactly once, when its sole owner
//!   drops. A drained block owns nothing and releases nothing.
//!
//! The "at most one live owner per storage block" invariant is enforced
//! by construction: ownership is linear, duplication is explicit, and
//! the aliased self-assignment cases are rejected by the borrow checker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;

// Public re-exports for the primary API surface.
pub use block::Block;
pub use error::BlockError;
