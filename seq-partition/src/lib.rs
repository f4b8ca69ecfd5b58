//! # seq-partition
//!
//! Lazy partitioning of ordered, single-pass sequences.
//!
//! The engine ([`Partition`]) wraps any iterator and yields fixed-size
//! groups of its elements, parameterized by group `size`, a `step` distance
//! between group start positions and an optional `pad` sequence completing
//! a short trailing group. `step` may be smaller than, equal to, or greater
//! than `size`, producing overlapping windows, tight tiling, or gaps with
//! dropped elements.
//!
//! Groups are assembled on demand, so unbounded sources are supported as
//! long as the caller only takes a finite prefix of the output.

pub mod engine;
pub mod ext;
pub mod range;

pub use engine::Partition;
pub use ext::SequencePartition;
pub use range::{range, range_between, range_stepped, range_to, Range};
