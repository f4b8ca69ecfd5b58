use crate::engine::Partition;
use seq_error::Result;

/// Method syntax for the partitioning engine on any iterator.
pub trait SequencePartition: Iterator + Sized {
    /// Tile the sequence into disjoint groups of `size`, dropping a
    /// short trailing group.
    fn partitioned(self, size: usize) -> Result<Partition<Self>> {
        Partition::tiling(self, size)
    }

    /// Start a new group of `size` every `step` elements.
    fn partitioned_every(
        self,
        size: usize,
        step: usize,
    ) -> Result<Partition<Self>> {
        Partition::stepping(self, size, step)
    }

    /// Start a new group of `size` every `step` elements, completing a
    /// short trailing group from `pad`.
    fn partitioned_padded(
        self,
        size: usize,
        step: usize,
        pad: Vec<Self::Item>,
    ) -> Result<Partition<Self>> {
        Partition::new(self, size, step, Some(pad))
    }

    /// Slide a window of `size` over the sequence one element at a time.
    fn sliding_window(self, size: usize) -> Result<Partition<Self>> {
        Partition::sliding(self, size)
    }
}

impl<I> SequencePartition for I where I: Iterator {}
