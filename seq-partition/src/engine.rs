use std::collections::VecDeque;
use std::iter::Peekable;

use seq_error::{Result, SeqError};

/// Lazy partitioning engine over a single-pass source iterator.
///
/// Yields groups of up to `size` elements, starting a new group every
/// `step` source positions. With `step < size` consecutive groups overlap
/// by `size - step` elements, with `step == size` the source is tiled, and
/// with `step > size` the elements between groups are dropped.
///
/// A trailing accumulation shorter than `size` is dropped, unless a pad
/// sequence was supplied: then it is completed from the start of the pad
/// (or emitted short if the pad itself runs out).
pub struct Partition<I>
where
    I: Iterator,
{
    source: Peekable<I>,
    buffer: VecDeque<I::Item>,
    size: usize,
    step: usize,
    pad: Option<Vec<I::Item>>,
}

impl<I> Partition<I>
where
    I: Iterator,
{
    /// Create the general engine. Fails if `size` or `step` is zero.
    pub fn new(
        source: I,
        size: usize,
        step: usize,
        pad: Option<Vec<I::Item>>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(SeqError::InvalidArgument(
                "partition size must be positive".to_owned(),
            ));
        }
        if step == 0 {
            return Err(SeqError::InvalidArgument(
                "partition step must be positive".to_owned(),
            ));
        }

        log::debug!(
            "Partitioning with size={}, step={}, padded={}",
            size,
            step,
            pad.is_some()
        );

        Ok(Partition {
            source: source.peekable(),
            buffer: VecDeque::with_capacity(size),
            size,
            step,
            pad,
        })
    }

    /// Tile the source into disjoint, contiguous groups of `size`.
    pub fn tiling(source: I, size: usize) -> Result<Self> {
        Self::new(source, size, size, None)
    }

    /// Start a new group of `size` every `step` source positions.
    pub fn stepping(source: I, size: usize, step: usize) -> Result<Self> {
        Self::new(source, size, step, None)
    }

    /// Slide a window of `size` over the source, advancing by one element.
    pub fn sliding(source: I, size: usize) -> Result<Self> {
        Self::new(source, size, 1, None)
    }
}

impl<I> Partition<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn refill(&mut self) {
        while self.buffer.len() < self.size {
            match self.source.next() {
                Some(item) => self.buffer.push_back(item),
                None => break,
            }
        }
    }

    fn skip_gap(&mut self) {
        for _ in 0..self.step - self.size {
            if self.source.next().is_none() {
                break;
            }
        }
    }

    // Pad is re-read from its start for every short group and surplus
    // elements are not carried over.
    fn padded_group(&self, pad: &[I::Item]) -> Vec<I::Item> {
        let missing = self.size - self.buffer.len();
        log::trace!(
            "Padding short group of {} with up to {} element(s)",
            self.buffer.len(),
            missing
        );

        let mut group: Vec<I::Item> = self.buffer.iter().cloned().collect();
        group.extend(pad.iter().take(missing).cloned());
        group
    }
}

impl<I> Iterator for Partition<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // There is another group only while the source itself has
        // unconsumed elements; leftovers in the buffer alone never
        // start one.
        self.source.peek()?;

        if self.step <= self.size {
            // keep the last `size - step` elements as overlap
            let reused = self.step.min(self.buffer.len());
            self.buffer.drain(..reused);
        } else {
            self.buffer.clear();
        }

        self.refill();

        if self.step > self.size {
            self.skip_gap();
        }

        if self.buffer.len() == self.size {
            return Some(self.buffer.iter().cloned().collect());
        }

        match self.pad.as_deref() {
            Some(pad) => Some(self.padded_group(pad)),
            None => None,
        }
    }
}
