use seq_error::{Result, SeqError};

/// Arithmetic sequence of integers, optionally unbounded.
///
/// Bounds are inclusive at the start and exclusive at the end. The step
/// may be negative, counting down towards an end below the start.
pub struct Range {
    cursor: Option<i64>,
    end: Option<i64>,
    step: i64,
}

/// The unbounded sequence 0, 1, 2, ...
pub fn range() -> Range {
    Range {
        cursor: Some(0),
        end: None,
        step: 1,
    }
}

/// The sequence 0, 1, ... up to but excluding `end`.
pub fn range_to(end: i64) -> Range {
    range_between(0, end)
}

/// The sequence `start`, `start` + 1, ... up to but excluding `end`.
pub fn range_between(start: i64, end: i64) -> Range {
    Range {
        cursor: Some(start),
        end: Some(end),
        step: 1,
    }
}

/// Like [`range_between`], advancing by `step`. Fails if `step` is zero.
pub fn range_stepped(start: i64, end: i64, step: i64) -> Result<Range> {
    if step == 0 {
        return Err(SeqError::InvalidArgument(
            "range step must not be zero".to_owned(),
        ));
    }
    Ok(Range {
        cursor: Some(start),
        end: Some(end),
        step,
    })
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.cursor?;

        let done = match self.end {
            Some(end) => {
                if self.step > 0 {
                    current >= end
                } else {
                    current <= end
                }
            }
            None => false,
        };
        if done {
            self.cursor = None;
            return None;
        }

        // unbounded sequences stop at the numeric limit instead of wrapping
        self.cursor = current.checked_add(self.step);
        Some(current)
    }
}
