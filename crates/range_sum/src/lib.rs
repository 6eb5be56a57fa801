mod fenwick;
mod segment_tree;
mod util;

use std::ops::RangeInclusive;

use thiserror::Error;

pub use fenwick::FenwickTreeSum;
pub use segment_tree::SegmentTreeSum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RangeSumError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid query range {start}..={end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Mutable range-sum interface over a fixed-length `i64` sequence.
///
/// - Query ranges are inclusive on both ends.
/// - `modify` sets the absolute value at an index; it is not a delta.
/// - Bounds are validated: an out-of-range index or an empty/overflowing
///   range is an error, never a silent no-op.
pub trait RangeSum: Sized {
    fn new(values: &[i64]) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn query(&self, range: RangeInclusive<usize>) -> Result<i64, RangeSumError>;
    fn modify(&mut self, index: usize, value: i64) -> Result<(), RangeSumError>;
}
