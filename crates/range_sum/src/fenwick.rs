use std::ops::RangeInclusive;

use crate::util::{check_index, check_range};
use crate::{RangeSum, RangeSumError};

#[inline(always)]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Range-sum structure backed by a Fenwick tree (binary indexed tree).
///
/// `bit` is 1-indexed; `bit[i]` covers the `lowbit(i)`-sized block ending at
/// position `i`. `mirror` tracks the current logical values so that `modify`
/// can turn an absolute value into a delta. `query` and `modify` are
/// O(log n), construction O(n log n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenwickTreeSum {
    mirror: Vec<i64>,
    bit: Vec<i64>,
}

impl FenwickTreeSum {
    fn add(&mut self, index: usize, delta: i64) {
        let n = self.mirror.len();
        let mut i = index + 1;
        while i <= n {
            self.bit[i] += delta;
            i += lowbit(i);
        }
    }

    /// Inclusive prefix sum of the values at `0..=index`.
    fn prefix_sum(&self, index: usize) -> i64 {
        let mut sum = 0;
        let mut i = index + 1;
        while i > 0 {
            sum += self.bit[i];
            i -= lowbit(i);
        }
        sum
    }
}

impl RangeSum for FenwickTreeSum {
    fn new(values: &[i64]) -> Self {
        let n = values.len();
        let mut tree = Self {
            mirror: values.to_vec(),
            bit: vec![0; n + 1],
        };
        for (i, &value) in values.iter().enumerate() {
            tree.add(i, value);
        }
        tree
    }

    fn len(&self) -> usize {
        self.mirror.len()
    }

    fn query(&self, range: RangeInclusive<usize>) -> Result<i64, RangeSumError> {
        let (start, end) = (*range.start(), *range.end());
        check_range(start, end, self.mirror.len())?;

        let mut sum = self.prefix_sum(end);
        if start > 0 {
            sum -= self.prefix_sum(start - 1);
        }
        Ok(sum)
    }

    fn modify(&mut self, index: usize, value: i64) -> Result<(), RangeSumError> {
        check_index(index, self.mirror.len())?;

        let delta = value - self.mirror[index];
        if delta == 0 {
            return Ok(());
        }
        self.add(index, delta);
        self.mirror[index] = value;
        Ok(())
    }
}
