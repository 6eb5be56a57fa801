use std::ops::RangeInclusive;

use crate::util::{check_index, check_range};
use crate::{RangeSum, RangeSumError};

type Link = Option<Box<Node>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    start: usize,
    end: usize,
    sum: i64,
    left: Link,
    right: Link,
}

impl Node {
    fn build(values: &[i64], start: usize, end: usize) -> Box<Node> {
        if start == end {
            return Box::new(Node {
                start,
                end,
                sum: values[start],
                left: None,
                right: None,
            });
        }

        let mid = (start + end) / 2;
        let left = Self::build(values, start, mid);
        let right = Self::build(values, mid + 1, end);
        let sum = left.sum + right.sum;

        Box::new(Node {
            start,
            end,
            sum,
            left: Some(left),
            right: Some(right),
        })
    }

    fn query(&self, start: usize, end: usize) -> i64 {
        if self.start > end || self.end < start {
            return 0;
        }

        // Fully covered: the cached sum answers without descending further.
        if start <= self.start && self.end <= end {
            return self.sum;
        }

        let left = self.left.as_deref().map_or(0, |n| n.query(start, end));
        let right = self.right.as_deref().map_or(0, |n| n.query(start, end));
        left + right
    }

    fn modify(&mut self, index: usize, value: i64) {
        if self.start == self.end {
            debug_assert_eq!(self.start, index);
            self.sum = value;
            return;
        }

        let mid = (self.start + self.end) / 2;
        if index <= mid {
            if let Some(left) = self.left.as_deref_mut() {
                left.modify(index, value);
            }
        } else if let Some(right) = self.right.as_deref_mut() {
            right.modify(index, value);
        }

        let left_sum = self.left.as_deref().map_or(0, |n| n.sum);
        let right_sum = self.right.as_deref().map_or(0, |n| n.sum);
        self.sum = left_sum + right_sum;
    }
}

/// Range-sum structure backed by a recursive segment tree.
///
/// Each node caches the sum of its inclusive index range; an internal node's
/// sum always equals the sum of its two children. Build is O(n), `query` and
/// `modify` are O(log n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTreeSum {
    root: Link,
    len: usize,
}

impl RangeSum for SegmentTreeSum {
    fn new(values: &[i64]) -> Self {
        let len = values.len();
        if len == 0 {
            return Self { root: None, len: 0 };
        }

        Self {
            root: Some(Node::build(values, 0, len - 1)),
            len,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn query(&self, range: RangeInclusive<usize>) -> Result<i64, RangeSumError> {
        let (start, end) = (*range.start(), *range.end());
        check_range(start, end, self.len)?;
        Ok(self.root.as_deref().map_or(0, |n| n.query(start, end)))
    }

    fn modify(&mut self, index: usize, value: i64) -> Result<(), RangeSumError> {
        check_index(index, self.len)?;
        if let Some(root) = self.root.as_deref_mut() {
            root.modify(index, value);
        }
        Ok(())
    }
}
