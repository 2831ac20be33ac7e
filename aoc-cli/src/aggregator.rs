//! Reordering of streamed solver results
//!
//! Workers finish in any order; the aggregator holds results back until
//! everything before them in (year, day, part) order has arrived. Both the
//! outstanding keys and the early arrivals live in min-heaps.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Output position of a result, ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// A result waiting for its turn, compared by key only
struct Pending {
    key: ResultKey,
    result: SolverResult,
}

impl Pending {
    fn new(result: SolverResult) -> Self {
        Self {
            key: ResultKey::from(&result),
            result,
        }
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Pending {}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

/// Buffers results and releases them in ascending key order
pub struct ResultAggregator {
    /// Keys not yet released, smallest on top
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Early arrivals, smallest on top
    pending: BinaryHeap<Reverse<Pending>>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Accept one result and return every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Reverse(Pending::new(result)));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Reverse(head))) =
            (self.expected.peek(), self.pending.peek())
        {
            if head.key != *next {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(pending)) = self.pending.pop() {
                ready.push(pending.result);
            }
        }
        ready
    }

    /// Everything still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::iter::from_fn(|| self.pending.pop())
            .map(|Reverse(pending)| pending.result)
            .collect()
    }

    /// True once every expected key has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
