//! Priority queue entries for lazy greedy selection.

use std::cmp::Ordering;

/// A set's queued estimate of how many uncovered elements it still adds.
///
/// `BinaryHeap` is a max-heap, so the ordering puts the largest `gain` on
/// top and, among equal gains, the smallest `rank`. Ranks are unique per
/// set, which keeps the ordering total and the pop sequence deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// Uncovered elements the set held when it was queued.
    pub gain: usize,
    /// Position of the set in tie-break order.
    pub rank: usize,
    /// Index of the set in the working copy.
    pub slot: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .cmp(&other.gain)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn candidate(gain: usize, rank: usize) -> Candidate {
        Candidate {
            gain,
            rank,
            slot: rank,
        }
    }

    #[test]
    fn test_larger_gain_pops_first() {
        let mut heap = BinaryHeap::from(vec![candidate(1, 0), candidate(3, 2), candidate(2, 1)]);

        assert_eq!(heap.pop().map(|c| c.gain), Some(3));
        assert_eq!(heap.pop().map(|c| c.gain), Some(2));
        assert_eq!(heap.pop().map(|c| c.gain), Some(1));
        assert!(heap.pop().is_none());
    }

    #[test]
    fn test_ties_pop_smaller_rank_first() {
        let mut heap = BinaryHeap::from(vec![candidate(2, 5), candidate(2, 1), candidate(2, 3)]);

        let ranks: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 3, 5]);
    }
}
