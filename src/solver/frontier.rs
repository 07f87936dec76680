//! Shared min-priority frontier entry for the best-first strategies.

use grid_util::point::Point;
use num_traits::Zero;
use std::cmp::Ordering;

/// Heap entry holding a tile and its priority key. [std::collections::BinaryHeap]
/// is a max-heap, so the ordering is reversed to pop the smallest
/// `estimated_cost` first; equal keys pop in insertion order via the
/// monotonically increasing `seq` stamp, which is the tie-break rule every
/// priority-queue strategy relies on.
pub(crate) struct MinCostHolder<K> {
    pub estimated_cost: K,
    pub cost: K,
    pub tile: Point,
    pub seq: usize,
}

impl<K: Zero + Ord + Copy> MinCostHolder<K> {
    /// The initial frontier entry for the start tile.
    pub fn origin(tile: Point) -> MinCostHolder<K> {
        MinCostHolder {
            estimated_cost: Zero::zero(),
            cost: Zero::zero(),
            tile,
            seq: 0,
        }
    }
}

impl<K: PartialEq> Eq for MinCostHolder<K> {}

impl<K: PartialEq> PartialEq for MinCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for MinCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for MinCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders by estimated cost first; among equal estimates the entry
        // inserted earlier is the greater one, so it pops first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_smallest_cost_first_then_fifo() {
        let mut heap = BinaryHeap::new();
        for (cost, seq) in [(3_i64, 1), (1, 2), (1, 3), (2, 4)] {
            heap.push(MinCostHolder {
                estimated_cost: cost,
                cost,
                tile: Point::new(seq as i32, 0),
                seq,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|h| h.seq)).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
    }

    #[test]
    fn origin_has_zero_cost() {
        let entry: MinCostHolder<i64> = MinCostHolder::origin(Point::new(0, 0));
        assert_eq!(entry.estimated_cost, 0);
        assert_eq!(entry.cost, 0);
    }
}
