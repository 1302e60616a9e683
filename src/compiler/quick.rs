//! Quick sort: Lomuto partition, last element as pivot
//!
//! Pending windows are kept on an explicit stack so already-sorted input
//! (the worst case for a last-element pivot) cannot exhaust the call stack.
//! The left part of each partition is processed before the right.

use super::SortCompiler;
use crate::model::Key;
use crate::moves::{MoveFamily, MoveRecord, MoveSequence, RangeId};

pub struct QuickSort;

impl SortCompiler for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn family(&self) -> MoveFamily {
        MoveFamily::Range
    }

    fn compile(&self, keys: &[Key]) -> MoveSequence {
        let mut work = keys.to_vec();
        let mut moves = Vec::new();
        let mut pending = Vec::new();

        if work.len() > 1 {
            pending.push((0, work.len() - 1));
        }

        while let Some((lo, hi)) = pending.pop() {
            let p = partition(&mut work, lo, hi, &mut moves);
            if p + 1 < hi {
                pending.push((p + 1, hi));
            }
            if p > lo + 1 {
                pending.push((lo, p - 1));
            }
        }

        MoveSequence::new(moves)
    }
}

/// Partition `lo..=hi` around `work[hi]`; returns the pivot's final index
fn partition(work: &mut [Key], lo: usize, hi: usize, moves: &mut Vec<MoveRecord>) -> usize {
    let window = RangeId::window(lo, hi);
    let pivot = work[hi];
    let mut store = lo;

    for j in lo..hi {
        if work[j] < pivot {
            exchange(work, store, j, &window, moves);
            store += 1;
        }
    }
    exchange(work, store, hi, &window, moves);
    store
}

/// Swap two positions as a pair of writes; self-exchanges emit nothing
fn exchange(
    work: &mut [Key],
    i: usize,
    j: usize,
    window: &RangeId,
    moves: &mut Vec<MoveRecord>,
) {
    if i == j {
        return;
    }
    work.swap(i, j);
    moves.push(MoveRecord::write(i, work[i], window));
    moves.push(MoveRecord::write(j, work[j], window));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writes(moves: &MoveSequence) -> Vec<(usize, Key)> {
        moves
            .records()
            .iter()
            .map(|m| match m {
                MoveRecord::Range { index, value, .. } => (*index, *value),
                other => panic!("Expected range move, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_pivot_swapped_into_place() {
        // pivot 1 is smaller than everything: one exchange of 0 and 2
        let moves = QuickSort.compile(&[3, 2, 1]);
        // the second window 1..=2 is already partitioned and writes nothing
        assert_eq!(writes(&moves), vec![(0, 1), (2, 3)]);
        assert_eq!(moves.range_count(), 1);
    }

    #[test]
    fn test_sorted_input_emits_nothing() {
        let moves = QuickSort.compile(&[1, 2, 3, 4, 5]);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_large_sorted_input_does_not_recurse() {
        let keys: Vec<Key> = (0..5_000).rev().collect();
        let moves = QuickSort.compile(&keys);
        assert!(!moves.is_empty());
    }
}
