//! Merge sort: top-down, each merge written back through its window

use super::SortCompiler;
use crate::model::Key;
use crate::moves::{MoveFamily, MoveRecord, MoveSequence, RangeId};

pub struct MergeSort;

impl SortCompiler for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn family(&self) -> MoveFamily {
        MoveFamily::Range
    }

    fn compile(&self, keys: &[Key]) -> MoveSequence {
        let mut work = keys.to_vec();
        let mut moves = Vec::new();
        if !work.is_empty() {
            let hi = work.len() - 1;
            sort(&mut work, 0, hi, &mut moves);
        }
        MoveSequence::new(moves)
    }
}

fn sort(work: &mut [Key], lo: usize, hi: usize, moves: &mut Vec<MoveRecord>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort(work, lo, mid, moves);
    sort(work, mid + 1, hi, moves);
    merge(work, lo, mid, hi, moves);
}

/// Merge `lo..=mid` with `mid+1..=hi`, emitting one write per position
fn merge(work: &mut [Key], lo: usize, mid: usize, hi: usize, moves: &mut Vec<MoveRecord>) {
    let window = RangeId::window(lo, hi);
    let mut buffer = Vec::with_capacity(hi - lo + 1);
    let (mut left, mut right) = (lo, mid + 1);

    while left <= mid && right <= hi {
        // `<=` keeps equal keys in input order
        if work[left] <= work[right] {
            buffer.push(work[left]);
            left += 1;
        } else {
            buffer.push(work[right]);
            right += 1;
        }
    }
    buffer.extend_from_slice(&work[left..=mid]);
    buffer.extend_from_slice(&work[right..=hi]);

    for (offset, value) in buffer.into_iter().enumerate() {
        let index = lo + offset;
        work[index] = value;
        moves.push(MoveRecord::write(index, value, &window));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_elements_single_window() {
        let moves = MergeSort.compile(&[2, 1]);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.range_count(), 1);

        let writes: Vec<(usize, Key)> = moves
            .records()
            .iter()
            .map(|m| match m {
                MoveRecord::Range { index, value, range } => {
                    assert_eq!(range.indices(), &[0, 1]);
                    (*index, *value)
                }
                other => panic!("Expected range move, got {:?}", other),
            })
            .collect();
        assert_eq!(writes, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_windows_follow_recursion() {
        // [4,3,2,1]: merge 0..=1, merge 2..=3, merge 0..=3
        let moves = MergeSort.compile(&[4, 3, 2, 1]);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.range_count(), 3);
    }

    #[test]
    fn test_windows_are_distinct_objects() {
        // Every merge call gets its own window, even over identical keys
        let moves = MergeSort.compile(&[1, 1, 1, 1]);
        let ranges: Vec<&RangeId> = moves
            .records()
            .iter()
            .filter_map(|m| match m {
                MoveRecord::Range { range, .. } => Some(range),
                _ => None,
            })
            .collect();
        assert_eq!(ranges[0], ranges[1]);
        assert_ne!(ranges[1], ranges[2]);
        assert_ne!(ranges[3], ranges[4]);
    }
}
