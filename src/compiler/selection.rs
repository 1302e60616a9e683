//! Selection sort: scan for the minimum, then one swap into place

use super::{SortCompiler, SwapRecorder};
use crate::model::Key;
use crate::moves::{MoveFamily, MoveSequence};

pub struct SelectionSort;

impl SortCompiler for SelectionSort {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn family(&self) -> MoveFamily {
        MoveFamily::Swap
    }

    fn compile(&self, keys: &[Key]) -> MoveSequence {
        let mut rec = SwapRecorder::new(keys);
        let n = rec.len();

        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if rec.greater(min, j) {
                    min = j;
                }
            }
            if min != i {
                rec.swap(i, min);
            }
        }

        rec.finish()
    }
}
