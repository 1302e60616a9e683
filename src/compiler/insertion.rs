//! Insertion sort: sink each element left through adjacent swaps

use super::{SortCompiler, SwapRecorder};
use crate::model::Key;
use crate::moves::{MoveFamily, MoveSequence};

pub struct InsertionSort;

impl SortCompiler for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn family(&self) -> MoveFamily {
        MoveFamily::Swap
    }

    fn compile(&self, keys: &[Key]) -> MoveSequence {
        let mut rec = SwapRecorder::new(keys);

        for i in 1..rec.len() {
            let mut j = i;
            while j > 0 && rec.greater(j - 1, j) {
                rec.swap(j - 1, j);
                j -= 1;
            }
        }

        rec.finish()
    }
}
