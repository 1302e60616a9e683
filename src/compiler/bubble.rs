//! Bubble sort: adjacent compare/swap passes with early exit

use super::{SortCompiler, SwapRecorder};
use crate::model::Key;
use crate::moves::{MoveFamily, MoveSequence};

pub struct BubbleSort;

impl SortCompiler for BubbleSort {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn family(&self) -> MoveFamily {
        MoveFamily::Swap
    }

    fn compile(&self, keys: &[Key]) -> MoveSequence {
        let mut rec = SwapRecorder::new(keys);
        let n = rec.len();

        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if rec.greater(j, j + 1) {
                    rec.swap(j, j + 1);
                    swapped = true;
                }
            }
            // Already sorted
            if !swapped {
                break;
            }
        }

        rec.finish()
    }
}
