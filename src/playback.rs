//! Playback engine
//!
//! [`Player`] replays a [`MoveSequence`] against a [`VisualStore`] as an
//! explicit step machine: every call to [`Player::step`] performs exactly one
//! store mutation and reports it as a [`Step`].  Whoever drives the player
//! pauses between steps; the player itself never sleeps, so it can be tested
//! without timers.
//!
//! # Swap family
//!
//! Each record takes two or three steps:
//!
//! ```text
//! Highlight(a, b) → [Exchange(a, b) if op = swap] → Restore(a, b)
//! ```
//!
//! # Range family
//!
//! The player keeps the window of the previous record.  Only when a record's
//! window differs from it (by identity) does it restore the old window to
//! normal and highlight the new one; records inside the same window go
//! straight to their write.  This keeps consecutive writes of one merge from
//! flickering.
//!
//! ```text
//! [ClearRange(old)] → [MarkRange(new)] → Write(index, value)
//! ```
//!
//! # Mixed input
//!
//! Compilers never mix families, but if the shape changes mid-stream the rest
//! is replayed as a new sub-sequence: the window cursor is reset and dispatch
//! starts over.  Nothing is skipped.

use crate::error::StoreError;
use crate::model::{ClassType, Key};
use crate::moves::{MoveFamily, MoveRecord, MoveSequence, RangeId, SwapOp};
use crate::store::VisualStore;
use std::collections::VecDeque;
use tracing::trace;

/// One applied store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Highlight { a: usize, b: usize },
    Exchange { a: usize, b: usize },
    Restore { a: usize, b: usize },
    ClearRange(RangeId),
    MarkRange(RangeId),
    Write { index: usize, value: Key },
    /// Every element marked done after the last move
    Done,
}

/// What the next step will do
#[derive(Debug, Clone)]
enum Phase {
    /// Take the next record
    Next,
    Exchange { a: usize, b: usize },
    Restore { a: usize, b: usize },
    MarkRange { range: RangeId, index: usize, value: Key },
    Write { index: usize, value: Key },
}

#[derive(Debug)]
pub struct Player {
    pending: VecDeque<MoveRecord>,
    phase: Phase,
    /// Window highlighted by the last range record
    active_range: Option<RangeId>,
    /// Family of the last record taken
    family: Option<MoveFamily>,
    total: usize,
    applied: usize,
}

impl Player {
    pub fn new(moves: MoveSequence) -> Self {
        let pending: VecDeque<MoveRecord> = moves.into_records().into();
        Player {
            total: pending.len(),
            pending,
            phase: Phase::Next,
            active_range: None,
            family: None,
            applied: 0,
        }
    }

    /// Number of records in the sequence
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of records fully applied
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// True once every record has been fully applied
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty() && matches!(self.phase, Phase::Next)
    }

    /// Perform one store mutation.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted.
    pub fn step(&mut self, store: &mut VisualStore) -> Result<Option<Step>, StoreError> {
        let phase = std::mem::replace(&mut self.phase, Phase::Next);
        let step = match phase {
            Phase::Next => match self.pending.pop_front() {
                Some(record) => self.begin(record, store)?,
                None => return Ok(None),
            },
            Phase::Exchange { a, b } => {
                store.exchange(a, b)?;
                self.phase = Phase::Restore { a, b };
                Step::Exchange { a, b }
            }
            Phase::Restore { a, b } => {
                store.set_class(&[a, b], ClassType::Normal)?;
                self.applied += 1;
                Step::Restore { a, b }
            }
            Phase::MarkRange {
                range,
                index,
                value,
            } => self.mark_range(range, index, value, store)?,
            Phase::Write { index, value } => self.write(index, value, store)?,
        };

        trace!(?step, applied = self.applied, total = self.total, "playback step");
        Ok(Some(step))
    }

    /// Run every remaining step without pausing; returns the step count
    pub fn run_to_end(&mut self, store: &mut VisualStore) -> Result<usize, StoreError> {
        let mut steps = 0;
        while self.step(store)?.is_some() {
            steps += 1;
        }
        Ok(steps)
    }

    fn begin(&mut self, record: MoveRecord, store: &mut VisualStore) -> Result<Step, StoreError> {
        let family = record.family();
        if self.family.is_some_and(|f| f != family) {
            trace!(?family, "move family changed, starting new sub-sequence");
            self.active_range = None;
        }
        self.family = Some(family);

        match record {
            MoveRecord::Swap { a, b, op } => {
                store.set_class(&[a, b], ClassType::Current)?;
                self.phase = match op {
                    SwapOp::Swap => Phase::Exchange { a, b },
                    SwapOp::Compare => Phase::Restore { a, b },
                };
                Ok(Step::Highlight { a, b })
            }
            MoveRecord::Range {
                index,
                value,
                range,
            } => {
                if self.active_range.as_ref() == Some(&range) {
                    return self.write(index, value, store);
                }
                match self.active_range.take() {
                    Some(previous) => {
                        store.set_class(previous.indices(), ClassType::Normal)?;
                        self.phase = Phase::MarkRange {
                            range,
                            index,
                            value,
                        };
                        Ok(Step::ClearRange(previous))
                    }
                    None => self.mark_range(range, index, value, store),
                }
            }
        }
    }

    fn mark_range(
        &mut self,
        range: RangeId,
        index: usize,
        value: Key,
        store: &mut VisualStore,
    ) -> Result<Step, StoreError> {
        store.set_class(range.indices(), ClassType::Current)?;
        self.active_range = Some(range.clone());
        self.phase = Phase::Write { index, value };
        Ok(Step::MarkRange(range))
    }

    fn write(&mut self, index: usize, value: Key, store: &mut VisualStore) -> Result<Step, StoreError> {
        store.set_value(index, value)?;
        self.applied += 1;
        Ok(Step::Write { index, value })
    }
}
