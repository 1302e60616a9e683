//! Error types
//!
//! Each failure domain gets its own enum:
//!
//! - [`ConfigError`]: a setting outside its enumerated set, rejected before it
//!   reaches a compiler or the player
//! - [`StoreError`]: a store mutation addressed outside the sequence
//! - [`MoveError`]: a compiled move sequence that breaks its own invariants
//! - [`RunError`]: everything the run controller can refuse or abort on
//!
//! Store and move errors are programming errors. They are surfaced as soon as
//! they are detected and never recovered from, since the final sorted order
//! depends on every move being applied exactly.

use crate::moves::MoveFamily;
use thiserror::Error;

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported size {0}; expected one of 10, 20, ..., 100")]
    InvalidSize(usize),

    #[error("unsupported speed {0}; expected one of 0.5, 0.75, 1, 2, 4")]
    InvalidSpeed(f64),

    #[error("unknown algorithm number {0}; expected 1 to 5")]
    InvalidAlgorithm(u8),
}

/// Visual state store mutation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Compiled move sequence violates an invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move {position} references index {index}, sequence length is {len}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error("move {position} is {found:?}-family in a {expected:?}-family sequence")]
    MixedFamilies {
        position: usize,
        expected: MoveFamily,
        found: MoveFamily,
    },
}

/// Run controller failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("a run is already in progress")]
    Busy,

    #[error("no run in progress")]
    NotRunning,

    #[error("compiler produced invalid moves: {0}")]
    InvalidMoves(#[from] MoveError),

    #[error("store mutation failed: {0}")]
    Store(#[from] StoreError),
}
