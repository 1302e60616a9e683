//! # Introduction
//!
//! SORTTY compiles a sorting algorithm's run over a random sequence into a
//! list of replayable moves, then plays those moves back against a visual
//! state at a controllable pace.  The visual state is drawn as a bar chart
//! through a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Generator → Elements → Compiler → Moves → Player → Store → TUI
//! ```
//!
//! 1. [`generator`] — produces the random starting sequence.
//! 2. [`compiler`] — runs bubble, selection, insertion, merge or quick sort on
//!    a private copy of the keys and records every step as a
//!    [`moves::MoveRecord`].
//! 3. [`playback`] — a step machine that applies one store mutation per step.
//! 4. [`store`] — the [`store::VisualStore`] of [`model::Element`]s the renderer reads.
//! 5. [`controller`] — the idle/running state machine that locks
//!    configuration during a run and paces playback with a [`pacing::Pacer`].
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Move families
//!
//! In-place comparison sorts emit swap-family records (`compare` / `swap`
//! between two positions).  Divide-and-conquer sorts emit range-family
//! records: single-position writes tagged with the window being merged or
//! partitioned.

pub mod compiler;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod model;
pub mod moves;
pub mod pacing;
pub mod playback;
pub mod store;
pub mod ui;
