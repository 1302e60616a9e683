//! TUI pane rendering modules
//!
//! Each pane module exports a single `render_*` function that draws one
//! region of the screen from read-only data.
//!
//! # Pane Modules
//!
//! - [`navbar`]: The current algorithm, size and speed, dimmed while locked
//! - [`bars`]: The element sequence as a bar chart, colored by class
//! - [`status`]: Status bar with run state, progress and keybindings

pub mod bars;
pub mod navbar;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use navbar::render_navbar;
pub use status::{render_status_bar, StatusRenderData};
