//! Character-cell windows for Curslet
//!
//! Provides the window model used by the renderer: a grid of styled cells
//! with per-row damage tracking, so a refresh repaints only what changed.
//! Windows are owned by a registry that hands out stable ids.

pub mod cell;
pub mod damage;
pub mod registry;
pub mod window;

pub use cell::{Attributes, Cell, Color};
pub use damage::{Damage, DirtySpan};
pub use registry::{WindowId, WindowSet};
pub use window::Window;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("row range {start}+{count} exceeds window height {height}")]
    RowsOutOfRange { start: u16, count: u16, height: u16 },

    #[error("unknown window id: {0}")]
    UnknownWindow(WindowId),
}
