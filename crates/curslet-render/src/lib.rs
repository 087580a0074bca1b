//! Damage-driven terminal rendering for Curslet
//!
//! Repaints only the column spans a window reports dirty and marks each
//! row clean once it has been painted.

pub mod ansi;
pub mod painter;

pub use ansi::render_span;
pub use painter::Painter;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(#[from] curslet_window::WindowError),
}
