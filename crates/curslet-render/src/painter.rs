//! Painter: flushes pending window damage to a terminal writer

use std::io::Write;

use crossterm::{cursor, queue};
use tracing::trace;

use curslet_window::{Window, WindowId, WindowSet};

use crate::ansi::render_span;
use crate::RenderError;

/// Writes dirty spans to a terminal, clearing the damage it consumes
///
/// Works against any writer, so tests can paint into a `Vec<u8>` and
/// assert on the emitted bytes.
pub struct Painter<W: Write> {
    out: W,
}

impl<W: Write> Painter<W> {
    /// Create a painter over the given writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Repaint every dirty span of the window and mark those rows clean
    ///
    /// Rows without damage are not written at all. Afterwards the
    /// terminal cursor is parked at the window's cursor position and the
    /// writer is flushed.
    pub fn refresh(&mut self, win: &mut Window) -> Result<(), RenderError> {
        trace!(
            "refreshing {}x{} window at {:?}",
            win.width(),
            win.height(),
            win.origin()
        );

        let (origin_x, origin_y) = win.origin();
        for row in 0..win.height() {
            if let Some(span) = win.damage().row_span(row) {
                let rendered = render_span(win, row, span);
                queue!(
                    self.out,
                    cursor::MoveTo(
                        origin_x.saturating_add(span.first()),
                        origin_y.saturating_add(row)
                    )
                )?;
                write!(self.out, "{}", rendered)?;
                win.damage_mut().clear_row(row);
            }
        }

        // Park the terminal cursor where the window cursor is
        let (cursor_x, cursor_y) = win.cursor_position();
        queue!(
            self.out,
            cursor::MoveTo(
                origin_x.saturating_add(cursor_x),
                origin_y.saturating_add(cursor_y)
            )
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Mark the whole window dirty, then repaint it
    ///
    /// The recovery path for when the screen contents can no longer be
    /// trusted, for example after another program wrote over them.
    pub fn refresh_full(&mut self, win: &mut Window) -> Result<(), RenderError> {
        win.damage_mut().mark_all();
        self.refresh(win)
    }

    /// Refresh a window addressed by id
    pub fn refresh_window(
        &mut self,
        set: &mut WindowSet,
        id: WindowId,
    ) -> Result<(), RenderError> {
        let win = set.window_mut(id)?;
        self.refresh(win)
    }

    /// Consume the painter and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
