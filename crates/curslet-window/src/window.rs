//! Window state: a cell grid with a cursor, a current style, and an
//! attached damage map
//!
//! Write operations record the exact columns they change, so a refresh
//! repaints only those spans.

use tracing::debug;

use crate::cell::{Attributes, Cell, Color};
use crate::damage::Damage;

/// A rectangular grid of cells placed at an origin on the screen
#[derive(Debug, Clone)]
pub struct Window {
    /// Width in columns
    width: u16,

    /// Height in rows
    height: u16,

    /// Screen position of the top-left cell (column, row)
    origin: (u16, u16),

    /// Cells in row-major order
    cells: Vec<Cell>,

    /// Cursor X position (0-based)
    cursor_x: u16,

    /// Cursor Y position (0-based)
    cursor_y: u16,

    /// Current text attributes for new characters
    current_attrs: Attributes,

    /// Current foreground color
    current_fg: Color,

    /// Current background color
    current_bg: Color,

    /// Pending damage, one span per row
    damage: Damage,
}

impl Window {
    /// Create a window of the given size at screen origin (0, 0)
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];

        Self {
            width,
            height,
            origin: (0, 0),
            cells,
            cursor_x: 0,
            cursor_y: 0,
            current_attrs: Attributes::default(),
            current_fg: Color::Default,
            current_bg: Color::Default,
            damage: Damage::new(width, height),
        }
    }

    /// Get window width
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get window height
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Screen position of the top-left cell
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Place the window's top-left cell on the screen
    pub fn set_origin(&mut self, x: u16, y: u16) {
        self.origin = (x, y);
    }

    /// Get cursor position
    pub fn cursor_position(&self) -> (u16, u16) {
        (self.cursor_x, self.cursor_y)
    }

    /// Move the cursor, clamping to the window bounds
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x.min(self.width.saturating_sub(1));
        self.cursor_y = y.min(self.height.saturating_sub(1));
    }

    /// Get cell at position
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.cells.get(index)
    }

    /// Get mutable cell at position
    ///
    /// Bypasses damage tracking; callers that change the cell are expected
    /// to record the column through [`Damage::mark_span`].
    pub fn cell_at_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.cells.get_mut(index)
    }

    /// Write a character at the cursor and advance it
    ///
    /// The cursor wraps at the right edge and pins at the bottom-right
    /// corner; this library does not scroll.
    pub fn write_char(&mut self, c: char) {
        // Store current style before borrowing
        let fg = self.current_fg;
        let bg = self.current_bg;
        let attrs = self.current_attrs;

        let (x, y) = (self.cursor_x, self.cursor_y);
        if let Some(cell) = self.cell_at_mut(x, y) {
            *cell = Cell::styled(c, fg, bg, attrs);
            self.damage.mark_span(y, x, x);
        } else {
            return;
        }

        // Advance cursor
        self.cursor_x += 1;
        if self.cursor_x >= self.width {
            self.cursor_x = 0;
            self.cursor_y += 1;
            if self.cursor_y >= self.height {
                self.cursor_y = self.height - 1;
                self.cursor_x = self.width - 1;
            }
        }
    }

    /// Write a string at the cursor
    ///
    /// `\n` moves to the start of the next row and `\r` to the start of
    /// the current one; everything else is written as cells.
    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\n' => self.newline(),
                '\r' => self.carriage_return(),
                _ => self.write_char(c),
            }
        }
    }

    /// Move the cursor and write a string there
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        self.move_to(x, y);
        self.write_str(s);
    }

    /// Move cursor to the start of the next line, stopping at the last row
    pub fn newline(&mut self) {
        self.cursor_x = 0;
        if self.cursor_y + 1 < self.height {
            self.cursor_y += 1;
        }
    }

    /// Carriage return (move to start of line)
    pub fn carriage_return(&mut self) {
        self.cursor_x = 0;
    }

    /// Blank the whole window and home the cursor
    pub fn clear(&mut self) {
        debug!("clearing {}x{} window", self.width, self.height);

        self.cells.fill(Cell::default());
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.damage.mark_all();
    }

    /// Blank from the cursor to the end of its row
    pub fn clear_to_eol(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let row_start = (self.cursor_y as usize) * (self.width as usize);
        for x in (self.cursor_x as usize)..(self.width as usize) {
            self.cells[row_start + x] = Cell::default();
        }
        self.damage
            .mark_span(self.cursor_y, self.cursor_x, self.width - 1);
    }

    /// Get current text attributes
    pub fn current_attrs(&self) -> Attributes {
        self.current_attrs
    }

    /// Set current text attributes
    pub fn set_attrs(&mut self, attrs: Attributes) {
        self.current_attrs = attrs;
    }

    /// Set current foreground color
    pub fn set_fg_color(&mut self, color: Color) {
        self.current_fg = color;
    }

    /// Set current background color
    pub fn set_bg_color(&mut self, color: Color) {
        self.current_bg = color;
    }

    /// Reset text attributes and colors
    pub fn reset_attrs(&mut self) {
        self.current_attrs = Attributes::default();
        self.current_fg = Color::Default;
        self.current_bg = Color::Default;
    }

    /// Resize the window, keeping the overlapping content
    ///
    /// The damage map is rebuilt for the new size and everything is
    /// marked dirty, since the terminal must repaint the whole window
    /// anyway.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        debug!(
            "resizing window from {}x{} to {}x{}",
            self.width, self.height, new_width, new_height
        );

        let old_width = self.width;
        let old_height = self.height;

        // Create new buffer
        let mut new_cells = vec![Cell::default(); (new_width as usize) * (new_height as usize)];

        // Copy existing content
        let copy_width = old_width.min(new_width) as usize;
        let copy_height = old_height.min(new_height) as usize;

        for y in 0..copy_height {
            let old_start = y * (old_width as usize);
            let new_start = y * (new_width as usize);

            new_cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;

        self.damage = Damage::new(new_width, new_height);
        self.damage.mark_all();

        // Adjust cursor position
        self.cursor_x = self.cursor_x.min(new_width.saturating_sub(1));
        self.cursor_y = self.cursor_y.min(new_height.saturating_sub(1));
    }

    /// Pending damage for this window
    pub fn damage(&self) -> &Damage {
        &self.damage
    }

    /// Mutable access to the damage map
    pub fn damage_mut(&mut self) -> &mut Damage {
        &mut self.damage
    }
}
