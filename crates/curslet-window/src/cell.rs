//! Cell types for window content
//!
//! A window is a 2D grid of styled cells; these are the value types stored
//! in the grid and consumed by the renderer.

/// A single character cell in a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character in this cell
    pub c: char,

    /// Foreground color (ANSI 256-color palette or RGB)
    pub fg: Color,

    /// Background color
    pub bg: Color,

    /// Text attributes
    pub attrs: Attributes,
}

impl Cell {
    /// A cell carrying `c` with the given style
    pub fn styled(c: char, fg: Color, bg: Color, attrs: Attributes) -> Self {
        Self { c, fg, bg, attrs }
    }

    /// True if this cell renders identically to a default blank cell
    pub fn is_blank(&self) -> bool {
        *self == Cell::default()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            c: ' ',
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attributes::default(),
        }
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Default terminal color
    Default,

    /// ANSI 256-color palette index
    Indexed(u8),

    /// RGB color
    Rgb(u8, u8, u8),
}

/// Text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl Attributes {
    /// True if no attribute is set
    pub fn is_plain(&self) -> bool {
        *self == Attributes::default()
    }
}
