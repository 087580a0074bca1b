//! ANSI text rendering for dirty spans
//!
//! Converts the cells of one dirty span to a string with SGR escape
//! codes, emitting codes only where the style actually changes.

use curslet_window::{Attributes, Cell, Color, DirtySpan, Window};

/// Render the cells of `span` on `row` to a string with ANSI escape codes
///
/// The output assumes the terminal starts in the reset state and always
/// leaves it there.
pub fn render_span(win: &Window, row: u16, span: DirtySpan) -> String {
    let mut output = String::new();
    let mut last_fg = Color::Default;
    let mut last_bg = Color::Default;
    let mut last_attrs = Attributes::default();

    for x in span.first()..=span.last() {
        if let Some(cell) = win.cell_at(x, row) {
            // Check if we need to update attributes
            if cell.fg != last_fg || cell.bg != last_bg || cell.attrs != last_attrs {
                output.push_str(&cell_to_ansi(cell));
                last_fg = cell.fg;
                last_bg = cell.bg;
                last_attrs = cell.attrs;
            }

            output.push(cell.c);
        }
    }

    // Reset at end of span
    output.push_str("\x1b[0m");
    output
}

/// Convert cell attributes to ANSI escape sequence
fn cell_to_ansi(cell: &Cell) -> String {
    let mut codes: Vec<u16> = Vec::new();

    // Reset first
    codes.push(0);

    // Text attributes
    if cell.attrs.bold {
        codes.push(1);
    }
    if cell.attrs.dim {
        codes.push(2);
    }
    if cell.attrs.italic {
        codes.push(3);
    }
    if cell.attrs.underline {
        codes.push(4);
    }
    if cell.attrs.blink {
        codes.push(5);
    }
    if cell.attrs.reverse {
        codes.push(7);
    }
    if cell.attrs.hidden {
        codes.push(8);
    }
    if cell.attrs.strikethrough {
        codes.push(9);
    }

    push_color_codes(&mut codes, cell.fg, 30, 90, 38);
    push_color_codes(&mut codes, cell.bg, 40, 100, 48);

    // Build escape sequence
    if codes.len() == 1 {
        "\x1b[0m".to_string()
    } else {
        format!(
            "\x1b[{}m",
            codes
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(";")
        )
    }
}

/// Append the SGR codes for one color slot
///
/// `base` and `bright` are the classic 8-color bases, `ext` the 38/48
/// prefix for palette and RGB forms.
fn push_color_codes(codes: &mut Vec<u16>, color: Color, base: u16, bright: u16, ext: u16) {
    match color {
        Color::Default => {}
        Color::Indexed(n) if n < 8 => codes.push(base + n as u16),
        Color::Indexed(n) if n < 16 => codes.push(bright + (n - 8) as u16),
        Color::Indexed(n) => codes.extend([ext, 5, n as u16]),
        Color::Rgb(r, g, b) => codes.extend([ext, 2, r as u16, g as u16, b as u16]),
    }
}
