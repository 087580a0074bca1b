//! Minimal demo: draw into a window, then flush only the damage

use std::io;

use curslet_render::{Painter, RenderError};
use curslet_window::{Color, Window};

fn main() -> Result<(), RenderError> {
    let mut win = Window::new(40, 6);
    win.set_origin(0, 0);
    win.clear();

    win.put_str(2, 1, "curslet");
    win.set_fg_color(Color::Indexed(2));
    win.put_str(2, 2, "only dirty spans reach the terminal");
    win.reset_attrs();
    win.move_to(0, 5);

    let mut painter = Painter::new(io::stdout());
    painter.refresh(&mut win)?;
    println!();
    Ok(())
}
