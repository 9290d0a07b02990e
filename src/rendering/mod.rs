use macroquad::prelude::*;

use crate::application::{CellColor, Viewport};
use crate::domain::Automaton;

/// Fill for immortal cells, independent of the chosen palette color
pub const IMMORTAL_COLOR: Color = WHITE;

pub fn cell_color(color: CellColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgba(r, g, b, 255)
}

/// Draw every live cell as a rectangle; dead cells show the background
pub fn draw_automaton(automaton: &Automaton, viewport: &Viewport, color: CellColor) {
    let base = cell_color(color);
    let extent = viewport.cell_extent();

    automaton
        .grid()
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            let (screen_x, screen_y) = viewport.grid_to_screen(x, y);
            let fill = if automaton.is_immortal(x, y) {
                IMMORTAL_COLOR
            } else {
                base
            };
            draw_rectangle(screen_x, screen_y, extent, extent, fill);
        });
}
