/// Viewport maps between window pixels and grid cells.
/// The window is sized to the grid, so there is no pan or zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
}

impl Viewport {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    /// Convert screen coordinates to grid coordinates.
    /// Pixels left of or above the window map to negative cells.
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let grid_x = (screen_x / self.cell_size).floor() as i32;
        let grid_y = (screen_y / self.cell_size).floor() as i32;
        (grid_x, grid_y)
    }

    /// Top-left pixel of a grid cell
    pub fn grid_to_screen(&self, grid_x: i32, grid_y: i32) -> (f32, f32) {
        (grid_x as f32 * self.cell_size, grid_y as f32 * self.cell_size)
    }

    /// Side length of a drawn cell, leaving a 1px gap to its neighbors
    pub fn cell_extent(&self) -> f32 {
        (self.cell_size - 1.0).max(1.0)
    }
}
