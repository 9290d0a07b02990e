use super::Cell;

/// Grid is a fixed-size 2D field of cells.
/// Edges are hard boundaries: anything outside reads as dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Convert 2D coordinates to a 1D index, `None` outside the grid
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position; returns false when out of bounds
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = self.cells[idx].toggle();
                true
            }
            None => false,
        }
    }

    /// Count live Moore neighbors; positions past the edge count as dead
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| self.get(x + dx, y + dy))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Write the next generation of `self` into `next`.
    /// `immortal` is indexed like the grid's cells.
    pub fn evolve_into(&self, next: &mut Grid, immortal: &[bool]) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        debug_assert_eq!(immortal.len(), self.cells.len());

        for (idx, (x, y, cell)) in self.iter_cells().enumerate() {
            let neighbors = self.count_live_neighbors(x, y);
            next.cells[idx] = cell.evolve(neighbors, immortal[idx]);
        }
    }

    /// Set every cell to the same state
    pub fn fill(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    /// Assign each cell from a generator, row-major order
    pub fn fill_with(&mut self, mut generate: impl FnMut() -> Cell) {
        self.cells.iter_mut().for_each(|c| *c = generate());
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx % width) as i32, (idx / width) as i32, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.dimensions(), (10, 20));
        assert_eq!(grid.area(), 200);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(4, 3);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(3, 2), Some(Cell::Dead));

        assert!(!grid.toggle(4, 0));
        grid.set(-1, -1, Cell::Alive);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, Cell::Alive);
        grid.set(4, 0, Cell::Alive);
        grid.set(0, 4, Cell::Alive);

        // A torus would see all three from the corner
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        assert_eq!(grid.count_live_neighbors(3, 3), 1);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let mut grid = Grid::new(3, 3);
        grid.fill(Cell::Alive);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(1, 0), 5);
    }

    #[test]
    fn test_iter_cells_positions() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, Cell::Alive);
        let alive: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(2, 1)]);
    }

    #[test]
    fn test_blinker_evolution() {
        let mut grid = Grid::new(5, 5);
        grid.set(1, 2, Cell::Alive);
        grid.set(2, 2, Cell::Alive);
        grid.set(3, 2, Cell::Alive);

        let mortal = vec![false; grid.area()];
        let mut next = Grid::new(5, 5);
        grid.evolve_into(&mut next, &mortal);

        assert_eq!(next.get(2, 1), Some(Cell::Alive));
        assert_eq!(next.get(2, 2), Some(Cell::Alive));
        assert_eq!(next.get(2, 3), Some(Cell::Alive));
        assert_eq!(next.get(1, 2), Some(Cell::Dead));
        assert_eq!(next.count_alive(), 3);
    }
}
