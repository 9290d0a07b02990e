use rand::Rng;

use super::{Cell, Grid, Statistics, statistics};

/// Automaton owns the Life grid plus the per-cell immortality flags
/// and advances them one generation per `update`.
///
/// Coordinates are signed so that unmapped pointer positions can be
/// passed straight through; anything outside the grid is a no-op for
/// mutations and reads as `false` for queries.
pub struct Automaton {
    current: Grid,
    scratch: Grid,
    immortal: Vec<bool>,
    generation: u64,
}

impl Automaton {
    /// Create an automaton with every cell dead and mortal
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            current: Grid::new(width, height),
            scratch: Grid::new(width, height),
            immortal: vec![false; width * height],
            generation: 0,
        }
    }

    pub const fn grid_size(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.current
    }

    /// Fill with a fresh 50/50 random population and drop all immortality
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        self.current.fill_with(|| Cell::from_alive(rng.random_bool(0.5)));
        self.immortal.fill(false);
    }

    /// Kill every cell and drop all immortality
    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
        self.immortal.fill(false);
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        self.current.toggle(x, y);
    }

    /// Flip immortality, only for a cell that is currently alive
    pub fn toggle_immortal(&mut self, x: i32, y: i32) {
        if !self.is_cell_alive(x, y) {
            return;
        }
        if let Some(idx) = self.current.index(x, y) {
            self.immortal[idx] = !self.immortal[idx];
        }
    }

    pub fn is_cell_alive(&self, x: i32, y: i32) -> bool {
        self.current.get(x, y).is_some_and(Cell::is_alive)
    }

    pub fn is_immortal(&self, x: i32, y: i32) -> bool {
        self.current
            .index(x, y)
            .is_some_and(|idx| self.immortal[idx])
    }

    /// Advance one generation.
    ///
    /// Next states are computed from a frozen copy of the current
    /// generation into the scratch buffer, then the buffers swap.
    /// Immortality flags carry over untouched.
    pub fn update(&mut self) {
        self.current.evolve_into(&mut self.scratch, &self.immortal);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.scratch.fill(Cell::Dead);
        self.generation += 1;
    }

    pub fn live_cell_count(&self) -> usize {
        self.current.count_alive()
    }

    pub fn dead_cell_count(&self) -> usize {
        self.current.area() - self.live_cell_count()
    }

    pub fn live_cell_percentage(&self) -> f64 {
        statistics::live_percentage(self.live_cell_count(), self.current.area())
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::new(self.generation, self.live_cell_count(), self.current.area())
    }

    pub const fn generation_count(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation_count(&mut self) {
        self.generation = 0;
    }
}
