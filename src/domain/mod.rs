mod automaton;
mod cell;
mod grid;
mod statistics;

pub use automaton::Automaton;
pub use cell::Cell;
pub use grid::Grid;
pub use statistics::Statistics;
