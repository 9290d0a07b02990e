/// Cell is the life state of one grid position.
/// Immortality is tracked separately by the automaton.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip between dead and alive
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under B3/S23, with immortal cells pinned alive:
    /// 1. Immortal cell always survives
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Dead cell with exactly 3 neighbors becomes alive
    /// 4. Everything else dies or stays dead
    pub const fn evolve(self, neighbors: u8, immortal: bool) -> Self {
        match (self, neighbors, immortal) {
            (_, _, true) => Cell::Alive,
            (Cell::Alive, 2 | 3, _) => Cell::Alive,
            (Cell::Dead, 3, _) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0, false), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1, false), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2, false), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3, false), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.evolve(4, false), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8, false), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.evolve(3, false), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2, false), Cell::Dead);
    }

    #[test]
    fn test_immortal_ignores_neighbors() {
        for neighbors in 0..=8 {
            assert_eq!(Cell::Alive.evolve(neighbors, true), Cell::Alive);
        }
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Dead.toggle().toggle(), Cell::Dead);
    }
}
