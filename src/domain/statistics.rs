use std::fmt;

/// Point-in-time population figures for an automaton.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub generation: u64,
    pub live: usize,
    pub dead: usize,
    pub live_percentage: f64,
}

impl Statistics {
    /// Derive dead count and percentage from the live count and grid area
    pub fn new(generation: u64, live: usize, area: usize) -> Self {
        Self {
            generation,
            live,
            dead: area - live,
            live_percentage: live_percentage(live, area),
        }
    }
}

/// `100 * live / area`, or 0.0 for an empty grid
pub fn live_percentage(live: usize, area: usize) -> f64 {
    if area == 0 {
        return 0.0;
    }
    live as f64 / area as f64 * 100.0
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "Live cells: {}", self.live)?;
        writeln!(f, "Dead cells: {}", self.dead)?;
        write!(f, "Live cell percentage: {}%", self.live_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_area_percentage() {
        assert_eq!(live_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_counts_add_up() {
        let stats = Statistics::new(7, 30, 100);
        assert_eq!(stats.dead, 70);
        assert_eq!(stats.live + stats.dead, 100);
        assert_eq!(stats.live_percentage, 30.0);
    }

    #[test]
    fn test_display_lines() {
        let text = Statistics::new(3, 1, 4).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Generation: 3",
                "Live cells: 1",
                "Dead cells: 3",
                "Live cell percentage: 25%",
            ]
        );
    }
}
