/// Base colors for ordinary live cells, selectable with keys 1-5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellColor {
    #[default]
    Green,
    Red,
    Blue,
    Yellow,
    Cyan,
}

impl CellColor {
    pub fn all() -> [CellColor; 5] {
        [
            CellColor::Green,
            CellColor::Red,
            CellColor::Blue,
            CellColor::Yellow,
            CellColor::Cyan,
        ]
    }

    /// Look up a color by its 1-based menu number
    pub fn from_choice(choice: u8) -> Option<Self> {
        let idx = usize::from(choice).checked_sub(1)?;
        Self::all().get(idx).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellColor::Green => "Green",
            CellColor::Red => "Red",
            CellColor::Blue => "Blue",
            CellColor::Yellow => "Yellow",
            CellColor::Cyan => "Cyan",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            CellColor::Green => (0, 255, 0),
            CellColor::Red => (255, 0, 0),
            CellColor::Blue => (0, 0, 255),
            CellColor::Yellow => (255, 255, 0),
            CellColor::Cyan => (0, 255, 255),
        }
    }
}
