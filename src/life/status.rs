use serde::{Serialize, Serializer};
use std::fmt;

/// How a cell fares under the Life rule given its live-neighbor count.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellStatus {
    /// Alive, fewer than 2 neighbors.
    Lonely,
    /// Alive, 2 or 3 neighbors.
    Comfortable,
    /// Alive, more than 3 neighbors.
    Overcrowded,
    /// Dead, exactly 3 neighbors.
    Reborn,
    /// Dead, any other count.
    Barren,
}

impl CellStatus {
    pub fn classify(alive: bool, neighbors: u8) -> Self {
        match (alive, neighbors) {
            (true, 0..=1) => Self::Lonely,
            (true, 2 | 3) => Self::Comfortable,
            (true, _) => Self::Overcrowded,
            (false, 3) => Self::Reborn,
            (false, _) => Self::Barren,
        }
    }

    /// Whether the cell is alive in the next generation.
    pub fn survives(self) -> bool {
        matches!(self, Self::Comfortable | Self::Reborn)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lonely => "Lonely",
            Self::Comfortable => "Comfortable",
            Self::Overcrowded => "Overcrowded",
            Self::Reborn => "Reborn",
            Self::Barren => "Barren",
        }
    }

    /// Hover text shown by the UI.
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Lonely => "Lonely :(",
            Self::Comfortable => "Comfortable :)",
            Self::Overcrowded => "Overcrowded :/",
            Self::Reborn => "REBORN! :D",
            Self::Barren => "Barren...",
        }
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CellStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::CellStatus;

    #[test]
    fn label_table() {
        let alive = [
            "Lonely",
            "Lonely",
            "Comfortable",
            "Comfortable",
            "Overcrowded",
            "Overcrowded",
            "Overcrowded",
            "Overcrowded",
            "Overcrowded",
        ];
        let dead = [
            "Barren", "Barren", "Barren", "Reborn", "Barren", "Barren", "Barren", "Barren",
            "Barren",
        ];
        for n in 0..=8u8 {
            assert_eq!(CellStatus::classify(true, n).label(), alive[n as usize], "n={}", n);
            assert_eq!(CellStatus::classify(false, n).label(), dead[n as usize], "n={}", n);
        }
    }

    #[test]
    fn survival_follows_b3_s23() {
        for n in 0..=8u8 {
            assert_eq!(CellStatus::classify(true, n).survives(), n == 2 || n == 3);
            assert_eq!(CellStatus::classify(false, n).survives(), n == 3);
        }
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&CellStatus::Reborn).unwrap();
        assert_eq!(json, "\"Reborn\"");
    }
}
