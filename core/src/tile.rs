use serde::{Deserialize, Serialize};

/// Content of a single board cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    AdjacentCount(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::AdjacentCount(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::AdjacentCount(0)
    }
}

/// Severity class of an adjacency hint, for frontends picking a colour or label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintTone {
    Neutral,
    Accent1,
    Accent2,
    Accent3,
    Warning,
}

impl HintTone {
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Neutral,
            1 => Self::Accent1,
            2 => Self::Accent2,
            3 => Self::Accent3,
            _ => Self::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_saturates_at_warning() {
        assert_eq!(HintTone::from_count(0), HintTone::Neutral);
        assert_eq!(HintTone::from_count(3), HintTone::Accent3);
        assert_eq!(HintTone::from_count(4), HintTone::Warning);
        assert_eq!(HintTone::from_count(8), HintTone::Warning);
    }

    #[test]
    fn mine_has_no_count() {
        assert_eq!(Cell::Mine.adjacent_count(), None);
        assert_eq!(Cell::AdjacentCount(2).adjacent_count(), Some(2));
    }
}
