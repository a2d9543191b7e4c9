//! Board engine for a single-player mine-clearing game.
//!
//! [`GameState`] owns a square board of [`Cell`]s whose mine layout and adjacency
//! hints are fixed at generation time. Frontends drive it with [`GameState::reveal`]
//! and decide round termination from the returned [`RevealOutcome`] and
//! [`GameState::is_complete`].

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod layout;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub side: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIDE: Coord = 10;
    pub const DEFAULT_MINES: CellCount = 20;

    pub const fn new_unchecked(side: Coord, mines: CellCount) -> Self {
        Self { side, mines }
    }

    /// Requires a non-empty board with at least one mine and at least one safe cell.
    pub fn new(side: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(side, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.side == 0 || self.mines == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                side: self.side,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.side, self.side)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIDE, Self::DEFAULT_MINES)
    }
}

/// Result of revealing a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed(u8),
    Detonated,
}

impl RevealOutcome {
    /// Whether a safe cell was revealed, so a frontend should refresh its score display.
    pub const fn has_update(self) -> bool {
        match self {
            Self::Revealed(_) => true,
            Self::Detonated => false,
        }
    }

    pub const fn adjacent_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            Self::Detonated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_ten_by_ten_with_twenty_mines() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (10, 10));
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cells(), 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_degenerate_mine_counts() {
        let err = GameError::InvalidConfiguration { side: 3, mines: 0 };
        assert_eq!(GameConfig::new(3, 0), Err(err));

        let err = GameError::InvalidConfiguration { side: 3, mines: 9 };
        assert_eq!(GameConfig::new(3, 9), Err(err));

        let err = GameError::InvalidConfiguration { side: 0, mines: 1 };
        assert_eq!(GameConfig::new(0, 1), Err(err));

        assert!(GameConfig::new(3, 8).is_ok());
        assert!(GameConfig::new(2, 1).is_ok());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config: GameConfig = serde_json::from_str(r#"{"side":8,"mines":10}"#).unwrap();

        assert_eq!(config, GameConfig::new_unchecked(8, 10));
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"side":8,"mines":10}"#
        );
    }

    #[test]
    fn detonation_carries_no_count() {
        assert!(!RevealOutcome::Detonated.has_update());
        assert_eq!(RevealOutcome::Detonated.adjacent_count(), None);
        assert_eq!(RevealOutcome::Revealed(3).adjacent_count(), Some(3));
    }
}
