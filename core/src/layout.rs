use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// Mine positions on a square board, before adjacency hints are computed.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(side: Coord) -> Self {
        Self {
            mine_mask: Array2::default((side, side).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Duplicated coordinates collapse into a single mine.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(side);

        for &coords in mine_coords {
            let coords = layout.validate_coords(coords)?;
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Placing a mine twice on the same cell is a no-op.
    pub fn place_mine(&mut self, coords: Coord2) {
        if !self[coords] {
            self[coords] = true;
            self.mine_count += 1;
        }
    }

    pub fn side(&self) -> Coord {
        Coord::try_from(self.mine_mask.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.side(), self.mine_count)
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours, always fits
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}
