use core::fmt;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Fully generated board: every cell is either a mine or carries its adjacency hint.
///
/// Boards are never edited after construction, a new game builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let side = layout.side();
        let cells = Array2::from_shape_fn((side, side).to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if layout.contains_mine(coords) {
                Cell::Mine
            } else {
                Cell::AdjacentCount(layout.adjacent_mine_count(coords))
            }
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
        }
    }

    pub fn side(&self) -> Coord {
        Coord::try_from(self.cells.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn size(&self) -> Coord2 {
        (self.side(), self.side())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        mult(self.side(), self.side()).saturating_sub(self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One line per row, `*` for mines and the adjacency count otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match cell {
                    Cell::Mine => f.write_str("*")?,
                    Cell::AdjacentCount(count) => write!(f, "{count}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
