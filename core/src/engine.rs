use serde::{Deserialize, Serialize};

use crate::*;

/// A single round: the generated [`Board`] and the running score.
///
/// The engine does not remember which cells were revealed. Frontends keep their own
/// per-cell "opened" state and must call [`GameState::reveal`] at most once per cell,
/// otherwise the score counts the same cell again. It also never locks itself after a
/// detonation, ending the round is up to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot", into = "GameSnapshot")]
pub struct GameState {
    config: GameConfig,
    board: Board,
    score: CellCount,
}

impl GameState {
    /// Starts a randomly seeded game on a `side_length` x `side_length` board.
    pub fn new_game(side_length: Coord, mine_count: CellCount) -> Result<Self> {
        let config = GameConfig::new(side_length, mine_count)?;
        Self::with_generator(config, RandomMinefieldGenerator::from_entropy())
    }

    /// Starts a game whose mine layout is fully determined by `seed`.
    pub fn new_seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let board = Self::generate_board(config, generator)?;
        Ok(Self {
            config,
            board,
            score: 0,
        })
    }

    /// Replaces the board wholesale and zeroes the score. On error the current game is
    /// left untouched.
    pub fn reset(&mut self, generator: impl MinefieldGenerator) -> Result<()> {
        self.board = Self::generate_board(self.config, generator)?;
        self.score = 0;
        Ok(())
    }

    pub fn reset_random(&mut self) -> Result<()> {
        self.reset(RandomMinefieldGenerator::from_entropy())
    }

    fn generate_board(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Board> {
        config.validate()?;
        let layout = generator.generate(config)?;
        if layout.game_config() != config {
            return Err(GameError::LayoutMismatch);
        }

        let board = Board::from_layout(&layout);
        log::debug!("New board, {} mines, score 0:\n{}", board.mine_count(), board);
        Ok(board)
    }

    /// Reveals the cell at `coords`.
    ///
    /// The cell must not have been revealed before in this game; this is not checked.
    /// A mine leaves the score unchanged and yields [`RevealOutcome::Detonated`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        Ok(match self.board[coords] {
            Cell::Mine => {
                log::debug!("Detonated mine at {:?}", coords);
                RevealOutcome::Detonated
            }
            Cell::AdjacentCount(count) => {
                // repeated reveals must not push the score past the safe cell count
                self.score = (self.score + 1).min(self.board.safe_cell_count());
                log::debug!("Revealed {:?} ({}), score {}", coords, count, self.score);
                RevealOutcome::Revealed(count)
            }
        })
    }

    /// True once every safe cell has been revealed.
    pub fn is_complete(&self) -> bool {
        self.score == self.board.safe_cell_count()
    }

    /// Precomputed hint at `coords`, `None` for a mine.
    pub fn adjacent_count(&self, coords: Coord2) -> Result<Option<u8>> {
        Ok(self.cell_at(coords)?.adjacent_count())
    }

    pub fn current_score(&self) -> CellCount {
        self.score
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn side_length(&self) -> Coord {
        self.config.side
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.board.safe_cell_count()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.board.validate_coords(coords)?;
        Ok(self.board[coords])
    }

    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell_at(coords)?.is_mine())
    }
}

/// Serialized form of a [`GameState`]. Hints are not stored, the board is rebuilt from
/// the mine positions and checked like any freshly generated one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub mines: Vec<Coord2>,
    pub score: CellCount,
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self {
            config: state.config,
            mines: state.board.iter_mines().collect(),
            score: state.score,
        }
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self> {
        let mut state =
            Self::with_generator(snapshot.config, PresetMinefieldGenerator::new(snapshot.mines))?;

        let safe_cells = state.safe_cell_count();
        if snapshot.score > safe_cells {
            return Err(GameError::ScoreOutOfRange {
                score: snapshot.score,
                safe_cells,
            });
        }
        state.score = snapshot.score;
        Ok(state)
    }
}
