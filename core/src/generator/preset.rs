use super::*;

/// Generator that always yields the same mine coordinates, for tests and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl PresetMinefieldGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinefieldGenerator for PresetMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;

        let layout = MineLayout::from_mine_coords(config.side, &self.mines)?;
        if layout.mine_count() != config.mines {
            log::warn!(
                "Preset layout rejected, has {} distinct mines but {} were requested",
                layout.mine_count(),
                config.mines
            );
            return Err(GameError::LayoutMismatch);
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_places_exact_coordinates() {
        let config = GameConfig::new(3, 2).unwrap();
        let layout = PresetMinefieldGenerator::new([(0, 2), (2, 0)])
            .generate(config)
            .unwrap();

        assert_eq!(layout.game_config(), config);
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), vec![(0, 2), (2, 0)]);
    }

    #[test]
    fn preset_rejects_count_mismatch() {
        let config = GameConfig::new(3, 2).unwrap();

        assert_eq!(
            PresetMinefieldGenerator::new([(0, 0), (0, 0)]).generate(config),
            Err(GameError::LayoutMismatch)
        );
    }

    #[test]
    fn preset_rejects_invalid_config() {
        let config = GameConfig::new_unchecked(2, 4);

        assert_eq!(
            PresetMinefieldGenerator::new([(0, 0), (0, 1), (1, 0), (1, 1)]).generate(config),
            Err(GameError::InvalidConfiguration { side: 2, mines: 4 })
        );
    }
}
