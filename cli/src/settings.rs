use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sweeper_core::{CellCount, Coord, GameConfig};

/// Board settings as read from a TOML file, every key optional.
///
/// ```toml
/// rows = 16
/// cols = 30
/// mines = 99
/// seed = 42
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let GameConfig { rows, cols, mines } = GameConfig::default();
        Self {
            rows,
            cols,
            mines,
            seed: None,
        }
    }
}

/// Values given on the command line, which take precedence over the file.
#[derive(Copy, Clone, Debug, Default)]
pub struct Overrides {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            rows: overrides.rows.unwrap_or(self.rows),
            cols: overrides.cols.unwrap_or(self.cols),
            mines: overrides.mines.unwrap_or(self.mines),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn game_config(&self) -> sweeper_core::Result<GameConfig> {
        GameConfig::new(self.rows, self.cols, self.mines)
    }
}
