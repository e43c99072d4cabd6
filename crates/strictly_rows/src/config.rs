//! New-game configuration and the board-size run-length table.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::player::Seat;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Run length needed to win, keyed by board size.
///
/// Sizes missing from this table are rejected when a game is configured.
pub const RUN_LENGTHS: [(usize, usize); 3] = [(3, 3), (5, 4), (7, 5)];

/// Looks up how many tokens in a row win on a `size` x `size` board.
///
/// # Errors
///
/// Returns [`ConfigErrorKind::UnsupportedBoardSize`] if `size` is not in
/// [`RUN_LENGTHS`].
#[track_caller]
#[instrument]
pub fn run_length_to_win(size: usize) -> Result<usize, ConfigError> {
    match RUN_LENGTHS.iter().find(|(board_size, _)| *board_size == size) {
        Some((_, run)) => Ok(*run),
        None => {
            warn!(size, "Board size has no run length");
            Err(ConfigError::new(ConfigErrorKind::UnsupportedBoardSize(size)))
        }
    }
}

/// Board sizes that can be played.
pub fn supported_sizes() -> impl Iterator<Item = usize> {
    RUN_LENGTHS.iter().map(|(size, _)| *size)
}

/// Settings for starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Seat that plays Cross and moves first.
    #[serde(default)]
    first_player: Seat,

    /// Name for seat one.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name for seat two.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Whether players may step back through the history mid-game.
    #[serde(default = "default_take_backs")]
    take_backs: bool,
}

fn default_board_size() -> usize {
    3
}

fn default_player_one() -> String {
    "Player One".to_string()
}

fn default_player_two() -> String {
    "Player Two".to_string()
}

fn default_take_backs() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            first_player: Seat::default(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            take_backs: default_take_backs(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;
        config.validate()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Checks that the board size is playable.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        run_length_to_win(self.board_size).map(|_| ())
    }

    /// Run length needed to win under this configuration.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn count_to_win(&self) -> Result<usize, ConfigError> {
        run_length_to_win(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_table() {
        assert_eq!(run_length_to_win(3).unwrap(), 3);
        assert_eq!(run_length_to_win(5).unwrap(), 4);
        assert_eq!(run_length_to_win(7).unwrap(), 5);
    }

    #[test]
    fn test_unsupported_sizes_rejected() {
        for size in [0, 1, 2, 4, 6, 8, 9] {
            let err = run_length_to_win(size).unwrap_err();
            assert_eq!(err.kind, ConfigErrorKind::UnsupportedBoardSize(size));
        }
    }

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(*config.take_backs());
    }

    #[test]
    fn test_parse_full_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            board_size = 7
            first_player = "two"
            player_one = "Ada"
            player_two = "Grace"
            take_backs = false
            "#,
        )
        .unwrap();
        assert_eq!(*config.board_size(), 7);
        assert_eq!(*config.first_player(), Seat::Two);
        assert_eq!(config.player_two(), "Grace");
        assert_eq!(config.count_to_win().unwrap(), 5);
    }

    #[test]
    fn test_invalid_size_in_toml() {
        let err = GameConfig::from_toml_str("board_size = 4").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::UnsupportedBoardSize(4));
    }

    #[test]
    fn test_setters() {
        let config = GameConfig::default()
            .with_board_size(5usize)
            .with_player_one("Ada")
            .with_take_backs(false);
        assert_eq!(*config.board_size(), 5);
        assert_eq!(config.player_one(), "Ada");
        assert!(!*config.take_backs());
    }
}
