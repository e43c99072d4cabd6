//! Error types for moves, navigation, and configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The target lies outside the board.
    #[display("Cell ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a token.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// Take-backs are disabled and the cursor is not on the latest snapshot.
    #[display("Take-backs are disabled; return to the latest position to move")]
    TakeBacksDisabled,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when moving the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NavigationError {
    /// Already at the first snapshot.
    #[display("Already at the start of the game")]
    AtStart,

    /// Already at the most recent snapshot.
    #[display("Already at the latest position")]
    AtLatest,

    /// Navigation is locked while a game without take-backs is in progress.
    #[display("Navigation is locked until the game is over")]
    Locked,
}

impl std::error::Error for NavigationError {}

/// What went wrong while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// No run length is defined for this board size.
    #[display("Unsupported board size {} (supported: 3, 5, 7)", _0)]
    UnsupportedBoardSize(usize),

    /// The configuration file could not be read.
    #[display("Failed to read config file: {}", _0)]
    Read(String),

    /// The configuration text is not valid TOML for a game config.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
