//! Strictly Rows - N-in-a-row rule engine
//!
//! Tic-tac-toe generalized to square boards of size 3, 5, and 7, with a
//! navigable move history.
//!
//! # Architecture
//!
//! - **Geometry**: pure coordinate math for rows, columns, and both
//!   diagonal families of any square grid
//! - **Snapshot**: an immutable description of one point in a game
//! - **Transition**: one legal move from a snapshot to a new snapshot,
//!   with win and tie detection
//! - **History**: snapshots plus a cursor, with undo/redo navigation and
//!   branch overwrite on divergence
//! - **Session**: the two players, their records, and the current game
//!
//! # Example
//!
//! ```
//! use strictly_rows::{Coord, GameConfig, GameSession, Seat};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new(&GameConfig::default())?;
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
//!     session.apply_move(Coord::new(row, col))?;
//! }
//! assert_eq!(session.latest().winner(), Some(Seat::One));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod contracts;
mod error;
mod geometry;
mod history;
mod player;
mod session;
mod snapshot;
mod transition;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Geometry
pub use geometry::{
    Coord, CoordParseError, Direction, Step, Traverse, anti_diags, cols, main_diags, rows,
    traverse,
};

// Crate-level exports - Board types
pub use types::{Board, Cell, Token};

// Crate-level exports - Players
pub use player::{Lineup, Player, Players, Record, Seat};

// Crate-level exports - Snapshots and transitions
pub use snapshot::{Outcome, Snapshot};
pub use transition::transition;
pub use contracts::{
    CellIsEmpty, Contract, GameInProgress, LegalMove, MoveContract, TargetInBounds, TurnOrder,
};

// Crate-level exports - History and session
pub use history::{History, Navigation};
pub use session::GameSession;

// Crate-level exports - Configuration
pub use config::{GameConfig, RUN_LENGTHS, run_length_to_win, supported_sizes};

// Crate-level exports - Errors
pub use error::{ConfigError, ConfigErrorKind, MoveError, NavigationError};
