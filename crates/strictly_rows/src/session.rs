//! Game session: the two players, the current game's history, and settings.

use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError, NavigationError};
use crate::geometry::Coord;
use crate::history::{History, Navigation};
use crate::player::{Players, Seat};
use crate::snapshot::{Outcome, Snapshot};
use tracing::{debug, info, instrument, warn};

/// Top-level owner of everything that lives across games.
///
/// The two players are created once and keep their records for the
/// session's lifetime; each new game only reassigns their tokens. The
/// history is replaced wholesale whenever a new game starts.
#[derive(Debug, Clone)]
pub struct GameSession {
    players: Players,
    history: History,
    take_backs: bool,
    result_recorded: bool,
}

impl GameSession {
    /// Creates a session and starts its first game from `config`.
    ///
    /// # Errors
    ///
    /// Fails if the configured board size is unsupported.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let mut players = Players::new(config.player_one(), config.player_two());
        let first = *config.first_player();
        let history = History::start_new_game(*config.board_size(), first)?;
        players.assign_first(first);
        info!(take_backs = config.take_backs(), "Session created");
        Ok(Self {
            players,
            history,
            take_backs: *config.take_backs(),
            result_recorded: false,
        })
    }

    /// Replaces the current game with a fresh one.
    ///
    /// The size is validated before anything changes, so an unsupported
    /// size leaves the previous game and token assignment in place.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, size: usize, first: Seat) -> Result<&Snapshot, ConfigError> {
        let history = History::start_new_game(size, first)?;
        self.players.assign_first(first);
        self.history = history;
        self.result_recorded = false;
        Ok(self.history.current())
    }

    /// Plays the active seat's move at `target` against the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transition's [`MoveError`], or
    /// [`MoveError::TakeBacksDisabled`] when take-backs are off and the
    /// cursor is not on the latest snapshot. The history is unchanged on
    /// error.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply_move(&mut self, target: Coord) -> Result<&Snapshot, MoveError> {
        if !self.take_backs && !self.history.is_at_latest() {
            warn!("Move from an earlier position with take-backs disabled");
            return Err(MoveError::TakeBacksDisabled);
        }
        self.history.play(target)?;
        self.record_result();
        Ok(self.history.current())
    }

    /// Moves the history cursor.
    ///
    /// # Errors
    ///
    /// [`NavigationError::Locked`] while take-backs are off and the game is
    /// still in progress, otherwise the history's boundary errors.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn navigate(&mut self, direction: Navigation) -> Result<&Snapshot, NavigationError> {
        if self.navigation_locked() {
            warn!(%direction, "Navigation locked");
            return Err(NavigationError::Locked);
        }
        self.history.navigate(direction)
    }

    /// Returns true when navigation is refused: take-backs are off and the
    /// latest snapshot is still in progress.
    pub fn navigation_locked(&self) -> bool {
        !self.take_backs && !self.history.latest().is_game_over()
    }

    /// Renames the player in `seat`.
    #[instrument(skip(self))]
    pub fn set_player_name(&mut self, seat: Seat, name: impl Into<String> + std::fmt::Debug) {
        self.players.set_name(seat, name);
    }

    /// Turns take-backs on or off for the rest of the session.
    ///
    /// Turning them off also moves the cursor to the latest snapshot.
    #[instrument(skip(self))]
    pub fn set_take_backs(&mut self, take_backs: bool) {
        if !take_backs && !self.history.is_at_latest() {
            debug!(cursor = self.history.cursor(), "Returning to latest snapshot");
            self.history.go_to_latest();
        }
        self.take_backs = take_backs;
    }

    /// Whether take-backs are allowed.
    pub fn take_backs(&self) -> bool {
        self.take_backs
    }

    /// The two players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The current game's history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        self.history.latest()
    }

    /// Counts the game's result once, the first time the latest snapshot ends.
    fn record_result(&mut self) {
        if self.result_recorded {
            return;
        }
        let Some(outcome) = self.history.latest().outcome() else {
            return;
        };
        match outcome {
            Outcome::Winner(seat) => {
                self.players.get_mut(seat).record_win();
                self.players.get_mut(seat.other()).record_loss();
            }
            Outcome::Tie => {
                self.players.get_mut(Seat::One).record_tie();
                self.players.get_mut(Seat::Two).record_tie();
            }
        }
        self.result_recorded = true;
        info!(%outcome, "Result recorded");
        debug!(
            one = ?self.players.get(Seat::One).record(),
            two = ?self.players.get(Seat::Two).record(),
            "Records updated"
        );
    }
}
