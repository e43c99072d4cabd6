//! Navigable sequence of snapshots with a cursor.

use crate::config::run_length_to_win;
use crate::error::{ConfigError, MoveError, NavigationError};
use crate::geometry::Coord;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation, SnapshotInvariants};
use crate::player::{Lineup, Seat};
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where to move the history cursor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Navigation {
    /// Jump to the opening snapshot.
    #[display("start")]
    Start,
    /// One snapshot earlier.
    #[display("back")]
    Back,
    /// One snapshot later.
    #[display("forward")]
    Forward,
    /// Jump to the most recent snapshot.
    #[display("latest")]
    Latest,
}

/// Every snapshot of one game, plus the one currently being viewed.
///
/// Never empty, and the cursor always points at an existing snapshot.
/// Appending while the cursor is behind the latest snapshot discards the
/// later snapshots first, so an abandoned branch cannot be redone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Creates a history holding only `start`.
    #[instrument(skip(start), fields(size = start.size()))]
    pub fn new(start: Snapshot) -> Self {
        Self {
            snapshots: vec![start],
            cursor: 0,
        }
    }

    /// Starts a fresh game on a `size` board with `first` playing Cross.
    ///
    /// # Errors
    ///
    /// Fails before any snapshot exists if `size` has no run length.
    #[instrument]
    pub fn start_new_game(size: usize, first: Seat) -> Result<Self, ConfigError> {
        let count_to_win = run_length_to_win(size)?;
        info!(size, count_to_win, %first, "Starting new game");
        Ok(Self::new(Snapshot::new(
            size,
            count_to_win,
            Lineup::with_first(first),
        )))
    }

    /// Builds a history by playing `moves` in order from `start`.
    ///
    /// The cursor ends on the latest snapshot.
    #[instrument(skip(start))]
    pub fn replay(start: Snapshot, moves: &[Coord]) -> Result<Self, MoveError> {
        let mut history = Self::new(start);
        for target in moves {
            history.play(*target)?;
        }
        Ok(history)
    }

    /// Adds `snapshot` after the cursor and moves the cursor onto it.
    ///
    /// Any snapshots after the old cursor are dropped first.
    #[instrument(skip(self, snapshot), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn append(&mut self, snapshot: Snapshot) {
        self.cursor += 1;
        if self.cursor < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - self.cursor,
                "Discarding abandoned branch"
            );
        }
        self.snapshots.truncate(self.cursor);
        self.snapshots.push(snapshot);
    }

    /// Plays a move against the current snapshot and appends the result.
    ///
    /// On error the history is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, target: Coord) -> Result<&Snapshot, MoveError> {
        let next = self.current().play(target)?;
        self.append(next);
        Ok(self.current())
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// The most recent snapshot, regardless of the cursor.
    pub fn latest(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its opening snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns true if the cursor can step back.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if the cursor can step forward.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Returns true if the cursor is on the latest snapshot.
    pub fn is_at_latest(&self) -> bool {
        !self.can_go_forward()
    }

    /// Steps the cursor back one snapshot.
    ///
    /// # Errors
    ///
    /// [`NavigationError::AtStart`] if already at the first snapshot; the
    /// cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_back(&mut self) -> Result<&Snapshot, NavigationError> {
        if !self.can_go_back() {
            warn!("Cannot go back past the start");
            return Err(NavigationError::AtStart);
        }
        self.cursor -= 1;
        Ok(self.current())
    }

    /// Steps the cursor forward one snapshot.
    ///
    /// # Errors
    ///
    /// [`NavigationError::AtLatest`] if already at the latest snapshot; the
    /// cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_forward(&mut self) -> Result<&Snapshot, NavigationError> {
        if !self.can_go_forward() {
            warn!("Cannot go forward past the latest position");
            return Err(NavigationError::AtLatest);
        }
        self.cursor += 1;
        Ok(self.current())
    }

    /// Jumps to the opening snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_to_start(&mut self) -> &Snapshot {
        self.cursor = 0;
        self.current()
    }

    /// Jumps to the most recent snapshot.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn go_to_latest(&mut self) -> &Snapshot {
        self.cursor = self.snapshots.len() - 1;
        self.current()
    }

    /// Moves the cursor in `direction`.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn navigate(&mut self, direction: Navigation) -> Result<&Snapshot, NavigationError> {
        match direction {
            Navigation::Start => Ok(self.go_to_start()),
            Navigation::Back => self.go_back(),
            Navigation::Forward => self.go_forward(),
            Navigation::Latest => Ok(self.go_to_latest()),
        }
    }

    /// Checks the history invariants and those of every snapshot.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(self).err().unwrap_or_default();
        for snapshot in &self.snapshots {
            if let Err(found) = SnapshotInvariants::check_all(snapshot) {
                violations.extend(found);
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "History invariants violated");
            Err(violations)
        }
    }
}
