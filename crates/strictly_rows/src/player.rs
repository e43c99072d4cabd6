//! The two fixed player seats, their identities, and running records.

use crate::types::Token;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One of the two player slots in a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    /// First seat.
    #[default]
    #[display("player one")]
    One,
    /// Second seat.
    #[display("player two")]
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Token assignment for one game: whichever seat moves first holds Cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Lineup {
    first: Seat,
}

impl Lineup {
    /// Creates a lineup where `first` plays Cross and moves first.
    pub fn with_first(first: Seat) -> Self {
        Self { first }
    }

    /// The seat that moves first.
    pub fn first(&self) -> Seat {
        self.first
    }

    /// Token held by `seat` in this game.
    pub fn token_of(&self, seat: Seat) -> Token {
        if seat == self.first {
            Token::Cross
        } else {
            Token::Naught
        }
    }

    /// Seat holding `token`, or `None` for `Empty`.
    pub fn seat_of(&self, token: Token) -> Option<Seat> {
        match token {
            Token::Cross => Some(self.first),
            Token::Naught => Some(self.first.other()),
            Token::Empty => None,
        }
    }
}

/// Win/loss/tie tally accumulated across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Record {
    /// Games won.
    wins: u32,
    /// Games lost.
    losses: u32,
    /// Games tied.
    ties: u32,
}

impl Record {
    /// Total games counted in the record.
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// A named participant with a token and a running record.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Token for the current game.
    token: Token,
    /// Results across all games in the session.
    record: Record,
}

impl Player {
    /// Creates a player with an empty record.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, token: Token) -> Self {
        Self {
            name: name.as_ref().to_string(),
            token,
            record: Record::default(),
        }
    }

    /// Renames the player.
    #[instrument(skip(self), fields(old = %self.name))]
    pub fn set_name(&mut self, name: impl Into<String> + std::fmt::Debug) {
        self.name = name.into();
    }

    /// Reassigns the player's token.
    pub fn set_token(&mut self, token: Token) {
        self.token = token;
    }

    /// Counts a win.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_win(&mut self) {
        self.record.wins += 1;
        debug!(wins = self.record.wins, "Win recorded");
    }

    /// Counts a loss.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_loss(&mut self) {
        self.record.losses += 1;
        debug!(losses = self.record.losses, "Loss recorded");
    }

    /// Counts a tie.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn record_tie(&mut self) {
        self.record.ties += 1;
        debug!(ties = self.record.ties, "Tie recorded");
    }
}

/// The two players of a session, addressed by [`Seat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    /// Creates the roster; seat one starts as Cross.
    #[instrument(skip(one, two))]
    pub fn new(one: impl AsRef<str>, two: impl AsRef<str>) -> Self {
        Self {
            one: Player::new(one, Token::Cross),
            two: Player::new(two, Token::Naught),
        }
    }

    /// The player in `seat`.
    pub fn get(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.one,
            Seat::Two => &self.two,
        }
    }

    /// Mutable access to the player in `seat`.
    pub fn get_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::One => &mut self.one,
            Seat::Two => &mut self.two,
        }
    }

    /// Renames the player in `seat`.
    #[instrument(skip(self))]
    pub fn set_name(&mut self, seat: Seat, name: impl Into<String> + std::fmt::Debug) {
        self.get_mut(seat).set_name(name);
    }

    /// Gives Cross to `first` and Naught to the other seat.
    #[instrument(skip(self))]
    pub fn assign_first(&mut self, first: Seat) -> Lineup {
        let lineup = Lineup::with_first(first);
        for seat in [Seat::One, Seat::Two] {
            self.get_mut(seat).set_token(lineup.token_of(seat));
        }
        info!(first = %self.get(first).name, "Cross assigned");
        lineup
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("Player One", "Player Two")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_tokens() {
        let lineup = Lineup::with_first(Seat::Two);
        assert_eq!(lineup.token_of(Seat::Two), Token::Cross);
        assert_eq!(lineup.token_of(Seat::One), Token::Naught);
        assert_eq!(lineup.seat_of(Token::Naught), Some(Seat::One));
        assert_eq!(lineup.seat_of(Token::Empty), None);
    }

    #[test]
    fn test_assign_first_swaps_tokens() {
        let mut players = Players::default();
        assert_eq!(*players.get(Seat::One).token(), Token::Cross);

        players.assign_first(Seat::Two);
        assert_eq!(*players.get(Seat::One).token(), Token::Naught);
        assert_eq!(*players.get(Seat::Two).token(), Token::Cross);
    }

    #[test]
    fn test_record_accumulates() {
        let mut player = Player::new("Ada", Token::Cross);
        player.record_win();
        player.record_win();
        player.record_tie();
        player.record_loss();
        assert_eq!(*player.record().wins(), 2);
        assert_eq!(player.record().games_played(), 4);
    }

    #[test]
    fn test_set_name() {
        let mut players = Players::default();
        players.set_name(Seat::Two, "Grace");
        assert_eq!(players.get(Seat::Two).name(), "Grace");
    }
}
