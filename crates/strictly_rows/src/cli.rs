//! Command-line interface for strictly_rows.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_rows::{Coord, Seat};

/// Strictly Rows - N-in-a-row rule engine
#[derive(Parser, Debug)]
#[command(name = "strictly_rows")]
#[command(about = "Play N-in-a-row games from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Which seat moves first.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FirstArg {
    /// Player one plays Cross
    One,
    /// Player two plays Cross
    Two,
}

impl From<FirstArg> for Seat {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::One => Seat::One,
            FirstArg::Two => Seat::Two,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves and print the resulting board
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board size (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seat that moves first (overrides the config file)
        #[arg(short, long)]
        first: Option<FirstArg>,

        /// Lock navigation while the game is in progress
        #[arg(long)]
        no_take_backs: bool,

        /// Step back this many snapshots after the moves
        #[arg(long, default_value = "0")]
        back: usize,

        /// Print every snapshot instead of only the one under the cursor
        #[arg(long)]
        history: bool,

        /// Moves as "row,col", played alternately
        moves: Vec<Coord>,
    },

    /// List supported board sizes and the run length each needs to win
    Sizes,
}
