//! Strictly Rows - command-line driver
//!
//! Starts a game, plays moves given on the command line, and prints the board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_rows::{GameConfig, GameSession, Navigation, Seat, Snapshot};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            first,
            no_take_backs,
            back,
            history,
            moves,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            if let Some(size) = size {
                game_config = game_config.with_board_size(size);
            }
            if let Some(first) = first {
                game_config = game_config.with_first_player(Seat::from(first));
            }
            if no_take_backs {
                game_config = game_config.with_take_backs(false);
            }
            run_play(&game_config, &moves, back, history)
        }
        Command::Sizes => {
            for (size, run) in strictly_rows::RUN_LENGTHS {
                println!("{size}x{size}: {run} in a row");
            }
            Ok(())
        }
    }
}

/// Plays `moves`, steps back `back` snapshots, and prints the result.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
fn run_play(
    config: &GameConfig,
    moves: &[strictly_rows::Coord],
    back: usize,
    show_history: bool,
) -> Result<()> {
    let mut session = GameSession::new(config)?;
    info!(size = session.current().size(), "Game started");

    for target in moves {
        session.apply_move(*target)?;
        debug!(%target, "Move applied");
    }
    for _ in 0..back {
        session.navigate(Navigation::Back)?;
    }

    if show_history {
        for (index, snapshot) in session.history().snapshots().iter().enumerate() {
            let marker = if index == session.history().cursor() { " <" } else { "" };
            println!("#{index}{marker}");
            print_snapshot(&session, snapshot);
            println!();
        }
    } else {
        print_snapshot(&session, session.current());
    }
    Ok(())
}

fn print_snapshot(session: &GameSession, snapshot: &Snapshot) {
    println!("{}", snapshot.board());
    let player = session.players().get(snapshot.active());
    match snapshot.outcome() {
        Some(outcome) if outcome.is_tie() => println!("Tie game."),
        Some(_) => {
            let cells: Vec<String> = snapshot
                .winning_coords()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("{} ({}) wins: {}", player.name(), player.token(), cells.join(" "));
        }
        None => println!("{} ({}) to move.", player.name(), player.token()),
    }
}
