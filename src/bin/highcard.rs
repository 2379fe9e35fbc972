//! Plays one game of highcard and prints the final score.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use highcard::{FaceOrdering, Game, GameOptions};

/// Two-player highest-card-wins simulator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the first player.
    #[arg(long, default_value = "Player 1")]
    player1: String,
    /// Name of the second player.
    #[arg(long, default_value = "Player 2")]
    player2: String,
    /// Shuffle seed (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// How faces are compared.
    #[arg(long, value_enum, default_value_t = Ordering::Symbol)]
    ordering: Ordering,
    /// Points awarded to each round's winner.
    #[arg(long, default_value_t = 1)]
    points: u32,
}

/// Command-line names for [`FaceOrdering`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ordering {
    /// Compare face symbols as text ("10" < "2" < ... < "A" < "J" < "K" < "Q").
    Symbol,
    /// Compare canonical ranks (A low, K high).
    Rank,
}

impl From<Ordering> for FaceOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Symbol => Self::Symbol,
            Ordering::Rank => Self::Rank,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn core::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("using seed {seed}");

    let options = GameOptions::default()
        .with_face_ordering(args.ordering.into())
        .with_points_per_round(args.points);
    let mut game = Game::new(args.player1, args.player2, options, seed);

    game.deal_cards()?;
    game.play_game()?;
    println!("{}", game.score_report());

    Ok(())
}
