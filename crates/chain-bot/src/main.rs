use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use boxes_ai_core::{
    controller::Session,
    game::{Board, GameOutcome, Side},
    Agent,
};
use chain_bot::{ChainAgent, ChainConfig};
use cross_bot::CrossAgent;
use first_bot::FirstAgent;
use random_bot::RandomAgent;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Plays the chain agent against another agent")]
struct Args {
    /// Rows of boxes
    #[arg(long, default_value_t = Board::DEFAULT_ROWS)]
    rows: usize,

    /// Columns of boxes
    #[arg(long, default_value_t = Board::DEFAULT_COLS)]
    cols: usize,

    #[arg(long, default_value_t = 100)]
    games: usize,

    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Random picks the chain agent tries before simulating sacrifices
    #[arg(long, default_value_t = ChainConfig::DEFAULT_SAFE_MOVE_ATTEMPTS)]
    attempts: usize,

    /// Seed for every agent. Taken from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position instead of an empty board, e.g. "3x3: h0,0 v1,1"
    #[arg(long)]
    position: Option<String>,

    /// Print the final board of every game
    #[arg(long)]
    show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    First,
    Chain,
    Cross,
}

#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    losses: usize,
    draws: usize,
    boxes_for: usize,
    boxes_against: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut seeds = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = ChainConfig {
        safe_move_attempts: args.attempts,
    };
    let mut chain = ChainAgent::with_rng(config, StdRng::seed_from_u64(seeds.gen()));
    let mut opponent: Box<dyn Agent> = match args.opponent {
        Opponent::Random => Box::new(RandomAgent::with_rng(StdRng::seed_from_u64(seeds.gen()))),
        Opponent::First => Box::new(FirstAgent::with_rng(StdRng::seed_from_u64(seeds.gen()))),
        Opponent::Chain => Box::new(ChainAgent::with_rng(config, StdRng::seed_from_u64(seeds.gen()))),
        Opponent::Cross => Box::new(CrossAgent),
    };

    let mut tally = Tally::default();

    for game in 0..args.games {
        let mut session = match &args.position {
            Some(position) => Session::from_notation(position)?,
            None => Session::new(Board::try_new(args.rows, args.cols)?),
        };

        // Alternate who moves first
        let chain_side = if game % 2 == 0 { Side::First } else { Side::Second };
        let record = match chain_side {
            Side::First => session.play(&mut chain, opponent.as_mut()),
            Side::Second => session.play(opponent.as_mut(), &mut chain),
        }
        .with_context(|| format!("Game {game} failed"))?;

        match record.outcome {
            GameOutcome::Win(side) if side == chain_side => tally.wins += 1,
            GameOutcome::Win(_) => tally.losses += 1,
            GameOutcome::Draw => tally.draws += 1,
        }
        tally.boxes_for += record.score(chain_side);
        tally.boxes_against += record.score(chain_side.opponent());

        info!(
            "Game {game}: chain played {chain_side}, {:?} in {} moves",
            record.outcome,
            record.moves.len()
        );
        if args.show {
            println!("{}", session.board());
        }
    }

    println!(
        "chain vs {:?} over {} games: {} won, {} lost, {} drawn",
        args.opponent, args.games, tally.wins, tally.losses, tally.draws
    );
    println!(
        "Boxes: {} taken, {} conceded",
        tally.boxes_for, tally.boxes_against
    );

    Ok(())
}
