use std::{process::ExitCode, time::Instant};

use backgammon_rules::{
    backgammon::{GameState, Phase, Player},
    playout::{PlayoutError, PlayoutReport, play_from, play_random_game},
};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

#[derive(Parser, Debug)]
#[command(
    name = "backgammon-sim",
    about = "Plays random backgammon games against the rules engine"
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: u32,

    /// Seed of the first game, game i uses seed + i
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Abort a game after this many engine actions
    #[arg(long, default_value_t = 10_000)]
    max_actions: u32,

    /// Print every position of the first game
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.verbose {
        print_game(args.seed, args.max_actions);
    }

    let start = Instant::now();
    let results: Vec<Result<PlayoutReport, PlayoutError>> = (0..args.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(i as u64));
            play_random_game(&mut rng, args.max_actions)
        })
        .collect();
    let duration = start.elapsed();

    let mut wins = (0u32, 0u32);
    let mut turns = 0u64;
    let mut moves = 0u64;
    let mut forced_passes = 0u64;
    let mut hits = 0u64;
    let mut failures = 0u32;

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(report) => {
                match report.winner {
                    Player::One => wins.0 += 1,
                    Player::Two => wins.1 += 1,
                }
                turns += report.turns as u64;
                moves += report.moves as u64;
                forced_passes += report.forced_passes as u64;
                hits += report.hits as u64;
            }
            Err(err) => {
                failures += 1;
                eprintln!("game {} (seed {}) failed: {}", i, args.seed.wrapping_add(i as u64), err);
            }
        }
    }

    let finished = (args.games - failures).max(1) as f32;
    println!("============================================");
    println!(
        "Games: {}, {} Wins: {}, {} Wins: {}",
        args.games,
        Player::One,
        wins.0,
        Player::Two,
        wins.1
    );
    println!(
        "{} Win Rate: {:.2}%, {} Win Rate: {:.2}%",
        Player::One,
        wins.0 as f32 / finished * 100.0,
        Player::Two,
        wins.1 as f32 / finished * 100.0,
    );
    println!(
        "Avg Turns: {:.1}, Avg Moves: {:.1}, Avg Forced Passes: {:.2}, Avg Hits: {:.2}",
        turns as f32 / finished,
        moves as f32 / finished,
        forced_passes as f32 / finished,
        hits as f32 / finished,
    );
    println!("Failed Games: {}", failures);
    println!("Simulation took: {:?}", duration);
    println!("============================================");

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_game(seed: u64, max_actions: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let state = GameState::new_game(&mut rng);
    let result = play_from(state, &mut rng, max_actions, |state| {
        if state.phase() == Phase::Moving && !state.no_moves_available() {
            return;
        }
        println!("=========================================================");
        println!("{}", state.board());
        println!("{}", state.message());
    });
    match result {
        Ok(report) => println!("{} wins after {} turns", report.winner, report.turns),
        Err(err) => println!("Game aborted: {}", err),
    }
}
