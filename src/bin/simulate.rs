use std::collections::BTreeMap;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twenty48::policy;
use twenty48::{ConfigError, Game, GameConfig};

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    version,
    about = "Play batches of 2048 games and report aggregate stats"
)]
struct Cli {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 100)]
    games: u64,
    /// Grid side length
    #[arg(long, default_value_t = 4)]
    size: usize,
    /// Tile value that wins a game
    #[arg(long, default_value_t = 2048)]
    target: u32,
    /// Base RNG seed; game i plays with seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Move-selection policy
    #[arg(long, value_enum, default_value = "greedy")]
    policy: PolicyKind,
    /// Show a progress bar
    #[arg(long)]
    progress: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyKind {
    Random,
    Greedy,
}

#[derive(Debug, Serialize)]
struct GameReport {
    seed: u64,
    moves: u64,
    score: u64,
    highest: u32,
    won: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    games: u64,
    wins: u64,
    win_rate: f64,
    mean_score: f64,
    max_score: u64,
    mean_moves: f64,
    /// How many games ended with each highest-tile value.
    highest_tile_counts: BTreeMap<u32, u64>,
}

fn play_game(config: GameConfig, kind: PolicyKind, seed: u64) -> Result<GameReport, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(config, &mut rng)?;
    let mut moves = 0u64;
    while !game.is_terminal() {
        let direction = match kind {
            PolicyKind::Random => policy::Random.next_move(&game, &mut rng),
            PolicyKind::Greedy => policy::Greedy.next_move(&game),
        };
        let Some(direction) = direction else {
            break;
        };
        game.apply_move(direction, &mut rng);
        moves += 1;
    }
    Ok(GameReport {
        seed,
        moves,
        score: game.score(),
        highest: game.highest(),
        won: game.is_won(),
    })
}

fn summarize(games: &[GameReport]) -> Report {
    let n = games.len() as u64;
    let wins = games.iter().filter(|g| g.won).count() as u64;
    let total_score: u64 = games.iter().map(|g| g.score).sum();
    let total_moves: u64 = games.iter().map(|g| g.moves).sum();
    let mut highest_tile_counts = BTreeMap::new();
    for game in games {
        *highest_tile_counts.entry(game.highest).or_insert(0) += 1;
    }
    Report {
        games: n,
        wins,
        win_rate: wins as f64 / n as f64,
        mean_score: total_score as f64 / n as f64,
        max_score: games.iter().map(|g| g.score).max().unwrap_or(0),
        mean_moves: total_moves as f64 / n as f64,
        highest_tile_counts,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        return Err("nothing to do: --games is 0".into());
    }
    let config = GameConfig {
        size: cli.size,
        target: cli.target,
    };

    let pb = if cli.progress {
        let pb = ProgressBar::new(cli.games);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} games ({eta})",
            )?
            .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let games: Result<Vec<GameReport>, ConfigError> = (0..cli.games)
        .into_par_iter()
        .map(|i| {
            let report = play_game(config, cli.policy, cli.seed + i);
            pb.inc(1);
            report
        })
        .collect();
    let games = games?;
    pb.finish_and_clear();

    let report = summarize(&games);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "games: {}, wins: {} ({:.1}%)",
            report.games,
            report.wins,
            report.win_rate * 100.0
        );
        println!(
            "score: mean {:.1}, max {}",
            report.mean_score, report.max_score
        );
        println!("moves: mean {:.1}", report.mean_moves);
        println!("highest tile:");
        for (tile, count) in &report.highest_tile_counts {
            println!("  {tile:>6}: {count}");
        }
    }
    Ok(())
}
