//! Kioku: a Go position memorization and replay trainer.
//!
//! ## Usage
//!
//! - `kioku` - Show a demo
//! - `kioku demo` - Play a scripted capture sequence
//! - `kioku random --size 9 --moves 60` - Play random legal moves
//! - `kioku replay game.json --upto 30` - Print a recorded game at a ply
//! - `kioku diff target.json actual.json` - Score a rebuilt position

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use kioku::diff::diff;
use kioku::moves::apply_move;
use kioku::position::{Color, Coord, Position, parse_coord, str_coord};
use kioku::record::{GameRecord, NamedPosition};

/// Kioku: Go position memorization and replay trainer
#[derive(Parser)]
#[command(name = "kioku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scripted capture sequence and print each board
    Demo,
    /// Play random legal moves and print the final board and tally
    Random {
        /// Board size
        #[arg(long, default_value_t = 9)]
        size: u8,
        /// Number of stones to place
        #[arg(long, default_value_t = 60)]
        moves: usize,
        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay a recorded game from a JSON file
    Replay {
        file: PathBuf,
        /// Ply to stop at (defaults to the full game)
        #[arg(long)]
        upto: Option<usize>,
    },
    /// Compare a rebuilt position against a memorization target
    Diff {
        target: PathBuf,
        actual: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Some(Commands::Demo) | None => run_demo(),
        Some(Commands::Random { size, moves, seed }) => run_random(size, moves, seed),
        Some(Commands::Replay { file, upto }) => run_replay(&file, upto),
        Some(Commands::Diff { target, actual }) => run_diff(&target, &actual),
    }
}

fn run_demo() -> Result<()> {
    println!("Kioku: Go position memorization trainer\n");

    println!("=== Capture Demo ===");
    let mut record = GameRecord::new("demo", 9);
    for (coord, color) in [
        ("C4", Color::Black),
        ("D4", Color::White),
        ("E4", Color::Black),
        ("G7", Color::White),
        ("D3", Color::Black),
        ("G6", Color::White),
        ("D5", Color::Black), // takes D4
    ] {
        let c = parse_coord(coord, 9).context("demo coordinate")?;
        let mv = record.play(c, color)?;
        if mv.captured > 0 {
            println!("{coord} captures {} stone(s)", mv.captured);
        }
    }
    let (pos, tally) = record.final_position();
    println!("{pos}");
    println!("captures: black {}, white {}\n", tally.black, tally.white);

    println!("=== Drill Demo ===");
    let (target, _) = record.final_position();
    let mut rebuilt = target.clone();
    // the "student" forgets one stone and misremembers another
    rebuilt.remove(parse_coord("D3", 9).context("demo coordinate")?);
    rebuilt.set(parse_coord("G7", 9).context("demo coordinate")?, Color::Black);
    print_diff_report(&target, &rebuilt);
    Ok(())
}

fn run_random(size: u8, moves: usize, seed: Option<u64>) -> Result<()> {
    if size == 0 || size > 19 {
        bail!("board size must be between 1 and 19, got {size}");
    }
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let mut record = GameRecord::new("random game", size);
    let mut pos = Position::new(size);
    let mut color = Color::Black;
    let mut placed = 0;

    // rejection sampling; a full board or a wall of illegal points ends the game
    let mut attempts = 0;
    let max_attempts = moves.saturating_mul(50).max(1000);
    while placed < moves && attempts < max_attempts {
        attempts += 1;
        let coord = Coord::new(rng.u8(0..size), rng.u8(0..size));
        if let Ok(mv) = apply_move(&mut pos, coord, color) {
            record.moves.push(mv);
            color = color.opponent();
            placed += 1;
        }
    }

    let (replayed, tally) = record.final_position();
    println!("{replayed}");
    println!(
        "{placed} moves, captures: black {}, white {}",
        tally.black, tally.white
    );
    Ok(())
}

fn run_replay(file: &Path, upto: Option<usize>) -> Result<()> {
    let data =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let record: GameRecord = serde_json::from_str(&data)
        .with_context(|| format!("parsing game record {}", file.display()))?;

    let ply = upto.unwrap_or(record.len()).min(record.len());
    let (pos, tally) = record.position_at(ply);

    println!("{} - ply {}/{}", record.name, ply, record.len());
    println!("{pos}");
    println!("captures: black {}, white {}", tally.black, tally.white);
    Ok(())
}

fn run_diff(target_file: &Path, actual_file: &Path) -> Result<()> {
    let target = load_named(target_file)?;
    let actual = load_named(actual_file)?;
    if target.board_size != actual.board_size {
        bail!(
            "board sizes differ: {} is {}x{}, {} is {}x{}",
            target.name,
            target.board_size,
            target.board_size,
            actual.name,
            actual.board_size,
            actual.board_size
        );
    }
    print_diff_report(&target.to_position(), &actual.to_position());
    Ok(())
}

fn load_named(file: &Path) -> Result<NamedPosition> {
    let data =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing position {}", file.display()))
}

fn print_diff_report(target: &Position, actual: &Position) {
    let result = diff(target, actual);
    let size = target.size();
    println!("correct: {}", coord_list(&result.correct, size));
    println!("missing: {}", coord_list(&result.missing, size));
    println!("extra:   {}", coord_list(&result.extra, size));
    if result.is_match() {
        println!("perfect rebuild");
    }
}

fn coord_list(set: &HashSet<Coord>, size: u8) -> String {
    if set.is_empty() {
        return "-".into();
    }
    let mut coords: Vec<Coord> = set.iter().copied().collect();
    coords.sort_by_key(|c| (c.y, c.x));
    coords
        .iter()
        .map(|&c| str_coord(c, size))
        .collect::<Vec<_>>()
        .join(" ")
}
