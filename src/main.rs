use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use battleships::{
    attack, init_logging, place, render_grid, Fleet, FleetHealth, GameSession, Grid,
    PlacementPlan, SessionState, Side, Strategy, DEFAULT_BOARD_SIZE, PLACEMENT_FILE, SHIPS_FILE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum PlacementMode {
    /// Read the player's ship positions from the placement record.
    Custom,
    /// Place the player's ships randomly.
    Random,
}

#[derive(Parser)]
enum Commands {
    /// Target practice: sink a sequentially placed fleet on a single board.
    Solo {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value = SHIPS_FILE)]
        ships: PathBuf,
    },
    /// Full match against the automated opponent.
    Versus {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value = SHIPS_FILE)]
        ships: PathBuf,
        #[arg(long, value_enum, default_value_t = PlacementMode::Custom)]
        placement_mode: PlacementMode,
        #[arg(long, default_value = PLACEMENT_FILE)]
        placement: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Solo { size, ships } => solo(size, &ships),
        Commands::Versus {
            size,
            ships,
            placement_mode,
            placement,
            seed,
        } => versus(size, &ships, placement_mode, &placement, seed),
    }
}

fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Single-board game loop: fire until every ship is sunk.
fn solo(size: usize, ships: &Path) -> anyhow::Result<()> {
    println!("Welcome to Battleships!");
    let fleet = Fleet::load(ships)?;
    let mut grid = Grid::new(size)?;
    let mut rng = rng_from_seed(None);
    place(&mut grid, &fleet, Strategy::Sequential, &mut rng)?;
    let mut health = FleetHealth::new(&fleet);

    while !health.all_sunk() {
        let (x, y) = read_coordinates(size)?;
        let hit = attack(x, y, &mut grid, &mut health)?;
        println!("{}", if hit { "You hit a ship!" } else { "You missed!" });
    }
    println!("Game over, you sunk all ships!");
    Ok(())
}

/// Alternating-turn match against the random opponent.
fn versus(
    size: usize,
    ships: &Path,
    placement_mode: PlacementMode,
    placement: &Path,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    println!("Welcome to Battleships!");
    let fleet = Fleet::load(ships)?;
    let mut rng = rng_from_seed(seed);
    let mut session = GameSession::new(size)?;

    match placement_mode {
        PlacementMode::Custom => {
            let plan = PlacementPlan::load(placement)?;
            session.place_fleet(Side::Player, &fleet, Strategy::Custom(&plan), &mut rng)?;
        }
        PlacementMode::Random => {
            session.place_fleet(Side::Player, &fleet, Strategy::Random, &mut rng)?;
        }
    }
    session.place_fleet(Side::Opponent, &fleet, Strategy::Random, &mut rng)?;

    while session.state() == SessionState::InProgress {
        let shot = read_coordinates(size)?;
        let report = session.play_turn(shot, &mut rng)?;
        println!("{}", if report.player_hit { "You hit a ship!" } else { "You missed!" });
        if let Some(((x, y), hit)) = report.opponent_shot {
            println!(
                "{} Coordinates: ({}, {})",
                if hit { "Opponent hit a ship!" } else { "Opponent missed!" },
                x,
                y
            );
        }
        println!("Current state of your board:");
        print!("{}", render_grid(session.grid(Side::Player), &fleet));
    }

    match session.winner() {
        Some(Side::Player) => println!("You won!"),
        Some(Side::Opponent) => println!("You lost!"),
        None => {}
    }
    Ok(())
}

fn read_coordinates(size: usize) -> anyhow::Result<(usize, usize)> {
    let x = read_axis("Enter x coordinate: ", size)?;
    let y = read_axis("Enter y coordinate: ", size)?;
    Ok((x, y))
}

/// Prompt until the input parses as an integer in `0..size`.
fn read_axis(prompt: &str, size: usize) -> anyhow::Result<usize> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        match line.trim().parse::<usize>() {
            Ok(value) if value < size => return Ok(value),
            _ => log::warn!("input invalid, try again"),
        }
    }
}
