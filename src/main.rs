//! Life Engine CLI - Run a Game of Life simulation from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use life_engine::{
    compute::{Grid, GridStats},
    schema::{Seed, SimulationConfig},
};

/// Clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to run (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = SimulationConfig::from_file(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    let mut grid = Grid::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Error creating grid: {}", e);
        std::process::exit(1);
    });
    seed.apply(&mut grid).unwrap_or_else(|e| {
        eprintln!("Error seeding grid: {}", e);
        std::process::exit(1);
    });

    log::info!(
        "Running {} generations on {}x{} grid ({} ms/tick)",
        generations,
        config.width,
        config.height,
        config.tick_interval_ms
    );

    let tick = Duration::from_millis(config.tick_interval_ms);
    let stdout = io::stdout();

    for _ in 0..generations {
        if !tick.is_zero() {
            let mut out = stdout.lock();
            if let Err(e) = draw(&mut out, &grid) {
                log::warn!("Stopping: failed to draw frame: {}", e);
                break;
            }
            thread::sleep(tick);
        }
        grid.step();
    }

    let stats = GridStats::from_grid(&grid);
    if !tick.is_zero() {
        if let Err(e) = draw(&mut stdout.lock(), &grid) {
            log::warn!("Failed to draw final frame: {}", e);
        }
    }
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing stats: {}", e),
    }
}

/// Paint one frame of the grid to a terminal.
fn draw<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    write!(out, "{}", CLEAR_SCREEN)?;
    write!(out, "{}", grid)?;
    writeln!(
        out,
        "generation {}  population {}",
        grid.generation(),
        grid.population()
    )?;
    out.flush()
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
    println!();
    println!("Example seed (config.seed.json):");
    match serde_json::to_string_pretty(&seed) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing seed: {}", e),
    }
}
