use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use life_automaton::{
    draw::{self, App},
    Configuration, Grid, RawConfig, SimulationController,
};

/// Birth/survival cellular automaton on a wrapping grid.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Grid width in cells
    #[arg(short = 'x', long, default_value = "50")]
    width: String,

    /// Grid height in cells
    #[arg(short = 'y', long, default_value = "50")]
    height: String,

    /// Number of cells alive at the start
    #[arg(short = 'n', long, default_value = "1000")]
    cells: String,

    /// Neighbor counts that bring a dead cell alive, e.g. 3
    #[arg(short, long, default_value = "3")]
    birth: String,

    /// Neighbor counts that keep a live cell alive, e.g. 23
    #[arg(short, long, default_value = "23")]
    survival: String,

    /// Milliseconds between generations while running
    #[arg(short, long, default_value = "500")]
    interval: String,

    /// Seed for the initial layout
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a pattern drawn in a text file instead of random cells
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Run this many generations without a terminal UI and print the result
    #[arg(long)]
    steps: Option<u64>,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn raw_config(&self) -> RawConfig {
        RawConfig {
            width: self.width.clone(),
            height: self.height.clone(),
            cell_count: self.cells.clone(),
            birth: self.birth.clone(),
            survival: self.survival.clone(),
            interval_ms: self.interval.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;
    info!("Starting life automaton v{}", env!("CARGO_PKG_VERSION"));

    let mut config = args.raw_config().parse()?;
    config.seed = args.seed;

    let pattern = match &args.pattern {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading pattern {}", path.display()))?;
            Some(Grid::from_text(&text).with_context(|| format!("parsing pattern {}", path.display()))?)
        }
        None => None,
    };

    match args.steps {
        Some(n) => headless(&config, pattern, n),
        None => {
            let app = match pattern {
                Some(grid) => App::with_grid(config, grid),
                None => App::new(config)?,
            };
            draw::run(app)
        }
    }
}

fn headless(config: &Configuration, pattern: Option<Grid>, steps: u64) -> Result<()> {
    let mut sim = SimulationController::new();
    match pattern {
        Some(grid) => {
            sim.load(grid, config.rules, config.interval);
        }
        None => {
            sim.configure(config)?;
        }
    }
    for _ in 0..steps {
        sim.step();
    }
    if let Some(grid) = sim.current_grid() {
        print!("{grid}");
    }
    println!("Step {}  population {}", sim.current_step(), sim.population());
    Ok(())
}
