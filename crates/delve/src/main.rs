//! Random-walk dungeon generator
//!
//! Builds one dungeon from flags or a JSON config and reports on it.

mod query;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;

use delve_core::dungeon::WalkStats;
use delve_core::{Coord, Dungeon, DungeonConfig};

use query::{LosAnswer, LosQuery};

/// Carve a dungeon with a biased random walk
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Delve - carve a dungeon between two points", long_about = None)]
struct Args {
    /// JSON config file; flags override its fields
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Dungeon width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Dungeon height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Seed for a reproducible layout
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Take a step towards the exit on a 1-in-N roll
    #[arg(short = 'b', long = "bias-strength")]
    bias_strength: Option<u32>,

    /// Give up after this many walk steps
    #[arg(long = "max-steps")]
    max_steps: Option<u64>,

    /// Line-of-sight query as x1,y1,x2,y2 (repeatable)
    #[arg(long = "los", allow_hyphen_values = true)]
    los: Vec<LosQuery>,

    /// Print the report as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    width: i32,
    height: i32,
    seed: u64,
    entry: Coord,
    exit: Coord,
    ground_cells: usize,
    walk: WalkStats,
    queries: Vec<LosAnswer>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = build_config(&args)?;
    let mut rng = config.rng();
    let seed = rng.seed();
    info!(
        "generating {}x{} dungeon with seed {}",
        config.width, config.height, seed
    );

    let dungeon = Dungeon::generate(&config, &mut rng)
        .with_context(|| format!("could not generate a dungeon with seed {seed}"))?;

    let report = Report {
        width: dungeon.width(),
        height: dungeon.height(),
        seed,
        entry: dungeon.entry(),
        exit: dungeon.exit(),
        ground_cells: dungeon.ground_count(),
        walk: dungeon.walk_stats(),
        queries: args.los.iter().map(|q| q.answer(&dungeon)).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Config file (or defaults) overridden by any flags given
fn build_config(args: &Args) -> anyhow::Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            DungeonConfig::from_json_str(&text)
                .with_context(|| format!("invalid config in {}", path.display()))?
        }
        None => DungeonConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(bias_strength) = args.bias_strength {
        config.bias_strength = bias_strength;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = Some(max_steps);
    }

    config.validate()?;
    Ok(config)
}

fn print_report(report: &Report) {
    println!("size:   {}x{}", report.width, report.height);
    println!("seed:   {}", report.seed);
    println!("entry:  {}", report.entry);
    println!("exit:   {}", report.exit);
    println!(
        "ground: {} cells ({} steps, {} biased)",
        report.ground_cells, report.walk.steps, report.walk.biased_steps
    );
    for answer in &report.queries {
        println!(
            "los {} -> {}: {} (distance {})",
            answer.from,
            answer.to,
            if answer.clear { "clear" } else { "blocked" },
            answer.distance
        );
    }
}
