use anyhow::Result;
use clap::{ArgAction, Parser};
use dungeon_app::console::Console;
use dungeon_app::seed::{SeedChoice, generate_runtime_seed};
use dungeon_app::session::SessionDriver;
use dungeon_app::settings::{Overrides, default_config_path, resolve_config};
use log::{LevelFilter, info};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dungeon", author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible dungeon; generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// File holding the high score
    #[arg(long)]
    high_score_file: Option<PathBuf>,
    /// Skip the pause between turns
    #[arg(long)]
    no_pause: bool,
    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let overrides = Overrides { high_score_file: args.high_score_file, no_pause: args.no_pause };
    let default_path = default_config_path();
    let config = resolve_config(args.config.as_deref(), default_path.as_deref(), &overrides)?;

    let seed = SeedChoice::resolve(args.seed, generate_runtime_seed());
    info!("base seed {seed:?}, high score file {}", config.high_score_location.display());

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let records = SessionDriver::new(&config, seed.value()).run(&mut console)?;
    info!("played {} session(s)", records.len());
    Ok(())
}

// Game text goes to stdout, so logging stays at warn unless asked for.
fn init_logging(verbosity: u8) {
    let base_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(base_level).parse_default_env().init();
}
