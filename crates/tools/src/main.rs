use anyhow::Result;
use clap::Parser;
use dungeon_core::dice::seeded;
use dungeon_core::game::{resolve_find, resolve_search};
use dungeon_core::{ContentTables, FindOdds, Outcome, SearchOdds};
use log::info;
use serde::Serialize;

/// Estimate outcome frequencies for room searches and the bonus room.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 100_000)]
    trials: u64,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Default)]
struct Tally {
    full_heal: u64,
    key: u64,
    treasure: u64,
    potion: u64,
    trap: u64,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::FullHeal => self.full_heal += 1,
            Outcome::KeyFound => self.key += 1,
            Outcome::Treasure { .. } => self.treasure += 1,
            Outcome::Potion { .. } => self.potion += 1,
            Outcome::Trap { .. } => self.trap += 1,
        }
    }

    fn shares(&self, label: &'static str, trials: u64) -> Shares {
        let share = |count: u64| count as f64 / trials.max(1) as f64;
        Shares {
            label,
            full_heal: share(self.full_heal),
            key: share(self.key),
            treasure: share(self.treasure),
            potion: share(self.potion),
            trap: share(self.trap),
        }
    }
}

#[derive(Serialize)]
struct Shares {
    label: &'static str,
    full_heal: f64,
    key: f64,
    treasure: f64,
    potion: f64,
    trap: f64,
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    trials: u64,
    rows: Vec<Shares>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("estimating odds over {} trials with seed {}", args.trials, args.seed);

    let content = ContentTables::build_default();
    let mut dice = seeded(args.seed);
    let mut without_key = Tally::default();
    let mut with_key = Tally::default();
    let mut bonus_room = Tally::default();

    for _ in 0..args.trials {
        without_key.record(resolve_search(&mut dice, SearchOdds::STANDARD, false, &content));
        with_key.record(resolve_search(&mut dice, SearchOdds::STANDARD, true, &content));
        bonus_room.record(resolve_find(&mut dice, FindOdds::BONUS_ROOM, &content));
    }

    let report = Report {
        seed: args.seed,
        trials: args.trials,
        rows: vec![
            without_key.shares("search, key not held", args.trials),
            with_key.shares("search, key held", args.trials),
            bonus_room.shares("bonus room", args.trials),
        ],
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }
    Ok(())
}

fn print_table(report: &Report) {
    println!("{} trials per row, seed {}", report.trials, report.seed);
    println!(
        "{:<22} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "", "heal", "key", "treasure", "potion", "trap"
    );
    for row in &report.rows {
        println!(
            "{:<22} {:>8.2}% {:>8.2}% {:>8.2}% {:>8.2}% {:>8.2}%",
            row.label,
            row.full_heal * 100.0,
            row.key * 100.0,
            row.treasure * 100.0,
            row.potion * 100.0,
            row.trap * 100.0
        );
    }
}
