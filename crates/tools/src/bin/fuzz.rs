use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{
    Choice, ContentTables, Game, GameConfig, Interrupt, LogEvent, MenuChoice, OfferTiming, Phase,
    RunOutcome,
};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u64,
    /// Steps allowed per run before it counts as stuck
    #[arg(long, default_value_t = 10_000)]
    max_steps: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

#[derive(Default)]
struct Summary {
    cleared: u64,
    defeated: u64,
    abandoned: u64,
    bonus_entries: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let config = GameConfig::default();
    let mut summary = Summary::default();

    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let outcome = play_run(seed, &config, args.max_steps, &mut summary)?;
        match outcome {
            RunOutcome::Cleared => summary.cleared += 1,
            RunOutcome::Defeated => summary.defeated += 1,
            RunOutcome::Abandoned => summary.abandoned += 1,
        }
    }

    println!(
        "Cleared {}, defeated {}, abandoned {}, bonus rooms entered {}",
        summary.cleared, summary.defeated, summary.abandoned, summary.bonus_entries
    );
    println!("Fuzzing completed successfully.");
    Ok(())
}

fn play_run(
    seed: u64,
    config: &GameConfig,
    max_steps: u32,
    summary: &mut Summary,
) -> Result<RunOutcome> {
    let mut game = Game::new(seed, ContentTables::build_default(), config, "Fuzz");
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed_f00d);
    let mut inventory_len = 0;

    for _ in 0..=max_steps {
        match game.phase() {
            Phase::Finished(outcome) => {
                let end_offers = game
                    .log()
                    .iter()
                    .filter(|event| {
                        matches!(event, LogEvent::BonusRoomOffered(OfferTiming::EndOfRun))
                    })
                    .count();
                assert!(end_offers <= 1, "Invariant failed: end-of-run offer repeated");
                debug!("seed {seed} finished {outcome:?}");
                return Ok(outcome);
            }
            Phase::Interrupted(Interrupt::BonusRoomOffer { prompt_id, .. }) => {
                let choice = choose(&mut rng, &[Choice::EnterBonusRoom, Choice::DeclineBonusRoom]);
                let entered =
                    game.apply_choice(prompt_id, choice).expect("fuzz answered a stale prompt");
                if entered.is_some() {
                    summary.bonus_entries += 1;
                }
            }
            Phase::InRoom { .. } => {
                // Bias toward searching so runs see traps and the key.
                let choice = choose(
                    &mut rng,
                    &[
                        MenuChoice::Search,
                        MenuChoice::Search,
                        MenuChoice::Search,
                        MenuChoice::Search,
                        MenuChoice::MoveOn,
                        MenuChoice::MoveOn,
                        MenuChoice::Status,
                        MenuChoice::Quit,
                    ],
                );
                game.take_turn(choice).expect("fuzz took a turn out of phase");
            }
        }

        let player = game.player();
        assert!(player.health <= player.max_health, "Invariant failed: health above maximum");
        let keys_held = player.inventory.iter().filter(|item| *item == game.key_item()).count();
        assert!(keys_held <= 1, "Invariant failed: key duplicated");
        assert!(player.inventory.len() >= inventory_len, "Invariant failed: inventory shrank");
        inventory_len = player.inventory.len();
    }

    bail!("run with seed {seed} did not finish within {max_steps} steps")
}
