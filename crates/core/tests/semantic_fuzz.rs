use dungeon_core::{
    Choice, ContentTables, Game, GameConfig, Interrupt, LogEvent, MenuChoice, OfferTiming, Phase,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn run_fuzz_simulation(game_seed: u64, choice_seed: u64, max_turns: u32) -> Result<(), String> {
    let config = GameConfig::default();
    let mut game = Game::new(game_seed, ContentTables::default(), &config, "Fuzz");
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
    let mut inventory_len = 0;

    for _ in 0..max_turns {
        match game.phase() {
            Phase::Finished(_) => break,
            Phase::Interrupted(Interrupt::BonusRoomOffer { prompt_id, .. }) => {
                let choice = choose(&mut rng, &[Choice::EnterBonusRoom, Choice::DeclineBonusRoom]);
                game.apply_choice(prompt_id, choice).map_err(|e| e.to_string())?;
            }
            Phase::InRoom { .. } => {
                // Weighted towards searching so runs see plenty of outcomes.
                let choice = choose(
                    &mut rng,
                    &[
                        MenuChoice::Search,
                        MenuChoice::Search,
                        MenuChoice::Search,
                        MenuChoice::MoveOn,
                        MenuChoice::Status,
                    ],
                );
                game.take_turn(choice).map_err(|e| e.to_string())?;
            }
        }

        let player = game.player();
        if player.health > config.starting_health {
            return Err(format!("Invariant failed: health above maximum on seed {game_seed}"));
        }
        let keys = player.inventory.iter().filter(|item| *item == game.key_item()).count();
        if keys > 1 {
            return Err(format!("Invariant failed: duplicate key on seed {game_seed}"));
        }
        if player.inventory.len() < inventory_len {
            return Err(format!("Invariant failed: inventory shrank on seed {game_seed}"));
        }
        inventory_len = player.inventory.len();
    }

    if !matches!(game.phase(), Phase::Finished(_)) {
        return Err(format!("Invariant failed: run did not finish on seed {game_seed}"));
    }
    let end_offers = game
        .log()
        .iter()
        .filter(|event| **event == LogEvent::BonusRoomOffered(OfferTiming::EndOfRun))
        .count();
    if end_offers > 1 {
        return Err(format!("Invariant failed: end-of-run offer repeated on seed {game_seed}"));
    }
    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(game_seed, choice_seed)| {
            run_fuzz_simulation(game_seed, choice_seed, 2000).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
