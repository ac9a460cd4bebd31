//! Statistical checks of the search partitions using seeded dice.

use super::support::*;

const TRIALS: usize = 10_000;

fn tally(outcomes: impl Iterator<Item = Outcome>) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for outcome in outcomes {
        match outcome.find_kind() {
            Some(FindKind::Treasure) => counts[0] += 1,
            Some(FindKind::Potion) => counts[1] += 1,
            Some(FindKind::Trap) => counts[2] += 1,
            None => panic!("rare branch fired with zero odds: {outcome:?}"),
        }
    }
    counts
}

fn assert_near(count: usize, expected: f64) {
    let share = count as f64 / TRIALS as f64;
    // Roughly four standard deviations at n = 10k.
    assert!((share - expected).abs() < 0.025, "share {share:.4} too far from {expected}");
}

#[test]
fn room_search_without_rare_branches_splits_30_20_50() {
    let odds = SearchOdds { full_heal: 0.0, key: 0.0, ..SearchOdds::STANDARD };
    let mut game = Game::new(2024, ContentTables::default(), &GameConfig::default(), "Stats");
    game.set_search_odds(odds);

    // Bypasses the menu so a fatal trap cannot end the run mid-sample.
    let outcomes = (0..TRIALS).map(|_| {
        game.player.health = 50;
        game.search().outcome
    });

    let [treasure, potion, trap] = tally(outcomes);
    assert_near(treasure, 0.30);
    assert_near(potion, 0.20);
    assert_near(trap, 0.50);
}

#[test]
fn bonus_room_splits_45_25_30() {
    let content = ContentTables::default();
    let mut dice = seeded(99);
    let [treasure, potion, trap] =
        tally((0..TRIALS).map(|_| resolve_find(&mut dice, FindOdds::BONUS_ROOM, &content)));
    assert_near(treasure, 0.45);
    assert_near(potion, 0.25);
    assert_near(trap, 0.30);
}

#[test]
fn standard_odds_show_rare_branches_first() {
    let content = ContentTables::default();
    let mut dice = seeded(5);
    let mut full_heals = 0usize;
    let mut keys_found = 0usize;
    for _ in 0..TRIALS {
        match resolve_search(&mut dice, SearchOdds::STANDARD, false, &content) {
            Outcome::FullHeal => full_heals += 1,
            Outcome::KeyFound => keys_found += 1,
            _ => {}
        }
    }
    assert_near(full_heals, 0.12);
    assert_near(keys_found, 0.88 * 0.08);
}
