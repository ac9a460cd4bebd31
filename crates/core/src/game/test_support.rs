//! Shared test fixtures for the `game` submodule test suites.
//! Scripted dice let a test force each branch of the resolvers exactly.

use std::collections::VecDeque;

use super::*;

pub(crate) struct ScriptedDice {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    pub(crate) fn new(rolls: &[f64], picks: &[usize]) -> Self {
        Self { rolls: rolls.iter().copied().collect(), picks: picks.iter().copied().collect() }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.rolls.is_empty() && self.picks.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().expect("scripted dice ran out of rolls")
    }

    fn pick(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().expect("scripted dice ran out of picks");
        assert!(index < len, "scripted pick {index} out of range for {len} items");
        index
    }
}

/// Rolls for a search that skips the full heal and key branches and lands
/// on the given category roll.
pub(crate) fn plain_find(category_roll: f64) -> [f64; 3] {
    [0.99, 0.99, category_roll]
}

pub(crate) fn scripted_game(rolls: &[f64], picks: &[usize]) -> Game<ScriptedDice> {
    Game::with_dice(
        ScriptedDice::new(rolls, picks),
        ContentTables::default(),
        &GameConfig::default(),
        "Tester",
    )
}

pub(crate) fn scripted_game_with_health(
    health: u32,
    rolls: &[f64],
    picks: &[usize],
) -> Game<ScriptedDice> {
    let mut player = PlayerState::new("Tester", GameConfig::default().starting_health);
    player.health = health;
    Game::with_player(
        ScriptedDice::new(rolls, picks),
        ContentTables::default(),
        &GameConfig::default(),
        player,
    )
}

pub(crate) fn count_offers(game: &Game<ScriptedDice>, timing: OfferTiming) -> usize {
    game.log()
        .iter()
        .filter(|event| matches!(event, LogEvent::BonusRoomOffered(t) if *t == timing))
        .count()
}
