use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::content::ContentTables;
use crate::dice::{self, Dice};
use crate::score::{compute_score, treasure_value};
use crate::state::PlayerState;
use crate::types::*;

mod prompts;
mod resolve;
mod turn;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

use prompts::PendingPrompt;
pub use resolve::{FindOdds, SearchOdds, resolve_find, resolve_search};

/// One run through the dungeon: the room loop plus any bonus-room prompts.
/// Owns the session's content tables, player and dice; performs no I/O.
pub struct Game<D: Dice = ChaCha8Rng> {
    dice: D,
    odds: SearchOdds,
    content: ContentTables,
    player: PlayerState,
    key_item: String,
    room: u32,
    room_count: u32,
    log: Vec<LogEvent>,
    next_prompt_seq: u64,
    pending_prompt: Option<PendingPrompt>,
    // Why the room loop ended; set before any end-of-run offer is answered.
    loop_exit: Option<RunOutcome>,
    quit_requested: bool,
    end_offer_made: bool,
    finished_outcome: Option<RunOutcome>,
}

impl Game<ChaCha8Rng> {
    pub fn new(seed: u64, content: ContentTables, config: &GameConfig, player_name: &str) -> Self {
        debug!("new run seeded with {seed}");
        Self::with_dice(dice::seeded(seed), content, config, player_name)
    }
}

impl<D: Dice> Game<D> {
    pub fn with_dice(
        dice: D,
        content: ContentTables,
        config: &GameConfig,
        player_name: &str,
    ) -> Self {
        let player = PlayerState::new(player_name, config.starting_health);
        Self::with_player(dice, content, config, player)
    }

    /// Start a run from an existing player record instead of a fresh one.
    pub fn with_player(
        dice: D,
        content: ContentTables,
        config: &GameConfig,
        player: PlayerState,
    ) -> Self {
        let mut game = Self {
            dice,
            odds: SearchOdds::STANDARD,
            content,
            player,
            key_item: config.key_item_name.trim().to_string(),
            room: 1,
            room_count: config.room_count,
            log: Vec::new(),
            next_prompt_seq: 0,
            pending_prompt: None,
            loop_exit: None,
            quit_requested: false,
            end_offer_made: false,
            finished_outcome: None,
        };
        game.settle();
        game
    }

    /// Replace the search odds, e.g. to switch off the rare branches.
    pub fn set_search_odds(&mut self, odds: SearchOdds) {
        self.odds = odds;
    }

    pub fn phase(&self) -> Phase {
        if let Some(outcome) = self.finished_outcome {
            return Phase::Finished(outcome);
        }
        if let Some(prompt) = self.pending_prompt {
            return Phase::Interrupted(prompt.to_interrupt());
        }
        Phase::InRoom { room: self.room }
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            name: self.player.name.clone(),
            room: self.room.min(self.room_count),
            health: self.player.health,
            inventory: self.player.inventory.clone(),
            treasure_value: treasure_value(&self.player.inventory, &self.content),
            score: compute_score(&self.player, &self.content),
        }
    }

    pub fn score(&self) -> u32 {
        compute_score(&self.player, &self.content)
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn content(&self) -> &ContentTables {
        &self.content
    }

    pub fn key_item(&self) -> &str {
        &self.key_item
    }

    pub fn room(&self) -> u32 {
        self.room
    }

    pub fn room_count(&self) -> u32 {
        self.room_count
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    fn push_log(&mut self, event: LogEvent) {
        debug!("{}: {event:?}", self.player.name);
        self.log.push(event);
    }

    /// Apply a resolved outcome to the player.
    fn apply_outcome(&mut self, outcome: Outcome) -> OutcomeReport {
        let health = match outcome {
            Outcome::FullHeal => self.player.restore_full(),
            Outcome::KeyFound => {
                let key = self.key_item.clone();
                self.player.collect(&key);
                self.player.health
            }
            Outcome::Treasure { item, .. } => {
                self.player.collect(item);
                self.player.health
            }
            Outcome::Potion { heal, .. } => self.player.heal(heal),
            Outcome::Trap { damage, .. } => self.player.take_damage(damage),
        };
        OutcomeReport { outcome, health }
    }
}
