//! Session driver: name prompt, one run through the rooms, scoring against
//! the stored high score, then the replay prompt.

use anyhow::Result;
use dungeon_core::{
    Choice, ChoicePromptId, ContentTables, Game, GameConfig, Interrupt, MenuChoice, OfferTiming,
    Phase, RunOutcome, TurnResult,
};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::console::Console;
use crate::high_score_file::HighScoreFile;
use crate::seed::session_seed;
use crate::{reason_code, ui_text};

/// What one finished session left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub name: String,
    pub seed: u64,
    pub outcome: RunOutcome,
    pub score: u32,
    /// The score beat the stored high score and was written successfully.
    pub high_score_saved: bool,
}

pub struct SessionDriver<'a> {
    config: &'a GameConfig,
    high_scores: HighScoreFile,
    base_seed: u64,
}

impl<'a> SessionDriver<'a> {
    pub fn new(config: &'a GameConfig, base_seed: u64) -> Self {
        Self { config, high_scores: HighScoreFile::new(&config.high_score_location), base_seed }
    }

    /// Play sessions until the player declines to play again.
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Vec<SessionRecord>> {
        console.say(ui_text::WELCOME)?;
        let mut records = Vec::new();
        let mut index = 0u64;
        loop {
            let record = self.play_session(console, session_seed(self.base_seed, index))?;
            records.push(record);
            index += 1;

            if !console.confirm(ui_text::PLAY_AGAIN_PROMPT)? {
                console.say(ui_text::FAREWELL)?;
                return Ok(records);
            }
        }
    }

    pub fn play_session<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        seed: u64,
    ) -> Result<SessionRecord> {
        let name = console.ask(ui_text::NAME_PROMPT)?.unwrap_or_default();
        let mut game = Game::new(seed, ContentTables::build_default(), self.config, &name);
        info!("session for {} started with seed {seed}", game.player().name);

        let outcome = self.run_rooms(console, &mut game)?;
        let status = game.status();
        console.say_all(&ui_text::game_over_lines(&status))?;

        let score = status.score;
        let high = self.high_scores.load();
        let mut high_score_saved = false;
        if u64::from(score) > high {
            high_score_saved = self.high_scores.save(score);
            console.say(&ui_text::new_high_score_text(high))?;
        }
        info!("session for {} over: {} with score {score}", status.name, reason_code(outcome));

        Ok(SessionRecord { name: status.name, seed, outcome, score, high_score_saved })
    }

    fn run_rooms<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        game: &mut Game,
    ) -> Result<RunOutcome> {
        loop {
            match game.phase() {
                Phase::Finished(outcome) => return Ok(outcome),
                Phase::Interrupted(Interrupt::BonusRoomOffer { prompt_id, timing }) => {
                    answer_offer(console, game, prompt_id, timing)?;
                }
                Phase::InRoom { room } => {
                    console.say_all(&ui_text::menu_lines(room))?;
                    // Closed input leaves the dungeon.
                    let choice = match console.ask(ui_text::MENU_PROMPT)? {
                        Some(input) => input.parse::<MenuChoice>(),
                        None => Ok(MenuChoice::Quit),
                    };
                    match choice {
                        Ok(choice) => take_turn(console, game, choice)?,
                        Err(err) => {
                            debug!("{err}");
                            console.say(ui_text::INVALID_CHOICE)?;
                        }
                    }
                    self.pause();
                }
            }
        }
    }

    fn pause(&self) {
        if self.config.turn_pause_ms > 0 {
            thread::sleep(Duration::from_millis(self.config.turn_pause_ms));
        }
    }
}

fn take_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
    choice: MenuChoice,
) -> Result<()> {
    match game.take_turn(choice)? {
        TurnResult::Searched(report) => {
            console.say(&ui_text::search_text(&report, game.key_item()))?;
            // A fresh key is offered within the same turn.
            if let Phase::Interrupted(Interrupt::BonusRoomOffer {
                prompt_id,
                timing: OfferTiming::OnDiscovery,
            }) = game.phase()
            {
                answer_offer(console, game, prompt_id, OfferTiming::OnDiscovery)?;
            }
        }
        TurnResult::Moved { .. } => console.say(ui_text::MOVED_ON)?,
        TurnResult::Status(status) => console.say_all(&ui_text::status_lines(&status))?,
        TurnResult::Left => console.say(ui_text::LEAVING)?,
    }
    Ok(())
}

fn answer_offer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
    prompt_id: ChoicePromptId,
    timing: OfferTiming,
) -> Result<()> {
    let choice = if console.confirm(ui_text::offer_prompt(timing))? {
        Choice::EnterBonusRoom
    } else {
        Choice::DeclineBonusRoom
    };
    debug!("bonus room offer {timing:?} answered with {choice:?}");

    match game.apply_choice(prompt_id, choice)? {
        Some(report) => {
            console.say(ui_text::BONUS_ROOM_ENTRY)?;
            console.say(&ui_text::bonus_text(&report, game.key_item()))?;
        }
        None => console.say(ui_text::declined_text(timing))?,
    }
    Ok(())
}
