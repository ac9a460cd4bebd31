//! Room menu dispatch and run termination.

use super::*;

impl<D: Dice> Game<D> {
    pub fn take_turn(&mut self, choice: MenuChoice) -> Result<TurnResult, GameError> {
        if self.finished_outcome.is_some() {
            return Err(GameError::RunFinished);
        }
        if self.pending_prompt.is_some() {
            return Err(GameError::PromptPending);
        }

        let result = match choice {
            MenuChoice::Search => TurnResult::Searched(self.search()),
            MenuChoice::MoveOn => {
                self.room += 1;
                self.push_log(LogEvent::MovedOn { room: self.room });
                TurnResult::Moved { room: self.room }
            }
            MenuChoice::Status => {
                self.push_log(LogEvent::StatusChecked);
                TurnResult::Status(self.status())
            }
            MenuChoice::Quit => {
                self.quit_requested = true;
                self.push_log(LogEvent::LeftDungeon);
                TurnResult::Left
            }
        };

        self.settle();
        Ok(result)
    }

    pub(super) fn search(&mut self) -> OutcomeReport {
        let holds_key = self.player.holds(&self.key_item);
        let outcome = resolve_search(&mut self.dice, self.odds, holds_key, &self.content);
        let report = self.apply_outcome(outcome);
        self.push_log(LogEvent::Searched(outcome));
        if outcome == Outcome::KeyFound {
            self.offer_bonus_room(OfferTiming::OnDiscovery);
        }
        report
    }

    /// Ends the room loop once it is over. Does nothing while a prompt is
    /// waiting for an answer.
    pub(super) fn settle(&mut self) {
        if self.pending_prompt.is_some()
            || self.finished_outcome.is_some()
            || self.loop_exit.is_some()
        {
            return;
        }

        let exit = if !self.player.is_alive() {
            RunOutcome::Defeated
        } else if self.quit_requested {
            RunOutcome::Abandoned
        } else if self.room > self.room_count {
            RunOutcome::Cleared
        } else {
            return;
        };
        self.loop_exit = Some(exit);

        if self.player.is_alive() && self.player.holds(&self.key_item) && !self.end_offer_made {
            self.offer_bonus_room(OfferTiming::EndOfRun);
        } else {
            self.finish();
        }
    }

    pub(super) fn finish(&mut self) {
        // A trap in the end-of-run bonus room can still be fatal.
        let outcome = if self.player.is_alive() {
            self.loop_exit.unwrap_or(RunOutcome::Cleared)
        } else {
            RunOutcome::Defeated
        };
        self.finished_outcome = Some(outcome);
        self.push_log(LogEvent::RunFinished(outcome));
    }
}
