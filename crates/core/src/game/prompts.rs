//! Bonus-room prompt lifecycle: opening offers and applying answers.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct PendingPrompt {
    pub(super) id: ChoicePromptId,
    pub(super) timing: OfferTiming,
}

impl PendingPrompt {
    pub(super) fn to_interrupt(self) -> Interrupt {
        Interrupt::BonusRoomOffer { prompt_id: self.id, timing: self.timing }
    }
}

impl<D: Dice> Game<D> {
    pub(super) fn offer_bonus_room(&mut self, timing: OfferTiming) {
        let prompt = PendingPrompt { id: ChoicePromptId(self.next_prompt_seq), timing };
        self.next_prompt_seq += 1;
        self.pending_prompt = Some(prompt);
        if timing == OfferTiming::EndOfRun {
            self.end_offer_made = true;
        }
        self.push_log(LogEvent::BonusRoomOffered(timing));
    }

    /// Answer the pending bonus-room offer. Returns the bonus-room outcome
    /// when the player went in.
    pub fn apply_choice(
        &mut self,
        prompt_id: ChoicePromptId,
        choice: Choice,
    ) -> Result<Option<OutcomeReport>, GameError> {
        if self.finished_outcome.is_some() {
            return Err(GameError::RunFinished);
        }
        let Some(prompt) = self.pending_prompt else {
            return Err(GameError::PromptMismatch);
        };
        if prompt.id != prompt_id {
            return Err(GameError::PromptMismatch);
        }
        self.pending_prompt = None;

        let report = match choice {
            Choice::EnterBonusRoom => {
                let outcome = resolve_find(&mut self.dice, FindOdds::BONUS_ROOM, &self.content);
                let report = self.apply_outcome(outcome);
                self.push_log(LogEvent::BonusRoomEntered(outcome));
                Some(report)
            }
            Choice::DeclineBonusRoom => {
                self.push_log(LogEvent::BonusRoomDeclined(prompt.timing));
                None
            }
        };

        match prompt.timing {
            OfferTiming::OnDiscovery => self.settle(),
            OfferTiming::EndOfRun => self.finish(),
        }
        Ok(report)
    }
}
