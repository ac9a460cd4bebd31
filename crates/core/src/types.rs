use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChoicePromptId(pub u64);

/// One of the four numbered room menu options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    MoveOn,
    Status,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(Self::Search),
            "2" => Ok(Self::MoveOn),
            "3" => Ok(Self::Status),
            "4" => Ok(Self::Quit),
            other => Err(GameError::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Answer to a pending prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    EnterBonusRoom,
    DeclineBonusRoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OfferTiming {
    OnDiscovery,
    EndOfRun,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interrupt {
    BonusRoomOffer { prompt_id: ChoicePromptId, timing: OfferTiming },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindKind {
    Treasure,
    Potion,
    Trap,
}

/// Result of a single search or bonus-room resolution, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    FullHeal,
    KeyFound,
    Treasure { item: &'static str, value: u32 },
    Potion { item: &'static str, heal: u32 },
    Trap { item: &'static str, damage: u32 },
}

impl Outcome {
    pub fn find_kind(&self) -> Option<FindKind> {
        match self {
            Self::Treasure { .. } => Some(FindKind::Treasure),
            Self::Potion { .. } => Some(FindKind::Potion),
            Self::Trap { .. } => Some(FindKind::Trap),
            Self::FullHeal | Self::KeyFound => None,
        }
    }
}

/// An applied outcome together with the player's health afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeReport {
    pub outcome: Outcome,
    pub health: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    pub name: String,
    pub room: u32,
    pub health: u32,
    pub inventory: Vec<String>,
    pub treasure_value: u32,
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every room was passed.
    Cleared,
    /// Health reached zero.
    Defeated,
    /// The player chose to leave.
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    InRoom { room: u32 },
    Interrupted(Interrupt),
    Finished(RunOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    Searched(OutcomeReport),
    Moved { room: u32 },
    Status(StatusReport),
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid menu choice {0:?}")]
    InvalidMenuChoice(String),
    #[error("a bonus room prompt must be answered first")]
    PromptPending,
    #[error("no pending prompt matches this answer")]
    PromptMismatch,
    #[error("the run has already finished")]
    RunFinished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Searched(Outcome),
    MovedOn { room: u32 },
    StatusChecked,
    LeftDungeon,
    BonusRoomOffered(OfferTiming),
    BonusRoomEntered(Outcome),
    BonusRoomDeclined(OfferTiming),
    RunFinished(RunOutcome),
}
