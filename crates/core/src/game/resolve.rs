//! Weighted outcome resolution for room searches and the bonus room.
//! Functions here only read state and draw from the dice; applying the
//! result is the caller's job.

use crate::content::{ContentItem, ContentTables};
use crate::dice::Dice;
use crate::types::{FindKind, Outcome};

/// Partition of a single `[0, 1)` draw into treasure, potion and trap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FindOdds {
    pub treasure_below: f64,
    pub potion_below: f64,
}

impl FindOdds {
    pub const ROOM: Self = Self { treasure_below: 0.30, potion_below: 0.50 };
    pub const BONUS_ROOM: Self = Self { treasure_below: 0.45, potion_below: 0.70 };

    pub fn classify(self, roll: f64) -> FindKind {
        if roll < self.treasure_below {
            FindKind::Treasure
        } else if roll < self.potion_below {
            FindKind::Potion
        } else {
            FindKind::Trap
        }
    }
}

/// Ordered branches of a room search. Each early branch takes its own draw
/// and ends the turn when it fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOdds {
    pub full_heal: f64,
    pub key: f64,
    pub find: FindOdds,
}

impl SearchOdds {
    pub const STANDARD: Self = Self { full_heal: 0.12, key: 0.08, find: FindOdds::ROOM };
}

impl Default for SearchOdds {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub fn resolve_search<D: Dice + ?Sized>(
    dice: &mut D,
    odds: SearchOdds,
    holds_key: bool,
    content: &ContentTables,
) -> Outcome {
    if dice.roll() < odds.full_heal {
        return Outcome::FullHeal;
    }
    // No draw at all once the key is held.
    if !holds_key && dice.roll() < odds.key {
        return Outcome::KeyFound;
    }
    resolve_find(dice, odds.find, content)
}

pub fn resolve_find<D: Dice + ?Sized>(
    dice: &mut D,
    odds: FindOdds,
    content: &ContentTables,
) -> Outcome {
    match odds.classify(dice.roll()) {
        FindKind::Treasure => {
            let item = pick_item(dice, &content.treasures);
            Outcome::Treasure { item: item.name, value: item.amount }
        }
        FindKind::Potion => {
            let item = pick_item(dice, &content.potions);
            Outcome::Potion { item: item.name, heal: item.amount }
        }
        FindKind::Trap => {
            let item = pick_item(dice, &content.traps);
            Outcome::Trap { item: item.name, damage: item.amount }
        }
    }
}

fn pick_item<D: Dice + ?Sized>(dice: &mut D, items: &[ContentItem]) -> ContentItem {
    items[dice.pick(items.len())]
}
