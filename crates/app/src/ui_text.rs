//! Text for menus, outcomes, status screens and end-of-session messages.

use dungeon_core::{OfferTiming, Outcome, OutcomeReport, StatusReport};

use crate::format_score;

pub const WELCOME: &str = "Welcome treasure hunters and adventurers 💀 🗡️, \
     enter the Dungeon of Death and collect treasure if you dare!";
pub const NAME_PROMPT: &str = "Player, your name: ";
pub const MENU_PROMPT: &str = "> ";
pub const INVALID_CHOICE: &str = "Please select 1, 2, 3, or 4.";
pub const MOVED_ON: &str = "⏭️  Passing onto the next room...";
pub const LEAVING: &str = "👣 You are leaving the dungeon...";
pub const PLAY_AGAIN_PROMPT: &str = "\nPlay again? (y/n): ";
pub const FAREWELL: &str = "Until we meet again adventurer!";

pub fn menu_lines(room: u32) -> Vec<String> {
    vec![
        format!("\n--- Room {room} ---"),
        "1) Search for treasure".to_string(),
        "2) Move forward to the next room".to_string(),
        "3) Check health and inventory".to_string(),
        "4) Quit the game".to_string(),
    ]
}

pub fn search_text(report: &OutcomeReport, key_item: &str) -> String {
    match report.outcome {
        Outcome::FullHeal => {
            format!("🐦‍🔥 💧 You found Phoenix Tears! Full recovery to {} HP!", report.health)
        }
        Outcome::KeyFound => {
            format!(
                "🗝️  You found the {key_item}! It might open a hidden door, \
                 search if you dare..."
            )
        }
        Outcome::Treasure { item, value } => format!("💰 You found a {item}! (+{value} value)"),
        Outcome::Potion { item, heal } => {
            format!("🏺 You obtained {item}! (+{heal} HP, now {})", report.health)
        }
        Outcome::Trap { item, damage } => {
            format!("☠️  You triggered a {item}! -{damage} HP, remaining: {}", report.health)
        }
    }
}

pub fn offer_prompt(timing: OfferTiming) -> &'static str {
    match timing {
        OfferTiming::OnDiscovery => "\nDo you wish to enter the BONUS ROOM now? (y/n): ",
        OfferTiming::EndOfRun => {
            "A hidden passage way opens, do you wish to enter the BONUS ROOM? (y/n): "
        }
    }
}

pub fn declined_text(timing: OfferTiming) -> &'static str {
    match timing {
        OfferTiming::OnDiscovery => "The passage fades back into the shadows...",
        OfferTiming::EndOfRun => "The passage closes.",
    }
}

pub const BONUS_ROOM_ENTRY: &str =
    "\n ✨ A hidden gateway is revealed...welcome to the BONUS ROOM!";

/// Bonus-room finds get their own wording; anything else reads as it would
/// in a room search.
pub fn bonus_text(report: &OutcomeReport, key_item: &str) -> String {
    match report.outcome {
        Outcome::Treasure { item, value } => {
            format!("BONUS FIND! You found a {item}! (+{value} value)")
        }
        Outcome::Potion { item, heal } => {
            format!("Excellent! {item} heals you (+{heal} HP, now {})", report.health)
        }
        Outcome::Trap { item, damage } => {
            format!("💣 You triggered a {item}! (-{damage} HP, remaining {})", report.health)
        }
        Outcome::FullHeal | Outcome::KeyFound => search_text(report, key_item),
    }
}

fn inventory_line(label: &str, inventory: &[String]) -> String {
    if inventory.is_empty() {
        "Inventory: (empty)".to_string()
    } else {
        format!("{label}: {}", inventory.join(", "))
    }
}

pub fn status_lines(status: &StatusReport) -> Vec<String> {
    vec![
        "\n--- Status ---".to_string(),
        format!("🌡️ Health: {}", status.health),
        inventory_line("Inventory", &status.inventory),
        format!("Treasure Value: {}", status.treasure_value),
        format!("🏆 Current Score: {}", format_score(status.score)),
    ]
}

pub fn game_over_lines(status: &StatusReport) -> Vec<String> {
    vec![
        "\n=== GAME OVER ===".to_string(),
        format!("Final Health: {}", status.health),
        inventory_line("Final Inventory", &status.inventory),
        format!("Total Treasure Value: {}", status.treasure_value),
    ]
}

/// Both slots show the high score read before saving; players have only
/// ever seen it this way.
pub fn new_high_score_text(previous_high: u64) -> String {
    format!("\n 🎉 New High Score: {previous_high}  (Previous: {previous_high})")
}
