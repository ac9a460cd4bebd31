//! Session scoring: treasure value plus remaining health.

use crate::content::ContentTables;
use crate::state::PlayerState;

/// Sum of treasure-table values across the inventory. Items missing from the
/// treasure table (the key included) count for nothing.
pub fn treasure_value(inventory: &[String], content: &ContentTables) -> u32 {
    inventory.iter().filter_map(|item| content.treasure_value(item)).sum()
}

pub fn compute_score(player: &PlayerState, content: &ContentTables) -> u32 {
    treasure_value(&player.inventory, content) + player.health
}
