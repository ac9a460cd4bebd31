//! Run configuration shared by the front end and the game model.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::content::{ContentTables, keys};

pub const DEFAULT_ROOM_COUNT: u32 = 5;
pub const DEFAULT_STARTING_HEALTH: u32 = 100;
pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.txt";
pub const DEFAULT_TURN_PAUSE_MS: u64 = 1500;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub room_count: u32,
    /// Starting health, which is also the ceiling for every heal.
    pub starting_health: u32,
    pub key_item_name: String,
    pub high_score_location: PathBuf,
    pub turn_pause_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            starting_health: DEFAULT_STARTING_HEALTH,
            key_item_name: keys::KINGS_GOLDEN_KEY.to_string(),
            high_score_location: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            turn_pause_ms: DEFAULT_TURN_PAUSE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("room_count must be at least 1")]
    NoRooms,
    #[error("starting_health must be at least 1")]
    NoStartingHealth,
    #[error("key_item_name must not be empty")]
    EmptyKeyName,
    #[error("key_item_name {0:?} collides with a content table entry")]
    KeyNameCollision(String),
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_count == 0 {
            return Err(ConfigError::NoRooms);
        }
        if self.starting_health == 0 {
            return Err(ConfigError::NoStartingHealth);
        }
        let key = self.key_item_name.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyKeyName);
        }
        if ContentTables::build_default().contains_name(key) {
            return Err(ConfigError::KeyNameCollision(key.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.room_count, 5);
        assert_eq!(config.starting_health, 100);
        assert_eq!(config.key_item_name, "King's Golden Key");
        assert_eq!(config.high_score_location, PathBuf::from("high_score.txt"));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_values() {
        let no_rooms = GameConfig { room_count: 0, ..GameConfig::default() };
        assert_eq!(no_rooms.validate(), Err(ConfigError::NoRooms));

        let no_health = GameConfig { starting_health: 0, ..GameConfig::default() };
        assert_eq!(no_health.validate(), Err(ConfigError::NoStartingHealth));

        let blank_key = GameConfig { key_item_name: "   ".to_string(), ..GameConfig::default() };
        assert_eq!(blank_key.validate(), Err(ConfigError::EmptyKeyName));
    }

    #[test]
    fn rejects_key_that_shadows_a_treasure() {
        let config = GameConfig {
            key_item_name: keys::TREASURE_DIAMOND.to_string(),
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::KeyNameCollision(keys::TREASURE_DIAMOND.to_string()))
        );
    }
}
