pub mod config;
pub mod content;
pub mod dice;
pub mod game;
pub mod score;
pub mod state;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use content::{ContentItem, ContentTables};
pub use dice::Dice;
pub use game::{FindOdds, Game, SearchOdds};
pub use score::{compute_score, treasure_value};
pub use state::PlayerState;
pub use types::*;
