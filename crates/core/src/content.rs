//! Fixed content tables: treasures, traps and potions.

pub mod keys {
    pub const TREASURE_GOLD_COIN: &str = "Gold Coin";
    pub const TREASURE_DIAMOND: &str = "Diamond";
    pub const TREASURE_STARDUST: &str = "Stardust";
    pub const TREASURE_MAGIC_SWORD: &str = "Magic Sword";
    pub const TREASURE_PHILOSOPHERS_HEART: &str = "Philosopher's Heart";

    pub const TRAP_POISON_GAS: &str = "Poison Gas";
    pub const TRAP_SNAKE_PIT: &str = "Snake Pit";
    pub const TRAP_RUNAWAY_BOULDER: &str = "Runaway Boulder";
    pub const TRAP_DEMON_GHOST: &str = "Demon Ghost Boo";
    pub const TRAP_ELITE_TROLL: &str = "Elite Troll";

    pub const POTION_ORDINARY_HEALING: &str = "Ordinary Healing Potion";
    pub const POTION_THUNDER_HEALING: &str = "Healing Elemental Thunder Potion";

    /// Inventory-only marker; deliberately absent from every table.
    pub const KINGS_GOLDEN_KEY: &str = "King's Golden Key";
}

/// A named table entry. `amount` is a treasure value, trap damage or heal
/// amount depending on the table it lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub name: &'static str,
    pub amount: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentTables {
    pub treasures: Vec<ContentItem>,
    pub traps: Vec<ContentItem>,
    pub potions: Vec<ContentItem>,
}

impl ContentTables {
    pub fn build_default() -> Self {
        Self {
            treasures: vec![
                ContentItem { name: keys::TREASURE_GOLD_COIN, amount: 10 },
                ContentItem { name: keys::TREASURE_DIAMOND, amount: 40 },
                ContentItem { name: keys::TREASURE_STARDUST, amount: 60 },
                ContentItem { name: keys::TREASURE_MAGIC_SWORD, amount: 80 },
                ContentItem { name: keys::TREASURE_PHILOSOPHERS_HEART, amount: 100 },
            ],
            traps: vec![
                ContentItem { name: keys::TRAP_POISON_GAS, amount: 10 },
                ContentItem { name: keys::TRAP_SNAKE_PIT, amount: 20 },
                ContentItem { name: keys::TRAP_RUNAWAY_BOULDER, amount: 30 },
                ContentItem { name: keys::TRAP_DEMON_GHOST, amount: 40 },
                ContentItem { name: keys::TRAP_ELITE_TROLL, amount: 50 },
            ],
            potions: vec![
                ContentItem { name: keys::POTION_ORDINARY_HEALING, amount: 10 },
                ContentItem { name: keys::POTION_THUNDER_HEALING, amount: 50 },
            ],
        }
    }

    /// Value of a treasure by name. Anything not in the treasure table,
    /// including the key, has no value.
    pub fn treasure_value(&self, name: &str) -> Option<u32> {
        self.treasures.iter().find(|item| item.name == name).map(|item| item.amount)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.treasures
            .iter()
            .chain(&self.traps)
            .chain(&self.potions)
            .any(|item| item.name == name)
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self::build_default()
    }
}
