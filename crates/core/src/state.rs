pub const ANONYMOUS_PLAYER: &str = "Anonymous";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    /// Append-only during a run; duplicates are allowed.
    pub inventory: Vec<String>,
}

impl PlayerState {
    pub fn new(name: &str, starting_health: u32) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() { ANONYMOUS_PLAYER.to_string() } else { name.to_string() },
            health: starting_health,
            max_health: starting_health,
            inventory: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn holds(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    pub fn collect(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }

    /// Heal by `amount`, capped at `max_health`. Returns the new health.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health
    }

    /// Lose `amount` health, floored at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    pub fn restore_full(&mut self) -> u32 {
        self.health = self.max_health;
        self.health
    }
}
