//! Player state

/// Player component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    health: i32,
    score: u32,
}

impl Player {
    /// Create a player with full health and no score
    pub fn new(health: i32) -> Self {
        Self { health, score: 0 }
    }

    /// Remaining health
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Enemies destroyed so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether health has dropped to zero or below
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remove health and return what is left
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    /// Count a destroyed enemy and return the new score
    pub fn add_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}
