/// Counts pipes passed in the current run.
#[derive(Debug, Clone, Default)]
pub struct ScoreManager {
    score: u32,
}

impl ScoreManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn increment(&mut self) {
        self.score += 1;
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
