use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered player and their lifetime stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub nickname: String,
    pub matches: u32,
    pub best_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<DateTime<Utc>>,
}

impl Player {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
            matches: 0,
            best_score: 0,
            last_played: None,
        }
    }

    /// Count a finished match, keeping the best score.
    pub fn add_match(&mut self, score: u32) {
        self.matches += 1;
        self.best_score = self.best_score.max(score);
        self.last_played = Some(Utc::now());
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Score: {} | Matches: {}",
            self.nickname, self.name, self.best_score, self.matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_fresh() {
        let player = Player::new("Ana", "ana_x");
        assert_eq!(player.matches, 0);
        assert_eq!(player.best_score, 0);
        assert!(player.last_played.is_none());
    }

    #[test]
    fn test_add_match_keeps_best() {
        let mut player = Player::new("Ana", "ana_x");
        player.add_match(12);
        player.add_match(4);
        assert_eq!(player.matches, 2);
        assert_eq!(player.best_score, 12);
        assert!(player.last_played.is_some());
    }

    #[test]
    fn test_display() {
        let mut player = Player::new("Ana", "ana_x");
        player.add_match(7);
        assert_eq!(player.to_string(), "ana_x (Ana) - Score: 7 | Matches: 1");
    }

    #[test]
    fn test_missing_timestamp_deserializes() {
        let json = r#"{"name":"Bo","nickname":"bo","matches":3,"best_score":9}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.matches, 3);
        assert!(player.last_played.is_none());
    }
}
