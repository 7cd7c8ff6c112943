//! Top-10 ranking screen.

use crate::constants::RANKING_TOP;
use crate::player::PlayerManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingRow {
    pub position: usize,
    pub nickname: String,
    pub best_score: u32,
    pub matches: u32,
    /// Row belongs to the player who opened the screen.
    pub is_current: bool,
}

/// Line under the table, about the player who opened the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingFooter {
    Position(usize),
    NotPlayedYet,
    LowScore,
}

impl RankingFooter {
    pub fn message(&self) -> String {
        match self {
            RankingFooter::Position(n) => format!("Your position: {}", n),
            RankingFooter::NotPlayedYet => "You haven't played yet!".to_string(),
            RankingFooter::LowScore => "No ranking entry (low score).".to_string(),
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, RankingFooter::Position(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingView {
    pub rows: Vec<RankingRow>,
    pub footer: RankingFooter,
}

#[derive(Debug, Clone, Default)]
pub struct RankingScreen {
    current_player: Option<String>,
}

impl RankingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the screen for `nickname` (None when nobody registered is typed in).
    pub fn open(&mut self, nickname: Option<String>) {
        self.current_player = nickname;
    }

    pub fn current_player(&self) -> Option<&str> {
        self.current_player.as_deref()
    }

    pub fn view(&self, players: &PlayerManager) -> RankingView {
        let current = self.current_player.as_deref();
        let rows = players
            .ranking()
            .into_iter()
            .take(RANKING_TOP)
            .enumerate()
            .map(|(i, p)| RankingRow {
                position: i + 1,
                nickname: p.nickname.clone(),
                best_score: p.best_score,
                matches: p.matches,
                is_current: Some(p.nickname.as_str()) == current,
            })
            .collect();

        let footer = match current.and_then(|nick| players.find(nick)) {
            None => RankingFooter::NotPlayedYet,
            Some(player) if player.matches == 0 => RankingFooter::NotPlayedYet,
            Some(player) => match players.position_of(&player.nickname) {
                Some(pos) if pos <= RANKING_TOP => RankingFooter::Position(pos),
                _ => RankingFooter::LowScore,
            },
        };

        RankingView { rows, footer }
    }
}
