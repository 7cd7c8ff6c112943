//! The player store: every registered player with their stats, kept in a
//! JSON file in the data directory.

use super::legacy;
use super::types::Player;
use crate::constants::LEGACY_PLAYERS_FILE;
use crate::error::{GameError, Result};
use crate::utils::persistence::{load_json, save_json};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const STORE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct PlayerStore {
    version: u32,
    players: Vec<Player>,
}

#[derive(Debug, Clone)]
pub struct PlayerManager {
    path: PathBuf,
    legacy_path: Option<PathBuf>,
    players: Vec<Player>,
}

impl PlayerManager {
    /// A manager backed by `path`. A `players.txt` next to it is imported on
    /// first load when `path` doesn't exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let legacy_path = Some(path.with_file_name(LEGACY_PLAYERS_FILE));
        Self {
            path,
            legacy_path,
            players: Vec::new(),
        }
    }

    /// Use a different legacy file, or none.
    pub fn with_legacy_path(mut self, legacy_path: Option<PathBuf>) -> Self {
        self.legacy_path = legacy_path;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory players with the file's contents.
    ///
    /// A missing file is not an error: the list starts empty (or from the
    /// legacy file, which is then saved in the new format).
    pub fn load(&mut self) -> Result<()> {
        self.players.clear();

        if self.path.exists() {
            let store: PlayerStore = load_json(&self.path)?;
            self.players = store.players;
            tracing::info!(count = self.players.len(), "loaded players");
            return Ok(());
        }

        if let Some(legacy_path) = self.legacy_path.as_ref().filter(|p| p.exists()) {
            self.players = legacy::import(legacy_path)?;
            self.save()?;
            return Ok(());
        }

        tracing::warn!(path = %self.path.display(), "no player file yet, starting empty");
        Ok(())
    }

    /// Like `load`, but an unparseable store is moved aside to
    /// `<file>.bad` and the list starts empty.
    pub fn load_or_recover(&mut self) -> Result<()> {
        match self.load() {
            Err(GameError::Json(e)) => {
                let backup = self.backup_path();
                tracing::error!(
                    error = %e,
                    backup = %backup.display(),
                    "player file is corrupt, starting empty"
                );
                std::fs::rename(&self.path, &backup)?;
                self.players.clear();
                Ok(())
            }
            other => other,
        }
    }

    /// Where a corrupt store is kept: the file name with `.bad` appended.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".bad");
        self.path.with_file_name(name)
    }

    pub fn save(&self) -> Result<()> {
        let store = PlayerStore {
            version: STORE_VERSION,
            players: self.players.clone(),
        };
        save_json(&self.path, &store)
    }

    pub fn register(&mut self, name: &str, nickname: &str) -> &mut Player {
        tracing::info!(nickname, "registering player");
        self.players.push(Player::new(name, nickname));
        let last = self.players.len() - 1;
        &mut self.players[last]
    }

    pub fn find(&self, nickname: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.nickname == nickname)
    }

    pub fn find_mut(&mut self, nickname: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.nickname == nickname)
    }

    /// Look a player up, registering them under their nickname if absent.
    pub fn find_or_register(&mut self, nickname: &str) -> &mut Player {
        match self.players.iter().position(|p| p.nickname == nickname) {
            Some(i) => &mut self.players[i],
            None => self.register(nickname, nickname),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players by best score, highest first. Ties keep registration order.
    pub fn ranking(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.best_score.cmp(&a.best_score));
        ranked
    }

    /// 1-based ranking position of `nickname`.
    pub fn position_of(&self, nickname: &str) -> Option<usize> {
        self.ranking()
            .iter()
            .position(|p| p.nickname == nickname)
            .map(|i| i + 1)
    }

    /// Highest best score of any player (0 when there are none).
    pub fn best_overall(&self) -> u32 {
        self.players.iter().map(|p| p.best_score).max().unwrap_or(0)
    }

    /// Count a match for `nickname`. Returns false if no such player exists.
    pub fn record_match(&mut self, nickname: &str, score: u32) -> bool {
        match self.find_mut(nickname) {
            Some(player) => {
                player.add_match(score);
                true
            }
            None => false,
        }
    }

    pub fn write_ranking<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Player ranking:")?;
        for (i, player) in self.ranking().iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, player)?;
        }
        Ok(())
    }

    pub fn print_ranking(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_ranking(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::scratch_path;
    use std::fs;

    fn manager_with(players: &[(&str, u32)]) -> PlayerManager {
        let mut manager = PlayerManager::new(scratch_path("unused/players.json"));
        for (nick, score) in players {
            manager.register(nick, nick).add_match(*score);
        }
        manager
    }

    #[test]
    fn test_register_and_find() {
        let mut manager = manager_with(&[]);
        manager.register("Gabriel", "gabriel");
        assert!(manager.find("gabriel").is_some());
        assert!(manager.find("Gabriel").is_none());
    }

    #[test]
    fn test_ranking_sorted_by_best_score() {
        let manager = manager_with(&[("gabriel", 30), ("joao", 10), ("alvaro", 20)]);
        let ranking: Vec<&str> = manager
            .ranking()
            .iter()
            .map(|p| p.nickname.as_str())
            .collect();
        assert_eq!(ranking, vec!["gabriel", "alvaro", "joao"]);
    }

    #[test]
    fn test_ranking_ties_keep_registration_order() {
        let manager = manager_with(&[("first", 5), ("second", 5), ("third", 9)]);
        let ranking = manager.ranking();
        assert_eq!(ranking[1].nickname, "first");
        assert_eq!(ranking[2].nickname, "second");
    }

    #[test]
    fn test_position_and_best_overall() {
        let manager = manager_with(&[("a", 3), ("b", 8)]);
        assert_eq!(manager.position_of("b"), Some(1));
        assert_eq!(manager.position_of("a"), Some(2));
        assert_eq!(manager.position_of("zzz"), None);
        assert_eq!(manager.best_overall(), 8);
        assert_eq!(manager_with(&[]).best_overall(), 0);
    }

    #[test]
    fn test_record_match_unknown_player() {
        let mut manager = manager_with(&[("a", 3)]);
        assert!(!manager.record_match("ghost", 10));
        assert!(manager.record_match("a", 10));
        assert_eq!(manager.find("a").unwrap().best_score, 10);
        assert_eq!(manager.find("a").unwrap().matches, 2);
    }

    #[test]
    fn test_find_or_register_does_not_duplicate() {
        let mut manager = manager_with(&[("a", 3)]);
        manager.find_or_register("a");
        manager.find_or_register("new one");
        assert_eq!(manager.players().len(), 2);
        assert_eq!(manager.find("new one").unwrap().name, "new one");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = scratch_path("roundtrip/players.json");
        let mut manager = PlayerManager::new(&path);
        manager.register("Ana Maria", "ana maria").add_match(12);
        manager.save().unwrap();

        let mut loaded = PlayerManager::new(&path);
        loaded.load().unwrap();
        let player = loaded.find("ana maria").unwrap();
        assert_eq!(player.name, "Ana Maria");
        assert_eq!(player.best_score, 12);

        fs::remove_dir_all(scratch_path("roundtrip")).ok();
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let mut manager = PlayerManager::new(scratch_path("nothing-here/players.json"));
        manager.register("x", "x");
        manager.load().unwrap();
        assert!(manager.players().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let path = scratch_path("corrupt/players.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let mut manager = PlayerManager::new(&path);
        assert!(manager.load().is_err());

        fs::remove_dir_all(scratch_path("corrupt")).ok();
    }

    #[test]
    fn test_corrupt_file_moved_aside() {
        let path = scratch_path("corrupt-recover/players.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"version\":1,\"players\":[").unwrap();

        let mut manager = PlayerManager::new(&path);
        manager.load_or_recover().unwrap();
        assert!(manager.players().is_empty());
        assert!(!path.exists());
        let backup = manager.backup_path();
        assert!(backup.ends_with("players.json.bad"));
        assert_eq!(
            fs::read_to_string(&backup).unwrap(),
            "{\"version\":1,\"players\":["
        );

        // The game can keep saving to the original path
        manager.register("kai", "kai");
        manager.save().unwrap();
        let mut reloaded = PlayerManager::new(&path);
        reloaded.load_or_recover().unwrap();
        assert!(reloaded.find("kai").is_some());

        fs::remove_dir_all(scratch_path("corrupt-recover")).ok();
    }

    #[test]
    fn test_legacy_file_imported_once() {
        let path = scratch_path("legacy/players.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path.with_file_name("players.txt"), "Joao joao 3 14\n").unwrap();

        let mut manager = PlayerManager::new(&path);
        manager.load().unwrap();
        assert_eq!(manager.find("joao").unwrap().matches, 3);
        assert!(path.exists());

        fs::remove_dir_all(scratch_path("legacy")).ok();
    }

    #[test]
    fn test_write_ranking() {
        let manager = manager_with(&[("low", 1), ("high", 9)]);
        let mut out = Vec::new();
        manager.write_ranking(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Player ranking:");
        assert_eq!(lines[1], "  1. high (high) - Score: 9 | Matches: 1");
        assert_eq!(lines[2], "  2. low (low) - Score: 1 | Matches: 1");
    }
}
