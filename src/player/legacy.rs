//! Import of the old plain-text player file.
//!
//! Each line held `name nickname matches best_score`, whitespace separated.
//! The file is read once, when no JSON store exists yet.

use super::types::Player;
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Parse one legacy line (`line_no` is 1-based, for error messages).
///
/// Nicknames could contain spaces, and players were always registered with
/// the nickname as their name, so `ana maria ana maria 2 7` is one record.
pub fn parse_line(line_no: usize, line: &str) -> Result<Player> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let invalid = |reason: String| GameError::LegacyRecord {
        line: line_no,
        reason,
    };
    if fields.len() < 4 || fields.len() % 2 != 0 {
        return Err(invalid(format!(
            "expected an even number of fields (at least 4), found {}",
            fields.len()
        )));
    }

    let (words, counts) = fields.split_at(fields.len() - 2);
    let (name, nickname) = if words.len() == 2 {
        (words[0].to_string(), words[1].to_string())
    } else {
        let (first, second) = words.split_at(words.len() / 2);
        if first != second {
            return Err(invalid(format!(
                "can't tell name from nickname in {:?}",
                words.join(" ")
            )));
        }
        let joined = first.join(" ");
        (joined.clone(), joined)
    };

    let parse_count = |field: &str, what: &str| {
        field
            .parse::<u32>()
            .map_err(|_| invalid(format!("{} is not a number: {:?}", what, field)))
    };

    let mut player = Player::new(name, nickname);
    player.matches = parse_count(counts[0], "matches")?;
    player.best_score = parse_count(counts[1], "best score")?;
    Ok(player)
}

/// Parse a whole legacy file, skipping blank and malformed lines.
pub fn parse(content: &str) -> Vec<Player> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| match parse_line(i + 1, line) {
            Ok(player) => Some(player),
            Err(e) => {
                tracing::warn!(error = %e, "skipping legacy player record");
                None
            }
        })
        .collect()
}

/// Read the legacy file at `path`.
pub fn import(path: &Path) -> Result<Vec<Player>> {
    let content = fs::read_to_string(path)?;
    let players = parse(&content);
    tracing::info!(
        path = %path.display(),
        count = players.len(),
        "imported legacy player file"
    );
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let player = parse_line(1, "Gabriel gabriel 4 30").unwrap();
        assert_eq!(player.name, "Gabriel");
        assert_eq!(player.nickname, "gabriel");
        assert_eq!(player.matches, 4);
        assert_eq!(player.best_score, 30);
    }

    #[test]
    fn test_parse_line_rejects_wrong_field_count() {
        let err = parse_line(2, "only three fields").unwrap_err();
        assert!(matches!(err, GameError::LegacyRecord { line: 2, .. }));
    }

    #[test]
    fn test_parse_line_with_spaced_nickname() {
        let player = parse_line(1, "ana maria ana maria 2 7").unwrap();
        assert_eq!(player.name, "ana maria");
        assert_eq!(player.nickname, "ana maria");
        assert_eq!((player.matches, player.best_score), (2, 7));

        // Halves that differ can't be split reliably
        assert!(parse_line(1, "ana maria ana paula 2 7").is_err());
        assert!(parse_line(1, "a b c 1 2").is_err());
    }

    #[test]
    fn test_parse_keeps_spaced_players() {
        let players = parse("ana maria ana maria 2 7\nJoao joao 1 5\n");
        let nicknames: Vec<&str> = players.iter().map(|p| p.nickname.as_str()).collect();
        assert_eq!(nicknames, vec!["ana maria", "joao"]);
    }

    #[test]
    fn test_parse_line_rejects_bad_number() {
        assert!(parse_line(1, "a b c 3").is_err());
        assert!(parse_line(1, "a b 3 -1").is_err());
    }

    #[test]
    fn test_parse_skips_bad_lines() {
        let content = "Ana ana 2 10\n\ngarbage\nJoao joao 1 5\n";
        let players = parse(content);
        assert_eq!(players.len(), 2);
        assert_eq!(players[1].nickname, "joao");
    }
}
