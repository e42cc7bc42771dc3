//! Flat-file leaderboard store.
//!
//! One `"<name> <score>"` line per entry, append-only. Entries are re-sorted
//! descending by score on load; the file itself is never rewritten.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// A persisted leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: i32,
}

/// Append one entry to the store, creating the file if needed.
pub fn append_entry(path: &Path, name: &str, score: i32) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening leaderboard file {}", path.display()))?;
    writeln!(file, "{} {}", name.trim(), score)
        .with_context(|| format!("writing to leaderboard file {}", path.display()))?;
    Ok(())
}

/// Load all entries, sorted descending by score. A missing or unreadable
/// file yields an empty leaderboard; malformed lines are skipped.
pub fn load_entries(path: &Path) -> Vec<ScoreEntry> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut entries: Vec<ScoreEntry> = text.lines().filter_map(parse_line).collect();
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Names may contain spaces; the score is the last whitespace-separated token.
fn parse_line(line: &str) -> Option<ScoreEntry> {
    let line = line.trim();
    let (name, score) = line.rsplit_once(char::is_whitespace)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let score = score.parse().ok()?;
    Some(ScoreEntry {
        name: name.to_string(),
        score,
    })
}
