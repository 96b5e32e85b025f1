// src/players.rs

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::config::consts::PLAYER_INDEX_FILE;
use crate::core::net::StatsClient;
use crate::core::sanitize::fold_name;
use crate::csv::{read_table, write_table};
use crate::error::Result;
use crate::specs::player_index::{self, PlayerEntry};
use crate::store;

/* ---------------- Player list ---------------- */

/// Trim, drop blanks, drop repeats. First occurrence keeps its place.
pub fn dedupe_players<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    names.iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty() && seen.insert(*n))
        .map(|n| s!(n))
        .collect()
}

/// One name per line, deduplicated.
pub fn read_players(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(crate::error::Error::MissingFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(dedupe_players(&text.lines().collect::<Vec<_>>()))
}

/// Rewrite a player list without duplicates. Returns (read, kept).
pub fn clean_players_file(src: &Path, dst: &Path) -> Result<(usize, usize)> {
    let text = fs::read_to_string(src)?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let kept = dedupe_players(&lines);

    crate::file::ensure_parent(dst)?;
    let mut buf = kept.join("\n");
    if !buf.is_empty() { buf.push('\n'); }
    fs::write(dst, buf)?;

    logf!("Players: {} -> {} ({} lines, {} unique)", src.display(), dst.display(), lines.len(), kept.len());
    Ok((lines.len(), kept.len()))
}

/* ---------------- Player index ---------------- */

/// Provider ids by folded name.
#[derive(Clone, Debug, Default)]
pub struct PlayerIndex {
    entries: Vec<PlayerEntry>,
    by_key: HashMap<String, u32>,
}

impl PlayerIndex {
    /// On a folded-name collision the first entry wins.
    pub fn from_entries(entries: Vec<PlayerEntry>) -> Self {
        let mut by_key = HashMap::with_capacity(entries.len());
        for e in &entries {
            by_key.entry(fold_name(&e.name)).or_insert(e.id);
        }
        Self { entries, by_key }
    }

    pub fn find_id(&self, name: &str) -> Option<u32> {
        self.by_key.get(&fold_name(name)).copied()
    }

    pub fn entries(&self) -> &[PlayerEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Load the index from `.store` or the provider. A fresh fetch rewrites the cache.
pub fn load_index(client: &StatsClient, season: &str, refresh: bool) -> Result<PlayerIndex> {
    let cache = store::store_path(PLAYER_INDEX_FILE);

    if !refresh && cache.is_file() {
        match read_index(&cache) {
            Ok(list) if !list.is_empty() => {
                logd!("Players: index from cache ({} entries)", list.len());
                return Ok(PlayerIndex::from_entries(list));
            }
            Ok(_) => logw!("Players: cached index is empty, refetching"),
            Err(e) => logw!("Players: cached index unreadable ({}), refetching", e),
        }
    }

    let list = player_index::fetch(client, season)?;
    write_index(&cache, &list)?;
    logf!("Players: fetched index ({} entries)", list.len());
    Ok(PlayerIndex::from_entries(list))
}

pub fn read_index(path: &Path) -> Result<Vec<PlayerEntry>> {
    let t = read_table(path, b',')?;
    let id = t.require("id")?;
    let name = t.require("name")?;
    Ok(t.rows.iter()
        .filter_map(|r| {
            Some(PlayerEntry {
                id: r.get(id)?.parse().ok()?,
                name: s!(r.get(name)?),
            })
        })
        .collect())
}

pub fn write_index(path: &Path, list: &[PlayerEntry]) -> Result<()> {
    let rows: Vec<Vec<String>> = list.iter().map(|e| row![e.id, e.name]).collect();
    write_table(path, b',', &["id", "name"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_order() {
        let out = dedupe_players(&["B", " A ", "", "B", "A", "C"]);
        assert_eq!(out, vec!["B", "A", "C"]);
    }

    #[test]
    fn index_matches_accents_and_case() {
        let idx = PlayerIndex::from_entries(vec![
            PlayerEntry { id: 1, name: s!("Nikola Jokić") },
            PlayerEntry { id: 2, name: s!("Luka Dončić") },
        ]);
        assert_eq!(idx.find_id("nikola jokic"), Some(1));
        assert_eq!(idx.find_id("LUKA  DONCIC"), Some(2));
        assert_eq!(idx.find_id("Nobody"), None);
    }
}
