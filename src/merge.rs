// src/merge.rs
//
// Left join of best-odds rows with L10 rows on exact player name.
// The odds side drives: every priced player appears exactly once, in the
// odds order. Unmatched players carry no average and no games; name
// mismatches (accents, suffixes) are expected and are not errors.

use std::collections::HashMap;

use crate::config::consts::L10_GAMES;
use crate::config::options::Category;
use crate::records::{BestOddsRecord, L10Record, MergedRecord};

pub fn merge(odds: &[BestOddsRecord], l10: &[L10Record], category: Category) -> Vec<MergedRecord> {
    // First L10 row wins on duplicates.
    let mut by_player: HashMap<&str, &L10Record> = HashMap::with_capacity(l10.len());
    for r in l10 {
        by_player.entry(r.player.as_str()).or_insert(r);
    }

    odds.iter()
        .map(|o| {
            let hit = by_player.get(o.player.as_str());
            MergedRecord {
                player: o.player.clone(),
                category,
                best_over_price: o.best_over_price,
                best_under_price: o.best_under_price,
                line: o.line,
                games: hit.map(|r| r.games).unwrap_or([None; L10_GAMES]),
                average: hit.and_then(|r| r.average),
            }
        })
        .collect()
}

/// How many odds rows found a game log.
pub fn matched(rows: &[MergedRecord]) -> usize {
    rows.iter().filter(|r| r.average.is_some()).count()
}
