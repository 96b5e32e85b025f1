// src/picks.rs
//
// Read-only queries the viewers run over projection rows.

use std::cmp::Ordering;

use crate::records::ProjectionRecord;

/// Edge descending, then player name ascending.
fn by_edge(a: &ProjectionRecord, b: &ProjectionRecord) -> Ordering {
    b.edge.partial_cmp(&a.edge)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.player.cmp(&b.player))
}

/// Case-insensitive substring match on player. An empty query matches all.
pub fn lookup<'a>(rows: &'a [ProjectionRecord], query: &str) -> Vec<&'a ProjectionRecord> {
    let q = query.trim().to_lowercase();
    rows.iter()
        .filter(|r| q.is_empty() || r.player.to_lowercase().contains(&q))
        .collect()
}

/// Rows whose line is at least `threshold`, best edge first.
pub fn best_picks(rows: &[ProjectionRecord], threshold: f64) -> Vec<&ProjectionRecord> {
    let mut out: Vec<&ProjectionRecord> = rows.iter().filter(|r| r.line >= threshold).collect();
    out.sort_by(|a, b| by_edge(a, b));
    out
}

/// Top `n` across every category, best edge first.
pub fn top_picks<'a, I>(all: I, n: usize) -> Vec<&'a ProjectionRecord>
where
    I: IntoIterator<Item = &'a ProjectionRecord>,
{
    let mut out: Vec<&ProjectionRecord> = all.into_iter().collect();
    out.sort_by(|a, b| by_edge(a, b));
    out.truncate(n);
    out
}

/// Two-man bet: from the top `n` by edge, the best pick plus the next best
/// from a different category. `None` when no such pair exists.
pub fn best_pair<'a, I>(all: I, n: usize) -> Option<(&'a ProjectionRecord, &'a ProjectionRecord)>
where
    I: IntoIterator<Item = &'a ProjectionRecord>,
{
    let top = top_picks(all, n);
    let first = *top.first()?;
    let second = top.iter().skip(1).find(|r| r.category != first.category)?;
    Some((first, *second))
}
