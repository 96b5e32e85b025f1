// src/odds.rs
//
// Odds normalizer: raw sportsbook quotes → one best-odds row per player.
//
// Selection rules (American odds):
// - Over:  the minimum signed price (most negative).
// - Under: the price closest to zero (minimum |price|).
// Ties keep the quote seen first. A player with quotes on one side only still
// gets a row; the other side is None.

use std::collections::BTreeMap;
use std::path::Path;

use ::csv::StringRecord;

use crate::core::sanitize::{normalize_header, parse_num};
use crate::csv::read_headerless;
use crate::error::{Error, Result};
use crate::records::{BestOddsRecord, BetSide, OddsQuote};

/// Result of reading a raw odds file.
#[derive(Clone, Debug, Default)]
pub struct ParsedQuotes {
    pub quotes: Vec<OddsQuote>,
    /// Rows skipped: unknown side, empty player, non-numeric price, wrong width.
    pub dropped: usize,
}

/// Column positions for side/player/price/line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layout {
    side: usize,
    player: usize,
    price: usize,
    line: usize,
}

/// Fixed layout of the headerless sportsbook export.
const HEADERLESS: Layout = Layout { side: 0, player: 1, price: 2, line: 3 };

const SIDE_NAMES: &[&str] = &["bet_type", "label", "side"];
const PLAYER_NAMES: &[&str] = &["player", "description"];
const PRICE_NAMES: &[&str] = &["price", "odds"];
const LINE_NAMES: &[&str] = &["line", "point"];

/// If the first row is a header, return its layout.
fn detect_header(first: &StringRecord) -> Option<Layout> {
    let cols: Vec<String> = first.iter().map(normalize_header).collect();
    let find = |names: &[&str]| cols.iter().position(|c| names.contains(&c.as_str()));
    Some(Layout {
        side: find(SIDE_NAMES)?,
        player: find(PLAYER_NAMES)?,
        price: find(PRICE_NAMES)?,
        line: find(LINE_NAMES)?,
    })
}

/// Parse raw rows (headerless or headered) into quotes.
/// A headerless file must be four columns wide.
pub fn parse_quotes(path: &Path, mut rows: Vec<StringRecord>) -> Result<ParsedQuotes> {
    if rows.is_empty() {
        return Ok(ParsedQuotes::default());
    }

    let layout = match detect_header(&rows[0]) {
        Some(l) => { rows.remove(0); l }
        None => {
            if rows[0].len() != 4 {
                return Err(Error::MalformedFile {
                    path: path.to_path_buf(),
                    reason: format!("expected 4 columns, found {}", rows[0].len()),
                });
            }
            HEADERLESS
        }
    };
    let width = [layout.side, layout.player, layout.price, layout.line]
        .into_iter().max().unwrap_or(0) + 1;

    let mut out = ParsedQuotes::default();
    for r in &rows {
        match quote_from_row(r, layout, width) {
            Some(q) => out.quotes.push(q),
            None => out.dropped += 1,
        }
    }
    Ok(out)
}

fn quote_from_row(r: &StringRecord, l: Layout, width: usize) -> Option<OddsQuote> {
    if r.len() < width { return None; }
    let side = BetSide::parse(r.get(l.side)?)?;
    let player = r.get(l.player)?.trim();
    if player.is_empty() { return None; }
    let price = parse_num(r.get(l.price)?)?;
    Some(OddsQuote {
        side,
        player: s!(player),
        price,
        line: r.get(l.line).and_then(parse_num),
    })
}

/// Read and parse a raw odds file. Raw sportsbook files are comma-separated.
pub fn load_quotes(path: &Path) -> Result<ParsedQuotes> {
    let rows = read_headerless(path, b',')?;
    parse_quotes(path, rows)
}

#[derive(Default)]
struct Best {
    over: Option<f64>,
    under: Option<f64>,
    line: Option<f64>,
}

/// One record per distinct player, sorted by player name.
pub fn best_odds(quotes: &[OddsQuote]) -> Vec<BestOddsRecord> {
    let mut by_player: BTreeMap<&str, Best> = BTreeMap::new();

    for q in quotes {
        let b = by_player.entry(q.player.as_str()).or_default();
        if b.line.is_none() {
            b.line = q.line;
        }
        match q.side {
            BetSide::Over => {
                if b.over.is_none_or(|cur| q.price < cur) {
                    b.over = Some(q.price);
                }
            }
            BetSide::Under => {
                if b.under.is_none_or(|cur| q.price.abs() < cur.abs()) {
                    b.under = Some(q.price);
                }
            }
        }
    }

    by_player
        .into_iter()
        .map(|(player, b)| BestOddsRecord {
            player: s!(player),
            best_over_price: b.over,
            best_under_price: b.under,
            line: b.line,
        })
        .collect()
}
