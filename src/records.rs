// src/records.rs
//
// One typed record per pipeline stage. Each stage writes its records to a
// flat file and the next stage reads them back through `csv::Table`, so
// every record knows its own header and how to read/write a row.

use ::csv::StringRecord;

use crate::config::consts::L10_GAMES;
use crate::config::options::Category;
use crate::core::sanitize::{fmt_num, parse_num};
use crate::csv::{cell, Table};
use crate::error::Result;

/* ---------------- Odds ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BetSide {
    Over,
    Under,
}

impl BetSide {
    pub fn parse(s: &str) -> Option<BetSide> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("over") { Some(BetSide::Over) }
        else if t.eq_ignore_ascii_case("under") { Some(BetSide::Under) }
        else { None }
    }
}

/// One sportsbook quote. Several per player per side (different books).
#[derive(Clone, Debug, PartialEq)]
pub struct OddsQuote {
    pub side: BetSide,
    pub player: String,
    /// American odds, signed.
    pub price: f64,
    pub line: Option<f64>,
}

/// Best over/under price for one player.
#[derive(Clone, Debug, PartialEq)]
pub struct BestOddsRecord {
    pub player: String,
    pub best_over_price: Option<f64>,
    pub best_under_price: Option<f64>,
    pub line: Option<f64>,
}

impl BestOddsRecord {
    pub const HEADERS: [&'static str; 4] = ["player", "best_over_odds", "best_under_odds", "best_point"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            fmt_num(self.best_over_price),
            fmt_num(self.best_under_price),
            fmt_num(self.line),
        ]
    }

    /// Rows without a player name are skipped; numbers that don't parse become None.
    pub fn from_table(t: &Table) -> Result<Vec<BestOddsRecord>> {
        let cols = OddsCols::locate(t)?;
        Ok(t.rows.iter().filter_map(|r| cols.read(r)).collect())
    }
}

/// Where the odds columns live in a headered file.
struct OddsCols {
    player: usize,
    over: Option<usize>,
    under: Option<usize>,
    line: Option<usize>,
}

impl OddsCols {
    fn locate(t: &Table) -> Result<OddsCols> {
        Ok(OddsCols {
            player: t.require("player")?,
            over: t.col_any(&["best_over_odds", "best_over_price"]),
            under: t.col_any(&["best_under_odds", "best_under_price"]),
            line: t.col_any(&["best_point", "line"]),
        })
    }

    fn read(&self, r: &StringRecord) -> Option<BestOddsRecord> {
        let name = r.get(self.player)?.trim();
        if name.is_empty() { return None; }
        Some(BestOddsRecord {
            player: s!(name),
            best_over_price: parse_num(cell(r, self.over)),
            best_under_price: parse_num(cell(r, self.under)),
            line: parse_num(cell(r, self.line)),
        })
    }
}

/* ---------------- Game logs ---------------- */

pub type Games = [Option<f64>; L10_GAMES];

/// Last-10 values for one player in one category, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct L10Record {
    pub player: String,
    pub games: Games,
    pub average: Option<f64>,
}

pub fn game_header(i: usize) -> String {
    format!("Game {}", i + 1)
}

impl L10Record {
    /// Build from newest-first values. Extra values beyond ten are ignored.
    /// The average is rounded to two decimals; no values → None.
    pub fn from_values(player: &str, values: &[f64]) -> L10Record {
        let slots: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        L10Record::from_slots(player, &slots)
    }

    /// Build from newest-first per-game slots. A `None` slot stays in place,
    /// so `Game k` is the same game across categories. The average covers
    /// the present values only.
    pub fn from_slots(player: &str, slots: &[Option<f64>]) -> L10Record {
        let mut games: Games = [None; L10_GAMES];
        for (slot, v) in games.iter_mut().zip(slots.iter()) {
            *slot = *v;
        }
        let used: Vec<f64> = games.iter().flatten().copied().collect();
        let average = if used.is_empty() {
            None
        } else {
            let mean = used.iter().sum::<f64>() / used.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        };
        L10Record { player: s!(player), games, average }
    }

    pub fn headers() -> Vec<String> {
        let mut h = vec![s!("Player")];
        h.extend((0..L10_GAMES).map(game_header));
        h.push(s!("Average"));
        h
    }

    pub fn to_row(&self) -> Vec<String> {
        let mut r = vec![self.player.clone()];
        r.extend(self.games.iter().map(|g| fmt_num(*g)));
        r.push(fmt_num(self.average));
        r
    }

    pub fn from_table(t: &Table) -> Result<Vec<L10Record>> {
        let player = t.require("player")?;
        let average = t.require("average")?;
        let game_cols: Vec<Option<usize>> = (0..L10_GAMES).map(|i| t.col(&game_header(i))).collect();

        Ok(t.rows.iter()
            .filter_map(|r| {
                let name = r.get(player)?.trim();
                if name.is_empty() { return None; }
                Some(L10Record {
                    player: s!(name),
                    games: read_games(r, &game_cols),
                    average: parse_num(cell(r, Some(average))),
                })
            })
            .collect())
    }
}

fn read_games(r: &StringRecord, cols: &[Option<usize>]) -> Games {
    let mut games: Games = [None; L10_GAMES];
    for (slot, col) in games.iter_mut().zip(cols) {
        *slot = parse_num(cell(r, *col));
    }
    games
}

/* ---------------- Merge ---------------- */

/// Odds row joined with the player's L10 numbers (absent when unmatched).
#[derive(Clone, Debug, PartialEq)]
pub struct MergedRecord {
    pub player: String,
    pub category: Category,
    pub best_over_price: Option<f64>,
    pub best_under_price: Option<f64>,
    pub line: Option<f64>,
    pub games: Games,
    pub average: Option<f64>,
}

impl MergedRecord {
    pub fn headers() -> Vec<String> {
        let mut h: Vec<String> = BestOddsRecord::HEADERS.iter().map(|s| s!(*s)).collect();
        h.extend((0..L10_GAMES).map(|i| game_header(i).to_lowercase()));
        h.push(s!("average"));
        h.push(s!("category"));
        h
    }

    pub fn to_row(&self) -> Vec<String> {
        let mut r = vec![
            self.player.clone(),
            fmt_num(self.best_over_price),
            fmt_num(self.best_under_price),
            fmt_num(self.line),
        ];
        r.extend(self.games.iter().map(|g| fmt_num(*g)));
        r.push(fmt_num(self.average));
        r.push(s!(self.category.title()));
        r
    }

    /// `fallback` is used when the file carries no (or an unknown) category column.
    pub fn from_table(t: &Table, fallback: Category) -> Result<Vec<MergedRecord>> {
        let cols = OddsCols::locate(t)?;
        let category = t.col("category");
        let average = t.col("average");
        let game_cols: Vec<Option<usize>> = (0..L10_GAMES).map(|i| t.col(&game_header(i))).collect();

        Ok(t.rows.iter()
            .filter_map(|r| {
                let o = cols.read(r)?;
                Some(MergedRecord {
                    player: o.player,
                    category: Category::parse(cell(r, category)).unwrap_or(fallback),
                    best_over_price: o.best_over_price,
                    best_under_price: o.best_under_price,
                    line: o.line,
                    games: read_games(r, &game_cols),
                    average: parse_num(cell(r, average)),
                })
            })
            .collect())
    }
}

/* ---------------- Projection ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectionRecord {
    pub player: String,
    pub category: Category,
    pub best_over_price: Option<f64>,
    pub best_under_price: Option<f64>,
    pub line: f64,
    pub average: Option<f64>,
    pub projection: f64,
    /// projection - line, full precision
    pub edge: f64,
}

impl ProjectionRecord {
    pub const HEADERS: [&'static str; 8] = [
        "player", "category", "best_over_odds", "best_under_odds",
        "best_point", "average", "projection", "edge",
    ];

    pub fn new(m: &MergedRecord, line: f64, projection: f64) -> ProjectionRecord {
        ProjectionRecord {
            player: m.player.clone(),
            category: m.category,
            best_over_price: m.best_over_price,
            best_under_price: m.best_under_price,
            line,
            average: m.average,
            projection,
            edge: projection - line,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            s!(self.category.title()),
            fmt_num(self.best_over_price),
            fmt_num(self.best_under_price),
            fmt_num(Some(self.line)),
            fmt_num(self.average),
            fmt_num(Some(self.projection)),
            fmt_num(Some(self.edge)),
        ]
    }

    /// Accepts both `projection/edge` and the `AI_Projection/AI_Edge` spelling.
    /// Rows whose line or projection don't parse are dropped; edge is recomputed
    /// when the column is missing.
    pub fn from_table(t: &Table, fallback: Category) -> Result<Vec<ProjectionRecord>> {
        let player = t.require("player")?;
        let category = t.col("category");
        let over = t.col_any(&["best_over_odds", "best_over_price"]);
        let under = t.col_any(&["best_under_odds", "best_under_price"]);
        let line = t.col_any(&["best_point", "line"]);
        let average = t.col("average");
        let projection = t.col_any(&["projection", "ai_projection"])
            .ok_or_else(|| crate::error::Error::MissingColumn(s!("projection")))?;
        let edge = t.col_any(&["edge", "ai_edge"]);

        Ok(t.rows.iter()
            .filter_map(|r| {
                let name = r.get(player)?.trim();
                if name.is_empty() { return None; }
                let line_v = parse_num(cell(r, line))?;
                let proj_v = parse_num(cell(r, Some(projection)))?;
                Some(ProjectionRecord {
                    player: s!(name),
                    category: Category::parse(cell(r, category)).unwrap_or(fallback),
                    best_over_price: parse_num(cell(r, over)),
                    best_under_price: parse_num(cell(r, under)),
                    line: line_v,
                    average: parse_num(cell(r, average)),
                    projection: proj_v,
                    edge: parse_num(cell(r, edge)).unwrap_or(proj_v - line_v),
                })
            })
            .collect())
    }
}
