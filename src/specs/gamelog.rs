// src/specs/gamelog.rs
//
// `playergamelogs`: one row per game for one player and season.
// GAME_DATE arrives as "2025-01-15T00:00:00"; only the date part matters.

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::consts::SEASON_TYPE;
use crate::config::options::Category;
use crate::core::net::StatsClient;
use crate::error::Result;
use super::result_set::{self, num, text};

#[derive(Clone, Debug, PartialEq)]
pub struct GameLine {
    pub date: NaiveDate,
    pub points: Option<f64>,
    pub rebounds: Option<f64>,
    pub assists: Option<f64>,
}

impl GameLine {
    pub fn stat(&self, cat: Category) -> Option<f64> {
        match cat {
            Category::Points => self.points,
            Category::Rebounds => self.rebounds,
            Category::Assists => self.assists,
        }
    }
}

pub fn fetch(client: &StatsClient, player_id: u32, season: &str) -> Result<Vec<GameLine>> {
    let id = player_id.to_string();
    let json = client.get_json("playergamelogs", &[
        ("PlayerID", id.as_str()),
        ("Season", season),
        ("SeasonType", SEASON_TYPE),
    ])?;
    parse(&json)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Rows whose GAME_DATE does not parse are dropped.
pub fn parse(json: &Value) -> Result<Vec<GameLine>> {
    let set = result_set::first(json)?;
    let date = set.require("GAME_DATE")?;
    let cols: Vec<Option<usize>> = Category::ALL.iter().map(|c| set.col(c.stat_column())).collect();

    let stat = |r: &Vec<Value>, i: usize| cols[i].and_then(|c| r.get(c)).and_then(num);

    Ok(set.rows.iter()
        .filter_map(|r| {
            let d = parse_date(text(r.get(date)?)?)?;
            Some(GameLine {
                date: d,
                points: stat(r, 0),
                rebounds: stat(r, 1),
                assists: stat(r, 2),
            })
        })
        .collect())
}

/// Games on or before `cutoff`, newest first, at most `n`.
pub fn last_n(mut games: Vec<GameLine>, cutoff: NaiveDate, n: usize) -> Vec<GameLine> {
    games.retain(|g| g.date <= cutoff);
    games.sort_by(|a, b| b.date.cmp(&a.date));
    games.truncate(n);
    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "resultSets": [{
                "name": "PlayerGameLogs",
                "headers": ["SEASON_YEAR", "PLAYER_ID", "GAME_DATE", "REB", "AST", "PTS"],
                "rowSet": [
                    ["2024-25", 1, "2025-01-10T00:00:00", 8, 5, 25],
                    ["2024-25", 1, "2025-01-14T00:00:00", 10, 7, 31],
                    ["2024-25", 1, "garbage", 1, 1, 1],
                    ["2024-25", 1, "2025-01-12T00:00:00", 6, null, 18]
                ]
            }]
        })
    }

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn columns_by_name() {
        let games = parse(&body()).unwrap();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].points, Some(25.0));
        assert_eq!(games[0].rebounds, Some(8.0));
        assert_eq!(games[2].assists, None);
        assert_eq!(games[2].stat(Category::Points), Some(18.0));
    }

    #[test]
    fn cutoff_sort_and_take() {
        let games = parse(&body()).unwrap();
        let last = last_n(games, day("2025-01-12"), 10);
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].date, day("2025-01-12"));
        assert_eq!(last[1].date, day("2025-01-10"));

        let games = parse(&body()).unwrap();
        let one = last_n(games, day("2025-12-31"), 1);
        assert_eq!(one[0].points, Some(31.0));
    }
}
