// src/specs/player_index.rs
//
// `commonallplayers`: every player the provider knows, id + display name.

use serde_json::Value;

use crate::core::net::StatsClient;
use crate::error::Result;
use super::result_set::{self, id, text};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: u32,
    pub name: String,
}

pub fn fetch(client: &StatsClient, season: &str) -> Result<Vec<PlayerEntry>> {
    let json = client.get_json("commonallplayers", &[
        ("LeagueID", "00"),
        ("Season", season),
        ("IsOnlyCurrentSeason", "0"),
    ])?;
    parse(&json)
}

/// Rows without a usable id or name are skipped.
pub fn parse(json: &Value) -> Result<Vec<PlayerEntry>> {
    let set = result_set::first(json)?;
    let id_col = set.require("PERSON_ID")?;
    let name_col = set.col("DISPLAY_FIRST_LAST")
        .map_or_else(|| set.require("PLAYER_NAME"), Ok)?;

    Ok(set.rows.iter()
        .filter_map(|r| {
            Some(PlayerEntry {
                id: id(r.get(id_col)?)?,
                name: s!(text(r.get(name_col)?)?),
            })
        })
        .collect())
}
