// src/specs/result_set.rs

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// One `{ name, headers, rowSet }` block of a provider response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "resultSets", alias = "resultSet")]
    sets: OneOrMany,
}

impl ResultSet {
    /// Column index by header, case-insensitive.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    pub fn require(&self, name: &str) -> Result<usize> {
        self.col(name).ok_or_else(|| Error::MissingColumn(s!(name)))
    }
}

/// First result set of a response. Some endpoints use `resultSet` (object),
/// most use `resultSets` (array).
pub fn first(json: &Value) -> Result<ResultSet> {
    let env: Envelope = serde_json::from_value(json.clone())?;
    match env.sets {
        OneOrMany::One(s) => Ok(s),
        OneOrMany::Many(v) => v.into_iter().next()
            .ok_or_else(|| Error::Response(s!("no result sets"))),
    }
}

/// Numeric cell; numbers and numeric strings both accepted.
pub fn num(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite()),
        Value::String(s) => crate::core::sanitize::parse_num(s),
        _ => None,
    }
}

pub fn id(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|x| u32::try_from(x).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn text(v: &Value) -> Option<&str> {
    v.as_str().map(str::trim).filter(|s| !s.is_empty())
}
