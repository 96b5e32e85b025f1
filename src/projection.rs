// src/projection.rs
//
// Projection strategies over merged rows. Rows whose required numbers are
// missing are dropped before projecting; nothing downstream sees a NaN.

use crate::config::consts::L10_GAMES;
use crate::error::{Error, Result};
use crate::model::{FeatureTable, Model};
use crate::records::{game_header, MergedRecord, ProjectionRecord};

/// Feature order used when a model does not report its own.
pub const DEFAULT_FEATURES: [&str; 4] = ["average", "best_point", "best_over_odds", "best_under_odds"];

pub trait ProjectionStrategy {
    fn name(&self) -> &str;
    fn project(&self, rows: &[MergedRecord]) -> Result<Vec<ProjectionRecord>>;
}

/* ---------------- Heuristic ---------------- */

/// Midpoint of the L10 average and the betting line.
pub struct Heuristic;

impl ProjectionStrategy for Heuristic {
    fn name(&self) -> &str { "heuristic" }

    fn project(&self, rows: &[MergedRecord]) -> Result<Vec<ProjectionRecord>> {
        Ok(rows.iter()
            .filter_map(|m| {
                let (avg, line) = (m.average?, m.line?);
                Some(ProjectionRecord::new(m, line, (avg + line) / 2.0))
            })
            .collect())
    }
}

/* ---------------- Model ---------------- */

/// Named numeric feature of a merged row. Unknown names are an error.
pub fn feature(m: &MergedRecord, name: &str) -> Result<Option<f64>> {
    let v = match name {
        "average" => m.average,
        "best_point" | "line" => m.line,
        "best_over_odds" => m.best_over_price,
        "best_under_odds" => m.best_under_price,
        other => {
            let game = (0..L10_GAMES)
                .find(|&i| game_header(i).eq_ignore_ascii_case(other))
                .ok_or_else(|| Error::MissingFeature(s!(other)))?;
            m.games[game]
        }
    };
    Ok(v)
}

/// Build a feature table for `names`, keeping only rows where every feature
/// and the line are present. Returns the kept rows alongside the table.
pub fn build_features<'a, S: AsRef<str>>(
    rows: &'a [MergedRecord],
    names: &[S],
) -> Result<(Vec<&'a MergedRecord>, FeatureTable)> {
    let mut kept = Vec::with_capacity(rows.len());
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); names.len()];

    'rows: for m in rows {
        if m.line.is_none() { continue; }
        let mut row = Vec::with_capacity(names.len());
        for n in names {
            match feature(m, n.as_ref())? {
                Some(v) => row.push(v),
                None => continue 'rows,
            }
        }
        for (col, v) in values.iter_mut().zip(row) {
            col.push(v);
        }
        kept.push(m);
    }

    let mut table = FeatureTable::new(kept.len());
    for (n, col) in names.iter().zip(values) {
        table.insert(n.as_ref(), col)?;
    }
    Ok((kept, table))
}

/// Prediction from an external model, reindexed to its training order.
pub struct ModelStrategy<M: Model> {
    model: M,
}

impl<M: Model> ModelStrategy<M> {
    pub fn new(model: M) -> Self { Self { model } }

    fn feature_order(&self) -> Vec<String> {
        match self.model.feature_names() {
            Some(names) => names.to_vec(),
            None => DEFAULT_FEATURES.iter().map(|s| s!(*s)).collect(),
        }
    }
}

impl<M: Model> ProjectionStrategy for ModelStrategy<M> {
    fn name(&self) -> &str { "model" }

    fn project(&self, rows: &[MergedRecord]) -> Result<Vec<ProjectionRecord>> {
        let order = self.feature_order();
        let (kept, table) = build_features(rows, &order)?;
        if kept.is_empty() {
            return Ok(Vec::new());
        }
        let x = table.reindex(&order)?;
        let preds = self.model.predict(&x)?;
        if preds.len() != kept.len() {
            return Err(Error::Model(format!(
                "model returned {} predictions for {} rows", preds.len(), kept.len()
            )));
        }

        Ok(kept.into_iter().zip(preds)
            .filter(|(_, p)| p.is_finite())
            .filter_map(|(m, p)| Some(ProjectionRecord::new(m, m.line?, p)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::Category;
    use crate::model::LinearModel;

    fn merged(player: &str, avg: Option<f64>, line: Option<f64>) -> MergedRecord {
        MergedRecord {
            player: s!(player),
            category: Category::Points,
            best_over_price: Some(-120.0),
            best_under_price: Some(105.0),
            line,
            games: [None; L10_GAMES],
            average: avg,
        }
    }

    #[test]
    fn heuristic_midpoint() {
        let out = Heuristic.project(&[merged("A", Some(22.0), Some(20.5))]).unwrap();
        assert_eq!(out[0].projection, 21.25);
        assert_eq!(out[0].edge, 0.75);
    }

    #[test]
    fn heuristic_drops_incomplete_rows() {
        let rows = [
            merged("A", None, Some(20.5)),
            merged("B", Some(3.0), None),
            merged("C", Some(4.0), Some(5.0)),
        ];
        let out = Heuristic.project(&rows).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].player, "C");
    }

    #[test]
    fn unknown_feature_is_an_error() {
        let m = merged("A", Some(1.0), Some(1.0));
        assert!(feature(&m, "game 3").unwrap().is_none());
        assert!(matches!(feature(&m, "minutes"), Err(Error::MissingFeature(_))));
    }

    #[test]
    fn model_uses_named_features() {
        let model = LinearModel {
            features: vec![s!("best_point"), s!("average")],
            coefficients: vec![1.0, 0.0],
            intercept: 1.0,
        };
        let out = ModelStrategy::new(model)
            .project(&[merged("A", Some(30.0), Some(20.5)), merged("B", None, Some(3.5))])
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].projection, 21.5);
        assert_eq!(out[0].edge, 1.0);
    }
}
