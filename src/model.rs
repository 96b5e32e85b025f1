// src/model.rs
//
// Learned-model boundary. A model is a black box with `predict`; it may also
// report the ordered feature names it was trained on. Features are always
// passed by name and reindexed to that order, never by position.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column-major numeric table with named columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl FeatureTable {
    pub fn new(rows: usize) -> Self {
        Self { names: Vec::new(), columns: Vec::new(), rows }
    }

    /// Add (or replace) a column. Length must match the row count.
    pub fn insert(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.rows {
            return Err(Error::Model(format!(
                "column '{}' has {} values, table has {} rows", name, values.len(), self.rows
            )));
        }
        match self.names.iter().position(|n| n == name) {
            Some(i) => self.columns[i] = values,
            None => {
                self.names.push(s!(name));
                self.columns.push(values);
            }
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] { &self.names }
    pub fn rows(&self) -> usize { self.rows }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names.iter().position(|n| n == name).map(|i| self.columns[i].as_slice())
    }

    /// New table with exactly `order` columns in that order.
    pub fn reindex<S: AsRef<str>>(&self, order: &[S]) -> Result<FeatureTable> {
        let mut out = FeatureTable::new(self.rows);
        for name in order {
            let name = name.as_ref();
            let col = self.column(name).ok_or_else(|| Error::MissingFeature(s!(name)))?;
            out.insert(name, col.to_vec())?;
        }
        Ok(out)
    }

    /// Row `i` in column order.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.columns.iter().map(|c| c[i]).collect()
    }
}

pub trait Model {
    /// Training-time feature order, when the artifact records it.
    fn feature_names(&self) -> Option<&[String]>;

    /// One prediction per row of `features`.
    fn predict(&self, features: &FeatureTable) -> Result<Vec<f64>>;
}

/// Linear regression artifact:
/// `{ "features": [...], "coefficients": [...], "intercept": f64 }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LinearModel {
    pub fn load(path: &Path) -> Result<LinearModel> {
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&text)?;
        model.validate()?;
        logf!("Model: loaded {} ({} features)", path.display(), model.features.len());
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.features.len() != self.coefficients.len() {
            return Err(Error::Model(format!(
                "{} features but {} coefficients", self.features.len(), self.coefficients.len()
            )));
        }
        for (i, name) in self.features.iter().enumerate() {
            if self.features[..i].contains(name) {
                return Err(Error::Model(format!("feature '{}' listed twice", name)));
            }
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(Error::Model(s!("non-finite coefficient")));
        }
        Ok(())
    }
}

impl Model for LinearModel {
    fn feature_names(&self) -> Option<&[String]> {
        Some(&self.features)
    }

    /// Expects columns already in training order; reindexes again if not.
    fn predict(&self, features: &FeatureTable) -> Result<Vec<f64>> {
        let table;
        let x = if features.names() == self.features.as_slice() {
            features
        } else {
            table = features.reindex(&self.features)?;
            &table
        };
        Ok((0..x.rows())
            .map(|i| {
                x.row(i).iter()
                    .zip(&self.coefficients)
                    .fold(self.intercept, |acc, (v, c)| acc + v * c)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reindex_by_name() {
        let mut t = FeatureTable::new(2);
        t.insert("b", vec![3.0, 4.0]).unwrap();
        t.insert("a", vec![1.0, 2.0]).unwrap();
        let r = t.reindex(&["a", "b"]).unwrap();
        assert_eq!(r.names(), &["a", "b"]);
        assert_eq!(r.row(1), vec![2.0, 4.0]);
        assert!(matches!(t.reindex(&["c"]), Err(Error::MissingFeature(_))));
    }

    #[test]
    fn insert_checks_length() {
        let mut t = FeatureTable::new(2);
        assert!(t.insert("a", vec![1.0]).is_err());
    }

    fn table(cols: &[(&str, Vec<f64>)]) -> FeatureTable {
        let mut t = FeatureTable::new(cols[0].1.len());
        for (name, values) in cols {
            t.insert(name, values.clone()).unwrap();
        }
        t
    }

    #[test]
    fn linear_validate() {
        let m = LinearModel { features: vec![s!("a")], coefficients: vec![], intercept: 0.0 };
        assert!(m.validate().is_err());
    }

    #[test]
    fn linear_rejects_repeated_feature() {
        let m = LinearModel {
            features: vec![s!("average"), s!("average")],
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
        };
        assert!(matches!(m.validate(), Err(Error::Model(_))));

        let json = r#"{"features":["average","average"],"coefficients":[1,1]}"#;
        let path = std::env::temp_dir().join(format!("nba_props_dup_model_{}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        assert!(matches!(LinearModel::load(&path), Err(Error::Model(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn predict_ignores_column_order() {
        let m = LinearModel {
            features: vec![s!("a"), s!("b")],
            coefficients: vec![2.0, -1.0],
            intercept: 0.5,
        };
        let ab = table(&[("a", vec![1.0, 3.0]), ("b", vec![10.0, 4.0])]);
        let ba = table(&[("b", vec![10.0, 4.0]), ("a", vec![1.0, 3.0])]);

        let want = vec![0.5 + 2.0 - 10.0, 0.5 + 6.0 - 4.0];
        assert_eq!(m.predict(&ab).unwrap(), want);
        assert_eq!(m.predict(&ba).unwrap(), want);
    }

    #[test]
    fn predict_missing_column() {
        let m = LinearModel { features: vec![s!("a"), s!("b")], coefficients: vec![1.0, 1.0], intercept: 0.0 };
        let only_a = table(&[("a", vec![1.0])]);
        assert!(matches!(m.predict(&only_a), Err(Error::MissingFeature(_))));
    }
}
