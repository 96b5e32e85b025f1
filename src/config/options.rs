// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub pipeline: PipelineOptions,
    pub view: ViewOptions,
}

/// Stat categories the sportsbook files and game logs are split by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Points,
    Rebounds,
    Assists,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Points, Category::Rebounds, Category::Assists];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Points => "Points",
            Category::Rebounds => "Rebounds",
            Category::Assists => "Assists",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Points => "points",
            Category::Rebounds => "rebounds",
            Category::Assists => "assists",
        }
    }

    /// Column in the provider's game log rows.
    pub fn stat_column(&self) -> &'static str {
        match self {
            Category::Points => "PTS",
            Category::Rebounds => "REB",
            Category::Assists => "AST",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" | "pts" => Some(Category::Points),
            "rebounds" | "reb" => Some(Category::Rebounds),
            "assists" | "ast" => Some(Category::Assists),
            _ => None,
        }
    }

    /* ---------- per-stage file names ---------- */

    /// Raw sportsbook export. Always comma-separated, no header.
    pub fn odds_file(&self) -> String {
        format!("NBA STATS - {}.csv", self.key().to_ascii_uppercase())
    }
    pub fn cleaned_file(&self, fmt: OutputFormat) -> String {
        join!("Cleaned_Best_Odds_", self.title(), ".", fmt.ext())
    }
    pub fn l10_file(&self, fmt: OutputFormat) -> String {
        join!(self.key(), "_l10.", fmt.ext())
    }
    pub fn merged_file(&self, fmt: OutputFormat) -> String {
        join!("Merged_", self.title(), ".", fmt.ext())
    }
    pub fn projections_file(&self, strategy: StrategyKind, fmt: OutputFormat) -> String {
        match strategy {
            StrategyKind::Heuristic => join!("Projections_", self.title(), ".", fmt.ext()),
            StrategyKind::Model => join!("AI_Projections_", self.title(), ".", fmt.ext()),
        }
    }
    pub fn model_file(&self) -> String {
        join!("AI_Model_", self.title(), ".json")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self { OutputFormat::Csv => "csv", OutputFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { OutputFormat::Csv => b',', OutputFormat::Tsv => b'\t' }
    }
}

/// Which projection strategy a pipeline run uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Heuristic,
    Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub season: String,
    /// Inclusive cutoff (YYYY-MM-DD). `None` means today.
    pub cutoff: Option<String>,
    pub pause_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    pub players_file: PathBuf,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            season: s!(DEFAULT_SEASON),
            cutoff: None,
            pause_ms: REQUEST_PAUSE_MS,
            retries: FETCH_RETRIES,
            backoff_ms: BACKOFF_BASE_MS,
            players_file: PathBuf::from(DEFAULT_PLAYERS_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub strategy: StrategyKind,
    pub categories: Vec<Category>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            format: OutputFormat::Csv,
            strategy: StrategyKind::Heuristic,
            categories: Category::ALL.to_vec(),
        }
    }
}

impl PipelineOptions {
    pub fn path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub points_threshold: f64,
    pub rebounds_threshold: f64,
    pub assists_threshold: f64,
    pub top_picks: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            points_threshold: POINTS_THRESHOLD,
            rebounds_threshold: REBOUNDS_THRESHOLD,
            assists_threshold: ASSISTS_THRESHOLD,
            top_picks: TOP_PICKS,
        }
    }
}

impl ViewOptions {
    pub fn threshold(&self, cat: Category) -> f64 {
        match cat {
            Category::Points => self.points_threshold,
            Category::Rebounds => self.rebounds_threshold,
            Category::Assists => self.assists_threshold,
        }
    }

    pub fn threshold_mut(&mut self, cat: Category) -> &mut f64 {
        match cat {
            Category::Points => &mut self.points_threshold,
            Category::Rebounds => &mut self.rebounds_threshold,
            Category::Assists => &mut self.assists_threshold,
        }
    }
}
