// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected provider response: {0}")]
    Response(String),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("malformed file {}: {reason}", path.display())]
    MalformedFile { path: PathBuf, reason: String },

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("feature '{0}' required by the model is not available")]
    MissingFeature(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("player '{0}' not found in the player index")]
    PlayerNotFound(String),

    #[error("no game data for player {0}")]
    NoGames(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
