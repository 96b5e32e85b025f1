// src/specs/mod.rs
//! # Provider “specs” module
//!
//! Endpoint-specific parsing for the stats provider. Each spec covers one
//! endpoint and encodes *where the data lives in the JSON* and *how to pull it
//! out without trusting column positions*.
//!
//! ## What lives here
//! - **Pure JSON shaping**: `resultSets` → typed rows, columns looked up by name.
//! - **Endpoint parameters** (query keys, season strings) next to the parser that
//!   understands the response.
//! - **Light filtering** that belongs to the endpoint (e.g., game-date cutoff).
//!
//! ## What does **not** live here
//! - **Caching/persistence** – `players::load_index` owns the `.store` cache.
//! - **Pacing, retries, progress** – `scrape` decides when to call and how often.
//! - **Output files** – the L10 files are written by `scrape`.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → scrape::fetch_l10 → specs::gamelog::fetch()
//!                             ↘  Vec<GameLine>, newest first
//!             players::load_index → specs::player_index::fetch()
//! ```
//!
//! ## Testing notes
//! Every `parse` takes a `serde_json::Value`, so specs are tested offline
//! against small captured payloads.
pub mod result_set;
pub mod player_index;
pub mod gamelog;
