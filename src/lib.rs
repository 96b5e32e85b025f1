// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod merge;
pub mod model;
pub mod odds;
pub mod picks;
pub mod players;
pub mod progress;
pub mod projection;
pub mod records;
pub mod runner;
pub mod scrape;
pub mod store;

pub use error::{Error, Result};
