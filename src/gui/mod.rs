// src/gui/mod.rs
pub mod app;
pub mod router;
pub mod pages;
pub mod progress;
pub mod actions;
pub mod components;

pub use app::run;
