// src/config/state.rs
use super::options::{AppOptions, Category};

/// Which tab the dashboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Category(Category),
    BestPair,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,

    /// Player search box (case-insensitive substring)
    pub search: String,

    /// Only rows with best_point >= threshold
    pub only_best: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            view: View::Category(Category::Points),
            search: s!(),
            only_best: false,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
