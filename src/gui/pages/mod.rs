// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::state::{AppState, View},
    gui::app::App,
    records::ProjectionRecord,
};

pub mod category;
pub mod best_pair;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn view(&self) -> View;

    /// Rows to show, in display order.
    fn rows<'a>(&self, app: &'a App) -> Vec<&'a ProjectionRecord>;

    /// Draw page-specific controls above the table. Returns true if anything changed.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool { false }

    /// Text shown when `rows` is empty.
    fn empty_text(&self) -> &'static str { "No projections loaded" }
}
