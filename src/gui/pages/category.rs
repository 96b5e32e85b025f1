// src/gui/pages/category.rs
use eframe::egui;

use crate::{
    config::{options::Category, state::{AppState, View}},
    gui::app::App,
    picks,
    records::ProjectionRecord,
};

use super::Page;

/// One tab per stat category.
pub struct CategoryPage(pub Category);

pub static POINTS: CategoryPage = CategoryPage(Category::Points);
pub static REBOUNDS: CategoryPage = CategoryPage(Category::Rebounds);
pub static ASSISTS: CategoryPage = CategoryPage(Category::Assists);

impl Page for CategoryPage {
    fn title(&self) -> &'static str { self.0.title() }
    fn view(&self) -> View { View::Category(self.0) }

    /// Search wins over the best-picks filter; otherwise best edge first.
    fn rows<'a>(&self, app: &'a App) -> Vec<&'a ProjectionRecord> {
        let rows = app.rows_for(self.0);
        let gui = &app.state.gui;

        if !gui.search.trim().is_empty() {
            return picks::lookup(rows, &gui.search);
        }
        let threshold = if gui.only_best { app.state.options.view.threshold(self.0) } else { f64::NEG_INFINITY };
        picks::best_picks(rows, threshold)
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut state.gui.only_best, "Best picks only").changed();

            let t = state.options.view.threshold_mut(self.0);
            let max = match self.0 {
                Category::Points => 40.0,
                Category::Rebounds | Category::Assists => 15.0,
            };
            ui.add_enabled_ui(state.gui.only_best, |ui| {
                changed |= ui.add(egui::Slider::new(t, 0.0..=max).step_by(0.5).text("min line")).changed();
            });
        });
        if changed {
            logd!("UI: {} only_best={} threshold={}",
                self.0, state.gui.only_best, state.options.view.threshold(self.0));
        }
        changed
    }
}
