// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.
// Rows are derived from the loaded projections each frame; switching tabs
// only changes which page derives them.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.view;

        for page in router::all_pages() {
            let selected = page.view() == cur;

            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, page.view());
                app.set_view(page.view());
            }
        }
    });
}
