// src/gui/components/controls.rs
//
// Search box, data dir, strategy, and the action buttons.

use eframe::egui;

use crate::{
    config::options::StrategyKind,
    file::normalize_dir_path,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.state.gui.search).desired_width(200.0));
        if resp.changed() {
            logd!("UI: search '{}'", app.state.gui.search);
        }
        if ui.small_button("✕").clicked() {
            app.state.gui.search.clear();
        }
    });

    // Page-specific controls
    let page = app.current_page();
    page.draw_controls(ui, &mut app.state);

    let mut reload = false;
    let mut run = false;
    let mut copy = false;

    ui.horizontal(|ui| {
        ui.label("Data dir:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.data_dir_text).desired_width(260.0));
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            reload = true;
        }

        let strategy = &mut app.state.options.pipeline.strategy;
        let before = *strategy;
        ui.selectable_value(strategy, StrategyKind::Heuristic, "Heuristic");
        ui.selectable_value(strategy, StrategyKind::Model, "Model");
        if *strategy != before {
            logf!("UI: strategy → {:?}", strategy);
            reload = true;
        }

        reload |= ui.button("Reload").clicked();
        run = ui.button("Run pipeline").clicked();
        copy = ui.button("Copy").clicked();
    });

    if reload || run {
        let dir = normalize_dir_path(&app.data_dir_text);
        if dir != app.state.options.pipeline.data_dir {
            logf!("UI: data dir → {}", dir.display());
            app.state.options.pipeline.data_dir = dir;
        }
    }
    if run {
        actions::run_pipeline(app);
    } else if reload {
        app.hard_reload();
    }
    if copy {
        actions::copy(app, ui.ctx());
    }
}
