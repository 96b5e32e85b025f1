// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    csv::rows_to_string,
    gui::app::App,
    records::ProjectionRecord,
};

/// Visible rows of the current tab → clipboard, tab-separated with headers.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();

    let txt = {
        let rows = page.rows(app);
        if rows.is_empty() {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing to copy");
            return;
        }
        logf!("Copy: page={}, rows={}", page.title(), rows.len());

        let data: Vec<Vec<String>> = rows.iter().map(|r| r.to_row()).collect();
        rows_to_string(b'\t', &ProjectionRecord::HEADERS, &data)
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
