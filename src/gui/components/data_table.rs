// src/gui/components/data_table.rs
//
// Draws the live table for the current page. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    core::sanitize::{fmt_1dp, fmt_num},
    gui::app::App,
    records::ProjectionRecord,
};

const HEADERS: [&str; 8] = ["Player", "Category", "Over", "Under", "Line", "Avg", "Projection", "Edge"];
const WIDTHS: [f32; 8] = [200.0, 80.0, 60.0, 60.0, 60.0, 60.0, 80.0, 60.0];

fn cells(r: &ProjectionRecord) -> [String; 8] {
    [
        r.player.clone(),
        s!(r.category.title()),
        fmt_num(r.best_over_price),
        fmt_num(r.best_under_price),
        fmt_1dp(Some(r.line)),
        fmt_1dp(r.average),
        fmt_1dp(Some(r.projection)),
        fmt_1dp(Some(r.edge)),
    ]
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let rows = page.rows(app);

    if rows.is_empty() {
        ui.label(page.empty_text());
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", page.title()));
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let text = RichText::new(*h).strong();
                    if ci < 2 {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                    } else {
                        ui.centered_and_justified(|ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                for (ci, cell) in cells(r).into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        // Edge: green over, red under
                        if ci == 7 {
                            rt = if r.edge > 0.0 {
                                rt.color(egui::Color32::from_rgb(0x4C, 0xAF, 0x50))
                            } else if r.edge < 0.0 {
                                rt.color(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
                            } else { rt };
                        }
                        if ci < 2 {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
