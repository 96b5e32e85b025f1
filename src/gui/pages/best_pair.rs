// src/gui/pages/best_pair.rs
use crate::{
    config::state::View,
    gui::app::App,
    picks,
    records::ProjectionRecord,
};

use super::Page;

/// Best two picks from different categories among the top edges.
pub struct BestPairPage;
pub static PAGE: BestPairPage = BestPairPage;

impl Page for BestPairPage {
    fn title(&self) -> &'static str { "Best 2-Man Bet" }
    fn view(&self) -> View { View::BestPair }

    fn rows<'a>(&self, app: &'a App) -> Vec<&'a ProjectionRecord> {
        match picks::best_pair(app.all_rows(), app.state.options.view.top_picks) {
            Some((a, b)) => vec![a, b],
            None => Vec::new(),
        }
    }

    fn empty_text(&self) -> &'static str {
        "Need projections from at least two categories"
    }
}
