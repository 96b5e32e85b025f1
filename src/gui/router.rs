// src/gui/router.rs
use crate::config::{options::Category, state::View};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::category::POINTS,
    &pages::category::REBOUNDS,
    &pages::category::ASSISTS,
    &pages::best_pair::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(view: View) -> &'static dyn Page {
    match view {
        View::Category(Category::Points)   => &pages::category::POINTS,
        View::Category(Category::Rebounds) => &pages::category::REBOUNDS,
        View::Category(Category::Assists)  => &pages::category::ASSISTS,
        View::BestPair                     => &pages::best_pair::PAGE,
    }
}
