// src/gui/app.rs
use std::{
    collections::BTreeMap,
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::CONFIG_FILE,
        file as config_file,
        options::Category,
        state::{AppState, View},
    },
    records::ProjectionRecord,
    store::ProjectionCache,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = match config_file::load(Path::new(CONFIG_FILE)) {
        Ok(options) => AppState { options, ..AppState::default() },
        Err(e) => {
            loge!("Config: {} unreadable ({}), using defaults", CONFIG_FILE, e);
            AppState::default()
        }
    };

    eframe::run_native(
        "NBA Props",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // data dir text field; applied on Enter / Reload
    pub data_dir_text: String,

    // projection files, parsed once per file version
    pub cache: ProjectionCache,

    // rows currently loaded, per category
    pub data: BTreeMap<Category, Vec<ProjectionRecord>>,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let data_dir_text = state.options.pipeline.data_dir.to_string_lossy().into_owned();
        let mut app = Self {
            state,
            data_dir_text,
            cache: ProjectionCache::new(),
            data: BTreeMap::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.reload();
        logf!("Init: view={:?}, categories={}", app.state.gui.view, app.data.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.state.gui.view) }

    #[inline]
    pub fn set_view(&mut self, view: View) { self.state.gui.view = view; }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn rows_for(&self, cat: Category) -> &[ProjectionRecord] {
        self.data.get(&cat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every loaded row, all categories.
    pub fn all_rows(&self) -> impl Iterator<Item = &ProjectionRecord> {
        self.data.values().flatten()
    }

    /// Pull every category's projection file through the cache.
    /// Unchanged files are not re-parsed.
    pub fn reload(&mut self) {
        let p = self.state.options.pipeline.clone();
        self.data.clear();
        let mut missing = Vec::new();

        for &cat in &p.categories {
            let path = p.path(cat.projections_file(p.strategy, p.format));
            match self.cache.get_or_load(&path, p.format.delim(), cat) {
                Ok(rows) => { self.data.insert(cat, rows.to_vec()); }
                Err(e) => {
                    logd!("Cache: {} not loaded ({})", cat, e);
                    missing.push(cat.title());
                }
            }
        }

        let (hits, misses) = self.cache.stats();
        logd!("Cache: hits={} misses={}", hits, misses);
        if missing.is_empty() {
            self.status(format!("Loaded {} categories", self.data.len()));
        } else {
            self.status(format!("No projections for: {}", missing.join(", ")));
        }
    }

    /// Drop cached files and read everything again.
    pub fn hard_reload(&mut self) {
        self.cache.clear();
        self.reload();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::controls::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
