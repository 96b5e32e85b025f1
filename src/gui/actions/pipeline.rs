// src/gui/actions/pipeline.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Clean, merge and project every category, then reload the tables.
pub fn run_pipeline(app: &mut App) {
    let opts = app.state.options.pipeline.clone();
    logf!("Pipeline: Begin dir={} strategy={:?}", opts.data_dir.display(), opts.strategy);

    let mut prog = GuiProgress::new(app.status.clone());
    let summary = runner::run_all(&opts, Some(&mut prog));

    logf!("Pipeline: wrote {} files, skipped {} categories",
        summary.files_written.len(), summary.skipped.len());

    app.reload();
    if summary.skipped.is_empty() {
        app.status(format!("Pipeline done ({} files)", summary.files_written.len()));
    } else {
        let names: Vec<&str> = summary.skipped.iter().map(|(c, _)| c.title()).collect();
        app.status(format!("Pipeline done, skipped: {}", names.join(", ")));
    }
}
