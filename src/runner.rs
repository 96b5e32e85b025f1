// src/runner.rs
//
// Pipeline stages, one category at a time. Each stage reads the previous
// stage's file from `data_dir` and writes its own; a category whose inputs
// are missing or malformed is skipped and the rest carry on.

use std::path::PathBuf;

use crate::{
    config::options::{Category, PipelineOptions, StrategyKind},
    csv::{read_table, write_table},
    error::Result,
    merge,
    model::LinearModel,
    odds,
    progress::Progress,
    projection::{Heuristic, ModelStrategy, ProjectionStrategy},
    records::{BestOddsRecord, L10Record, MergedRecord, ProjectionRecord},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    CleanOdds,
    Merge,
    Project,
    /// CleanOdds → Merge → Project
    All,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// (category, reason)
    pub skipped: Vec<(Category, String)>,
}

/* ---------------- Stages ---------------- */

/// Raw sportsbook quotes → one best-odds row per player.
pub fn clean_odds(opts: &PipelineOptions, cat: Category) -> Result<PathBuf> {
    let src = opts.path(cat.odds_file());
    let parsed = odds::load_quotes(&src)?;
    if parsed.dropped > 0 {
        logw!("{}: dropped {} malformed odds rows", cat, parsed.dropped);
    }

    let best = odds::best_odds(&parsed.quotes);
    let rows: Vec<Vec<String>> = best.iter().map(BestOddsRecord::to_row).collect();
    let dst = opts.path(cat.cleaned_file(opts.format));
    write_table(&dst, opts.format.delim(), &BestOddsRecord::HEADERS, &rows)?;

    logf!("{}: {} quotes -> {} players ({})", cat, parsed.quotes.len(), best.len(), dst.display());
    Ok(dst)
}

/// Cleaned odds + L10 game logs → merged rows (left join on player).
pub fn merge(opts: &PipelineOptions, cat: Category) -> Result<PathBuf> {
    let delim = opts.format.delim();
    let odds_t = read_table(&opts.path(cat.cleaned_file(opts.format)), delim)?;
    let l10_t = read_table(&opts.path(cat.l10_file(opts.format)), delim)?;

    let best = BestOddsRecord::from_table(&odds_t)?;
    let l10 = L10Record::from_table(&l10_t)?;
    let merged = merge::merge(&best, &l10, cat);

    let rows: Vec<Vec<String>> = merged.iter().map(MergedRecord::to_row).collect();
    let dst = opts.path(cat.merged_file(opts.format));
    write_table(&dst, delim, &MergedRecord::headers(), &rows)?;

    logf!("{}: merged {} rows, {} with game logs ({})",
        cat, merged.len(), merge::matched(&merged), dst.display());
    Ok(dst)
}

/// Strategy configured for this category. The model artifact is
/// `AI_Model_<Category>.json` in `data_dir`.
pub fn strategy_for(opts: &PipelineOptions, cat: Category) -> Result<Box<dyn ProjectionStrategy>> {
    match opts.strategy {
        StrategyKind::Heuristic => Ok(Box::new(Heuristic)),
        StrategyKind::Model => {
            let model = LinearModel::load(&opts.path(cat.model_file()))?;
            Ok(Box::new(ModelStrategy::new(model)))
        }
    }
}

/// Merged rows → projections with edge.
pub fn project(opts: &PipelineOptions, cat: Category, strategy: &dyn ProjectionStrategy) -> Result<PathBuf> {
    let delim = opts.format.delim();
    let t = read_table(&opts.path(cat.merged_file(opts.format)), delim)?;
    let merged = MergedRecord::from_table(&t, cat)?;
    let projected = strategy.project(&merged)?;

    let rows: Vec<Vec<String>> = projected.iter().map(ProjectionRecord::to_row).collect();
    let dst = opts.path(cat.projections_file(opts.strategy, opts.format));
    write_table(&dst, delim, &ProjectionRecord::HEADERS, &rows)?;

    logf!("{}: {} projections via {} ({} rows dropped) ({})",
        cat, projected.len(), strategy.name(), merged.len() - projected.len(), dst.display());
    Ok(dst)
}

/// Runs `stage` for one category, pushing each file into `written` as soon as
/// it is on disk so a later failure still reports the earlier outputs.
fn run_stage_for(opts: &PipelineOptions, cat: Category, stage: Stage, written: &mut Vec<PathBuf>) -> Result<()> {
    if matches!(stage, Stage::CleanOdds | Stage::All) {
        written.push(clean_odds(opts, cat)?);
    }
    if matches!(stage, Stage::Merge | Stage::All) {
        written.push(merge(opts, cat)?);
    }
    if matches!(stage, Stage::Project | Stage::All) {
        let strategy = strategy_for(opts, cat)?;
        written.push(project(opts, cat, strategy.as_ref())?);
    }
    Ok(())
}

/// Run `stage` for every configured category. Per-category failures are
/// logged and recorded in `skipped`; they never abort the other categories.
pub fn run(
    opts: &PipelineOptions,
    stage: Stage,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.categories.len());
    }

    for &cat in &opts.categories {
        match run_stage_for(opts, cat, stage, &mut summary.files_written) {
            Ok(()) => {
                if let Some(p) = progress.as_deref_mut() { p.item_done(cat.title()); }
            }
            Err(e) => {
                loge!("{}: skipped ({})", cat, e);
                if let Some(p) = progress.as_deref_mut() { p.item_failed(cat.title(), &e.to_string()); }
                summary.skipped.push((cat, e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    summary
}

/// Every stage for every category.
pub fn run_all(opts: &PipelineOptions, progress: Option<&mut dyn Progress>) -> RunSummary {
    run(opts, Stage::All, progress)
}
