// tests/pipeline_e2e.rs
use std::fs;
use std::path::PathBuf;

use nba_props::config::options::{Category, PipelineOptions, StrategyKind};
use nba_props::csv::{read_table, write_table};
use nba_props::records::{L10Record, ProjectionRecord};
use nba_props::runner::{self, Stage};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nba_props_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const RAW_POINTS: &str = "\
Over,LeBron James,-110,20.5
Over,LeBron James,-120,20.5
Under,LeBron James,+105,20.5
Under,LeBron James,-115,20.5
Over,Stephen Curry,-105,25.5
";

/// Points odds + L10 for LeBron only. No rebounds/assists inputs.
fn seed(dir: &PathBuf) -> PipelineOptions {
    fs::write(dir.join(Category::Points.odds_file()), RAW_POINTS).unwrap();

    let opts = PipelineOptions { data_dir: dir.clone(), ..PipelineOptions::default() };
    let l10 = L10Record::from_values("LeBron James", &[22.0; 10]);
    write_table(
        &opts.path(Category::Points.l10_file(opts.format)),
        b',',
        &L10Record::headers(),
        &[l10.to_row()],
    ).unwrap();
    opts
}

#[test]
fn run_all_writes_every_stage_and_skips_missing_categories() {
    let dir = tmp_dir("run_all");
    let opts = seed(&dir);

    let summary = runner::run_all(&opts, None);
    assert_eq!(summary.files_written.len(), 3);
    let skipped: Vec<Category> = summary.skipped.iter().map(|(c, _)| *c).collect();
    assert_eq!(skipped, vec![Category::Rebounds, Category::Assists]);

    let cleaned = fs::read_to_string(dir.join("Cleaned_Best_Odds_Points.csv")).unwrap();
    assert_eq!(cleaned, "\
player,best_over_odds,best_under_odds,best_point
LeBron James,-120,105,20.5
Stephen Curry,-105,,25.5
");

    // Curry has no game log: present after merge, dropped at projection.
    let merged = read_table(&dir.join("Merged_Points.csv"), b',').unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.headers.last().map(String::as_str), Some("category"));

    let projected = fs::read_to_string(dir.join("Projections_Points.csv")).unwrap();
    assert_eq!(projected, "\
player,category,best_over_odds,best_under_odds,best_point,average,projection,edge
LeBron James,Points,-120,105,20.5,22,21.25,0.75
");
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tmp_dir("idempotent");
    let opts = seed(&dir);

    runner::run_all(&opts, None);
    let first: Vec<Vec<u8>> = ["Cleaned_Best_Odds_Points.csv", "Merged_Points.csv", "Projections_Points.csv"]
        .iter().map(|f| fs::read(dir.join(f)).unwrap()).collect();

    runner::run_all(&opts, None);
    let second: Vec<Vec<u8>> = ["Cleaned_Best_Odds_Points.csv", "Merged_Points.csv", "Projections_Points.csv"]
        .iter().map(|f| fs::read(dir.join(f)).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn model_projection_ignores_feature_order() {
    let dir = tmp_dir("model");
    let mut opts = seed(&dir);
    opts.strategy = StrategyKind::Model;
    opts.categories = vec![Category::Points];

    let model_path = opts.path(Category::Points.model_file());
    let read = |opts: &PipelineOptions| {
        let t = read_table(&opts.path(Category::Points.projections_file(StrategyKind::Model, opts.format)), b',').unwrap();
        ProjectionRecord::from_table(&t, Category::Points).unwrap()
    };

    fs::write(&model_path, r#"{ "features": ["average", "best_point"], "coefficients": [1.0, 0.0], "intercept": 0.5 }"#).unwrap();
    let s = runner::run(&opts, Stage::All, None);
    assert!(s.skipped.is_empty(), "{:?}", s.skipped);
    let a = read(&opts);

    fs::write(&model_path, r#"{ "features": ["best_point", "average"], "coefficients": [0.0, 1.0], "intercept": 0.5 }"#).unwrap();
    runner::run(&opts, Stage::Project, None);
    let b = read(&opts);

    assert_eq!(a.len(), 1);
    assert_eq!(a[0].projection, 22.5);
    assert_eq!(a[0].edge, 2.0);
    assert_eq!(a, b);
    assert!(dir.join("AI_Projections_Points.csv").is_file());
}

#[test]
fn model_missing_feature_skips_category() {
    let dir = tmp_dir("model_missing");
    let mut opts = seed(&dir);
    opts.strategy = StrategyKind::Model;
    opts.categories = vec![Category::Points];
    fs::write(
        opts.path(Category::Points.model_file()),
        r#"{ "features": ["minutes"], "coefficients": [1.0], "intercept": 0.0 }"#,
    ).unwrap();

    let s = runner::run_all(&opts, None);
    assert_eq!(s.skipped.len(), 1);
    assert!(s.skipped[0].1.contains("minutes"));
}

#[test]
fn wrong_width_odds_file_skips_only_that_category() {
    let dir = tmp_dir("malformed");
    let mut opts = seed(&dir);
    fs::write(dir.join(Category::Rebounds.odds_file()), "Over,Nikola Jokic,-110\n").unwrap();
    opts.categories = vec![Category::Rebounds, Category::Points];

    let s = runner::run(&opts, Stage::CleanOdds, None);
    assert_eq!(s.skipped.len(), 1);
    assert_eq!(s.skipped[0].0, Category::Rebounds);
    assert!(dir.join("Cleaned_Best_Odds_Points.csv").is_file());
    assert!(!dir.join("Cleaned_Best_Odds_Rebounds.csv").exists());
}

#[test]
fn tsv_output_uses_tab_and_extension() {
    let dir = tmp_dir("tsv");
    let mut opts = seed(&dir);
    opts.format = nba_props::config::options::OutputFormat::Tsv;
    opts.categories = vec![Category::Points];

    runner::run(&opts, Stage::CleanOdds, None);
    let text = fs::read_to_string(dir.join("Cleaned_Best_Odds_Points.tsv")).unwrap();
    assert!(text.starts_with("player\tbest_over_odds\tbest_under_odds\tbest_point\n"));
}

#[test]
fn partial_stage_output_is_reported() {
    let dir = tmp_dir("partial");
    let mut opts = seed(&dir);
    fs::write(dir.join(Category::Rebounds.odds_file()), "Over,Nikola Jokic,-110,11.5\n").unwrap();
    opts.categories = vec![Category::Rebounds];

    // Odds clean fine, but there is no rebounds L10 file to merge with.
    let s = runner::run_all(&opts, None);
    assert_eq!(s.skipped.len(), 1);
    assert_eq!(s.skipped[0].0, Category::Rebounds);
    assert_eq!(s.files_written, vec![dir.join("Cleaned_Best_Odds_Rebounds.csv")]);
    assert!(dir.join("Cleaned_Best_Odds_Rebounds.csv").is_file());
}
