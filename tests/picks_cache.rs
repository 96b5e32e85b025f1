// tests/picks_cache.rs
use std::fs;
use std::path::PathBuf;

use nba_props::config::options::{Category, ViewOptions};
use nba_props::picks::{best_pair, best_picks, lookup, top_picks};
use nba_props::records::ProjectionRecord;
use nba_props::store::ProjectionCache;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nba_props_picks_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn rec(player: &str, cat: Category, line: f64, projection: f64) -> ProjectionRecord {
    ProjectionRecord {
        player: player.into(),
        category: cat,
        best_over_price: Some(-110.0),
        best_under_price: Some(-110.0),
        line,
        average: None,
        projection,
        edge: projection - line,
    }
}

fn sample() -> Vec<ProjectionRecord> {
    vec![
        rec("LeBron James", Category::Points, 20.5, 21.25),
        rec("Stephen Curry", Category::Points, 25.5, 29.0),
        rec("Bench Guy", Category::Points, 6.5, 12.0),
        rec("Nikola Jokić", Category::Rebounds, 12.5, 14.0),
        rec("Tyrese Haliburton", Category::Assists, 9.5, 9.0),
    ]
}

#[test]
fn best_picks_respect_default_thresholds() {
    let rows = sample();
    let view = ViewOptions::default();

    let points: Vec<&str> = best_picks(&rows[..3], view.threshold(Category::Points))
        .iter().map(|r| r.player.as_str()).collect();
    assert_eq!(points, vec!["Stephen Curry", "LeBron James"]);
}

#[test]
fn lookup_is_case_insensitive_substring() {
    let rows = sample();
    let hits = lookup(&rows, "JOK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category, Category::Rebounds);
    assert_eq!(lookup(&rows, "").len(), rows.len());
}

#[test]
fn pair_spans_two_categories() {
    let rows = sample();
    let top = top_picks(&rows, 3);
    assert_eq!(top[0].player, "Bench Guy");

    let (a, b) = best_pair(&rows, 10).unwrap();
    assert_eq!(a.player, "Bench Guy");
    assert_eq!(b.player, "Nikola Jokić");
}

#[test]
fn cache_reloads_only_when_the_file_changes() {
    let dir = tmp_dir("cache");
    let path = dir.join("Projections_Points.csv");
    fs::write(&path, "player,best_point,projection\nA,20.5,21\n").unwrap();

    let mut cache = ProjectionCache::new();
    assert_eq!(cache.get_or_load(&path, b',', Category::Points).unwrap().len(), 1);
    assert_eq!(cache.get_or_load(&path, b',', Category::Points).unwrap().len(), 1);
    assert_eq!(cache.stats(), (1, 1));

    fs::write(&path, "player,best_point,projection\nA,20.5,21\nB,5.5,7.25\n").unwrap();
    let rows = cache.get_or_load(&path, b',', Category::Points).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].edge, 1.75);
    assert_eq!(rows[1].category, Category::Points);
    assert_eq!(cache.stats(), (1, 2));

    assert!(cache.invalidate(&path));
    assert!(cache.is_empty());
    assert!(cache.get_or_load(&dir.join("missing.csv"), b',', Category::Points).is_err());
}
