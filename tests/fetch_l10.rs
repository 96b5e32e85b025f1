// tests/fetch_l10.rs
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use nba_props::config::options::{Category, FetchOptions, PipelineOptions};
use nba_props::csv::read_table;
use nba_props::error::{Error, Result};
use nba_props::players::clean_players_file;
use nba_props::records::L10Record;
use nba_props::scrape::{fetch_l10, GameLogSource};
use nba_props::specs::gamelog::GameLine;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nba_props_fetch_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn game(day: u32, pts: f64, reb: f64, ast: Option<f64>) -> GameLine {
    GameLine {
        date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        points: Some(pts),
        rebounds: Some(reb),
        assists: ast,
    }
}

/// Player 1 has twelve games (one after the cutoff); player 2 fails once then
/// succeeds; player 3 always fails.
struct Fixture {
    calls_2: Cell<u32>,
}

impl GameLogSource for Fixture {
    fn player_id(&self, name: &str) -> Option<u32> {
        match name {
            "Nikola Jokić" => Some(1),
            "Luka Doncic" => Some(2),
            "Broken Player" => Some(3),
            _ => None,
        }
    }

    fn games(&self, id: u32) -> Result<Vec<GameLine>> {
        match id {
            1 => Ok((1..=12).map(|d| game(d, d as f64, 10.0, Some(5.0))).collect()),
            2 => {
                self.calls_2.set(self.calls_2.get() + 1);
                if self.calls_2.get() == 1 {
                    Err(Error::Status { status: 500, url: "x".into() })
                } else {
                    Ok(vec![game(3, 30.0, 8.0, None), game(5, 32.0, 9.0, None)])
                }
            }
            _ => Err(Error::Status { status: 500, url: "x".into() }),
        }
    }
}

fn fetch_opts() -> FetchOptions {
    FetchOptions {
        cutoff: Some("2025-01-11".into()),
        pause_ms: 0,
        retries: 1,
        backoff_ms: 0,
        ..FetchOptions::default()
    }
}

#[test]
fn writes_l10_files_and_skips_failures() {
    let dir = tmp_dir("l10");
    let out = PipelineOptions { data_dir: dir.clone(), ..PipelineOptions::default() };
    let src = Fixture { calls_2: Cell::new(0) };
    let names: Vec<String> = ["Nikola Jokić", "Nobody Known", "Luka Doncic", "Broken Player"]
        .iter().map(|s| s.to_string()).collect();

    let summary = fetch_l10(&src, &names, &fetch_opts(), &out, None).unwrap();
    assert_eq!(summary.fetched, 2);
    let skipped: Vec<&str> = summary.skipped.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(skipped, vec!["Nobody Known", "Broken Player"]);
    assert_eq!(src.calls_2.get(), 2);

    // Only players with assists data appear in the assists file.
    assert_eq!(summary.files_written.len(), 3);

    let t = read_table(&dir.join("points_l10.csv"), b',').unwrap();
    let rows = L10Record::from_table(&t).unwrap();
    assert_eq!(rows.len(), 2);

    // Jokić: games 11..2 (the 12th is after the cutoff), newest first.
    let j = &rows[0];
    assert_eq!(j.games[0], Some(11.0));
    assert_eq!(j.games[9], Some(2.0));
    assert_eq!(j.average, Some(6.5));

    // Doncic: two games, padded.
    let l = &rows[1];
    assert_eq!(l.games[0], Some(32.0));
    assert_eq!(l.games[2], None);
    assert_eq!(l.average, Some(31.0));

    let a = read_table(&dir.join(Category::Assists.l10_file(out.format)), b',').unwrap();
    assert_eq!(a.len(), 1);
}

#[test]
fn header_matches_game_log_layout() {
    let dir = tmp_dir("header");
    let out = PipelineOptions { data_dir: dir.clone(), ..PipelineOptions::default() };
    let src = Fixture { calls_2: Cell::new(1) };

    fetch_l10(&src, &["Luka Doncic".to_string()], &fetch_opts(), &out, None).unwrap();
    let text = fs::read_to_string(dir.join("rebounds_l10.csv")).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("Player,Game 1,Game 2,"));
    assert!(header.ends_with(",Game 10,Average"));
    assert!(!dir.join("assists_l10.csv").exists());
}

/// Records when each game log was requested.
struct Clock {
    calls: RefCell<Vec<Instant>>,
}

impl GameLogSource for Clock {
    fn player_id(&self, name: &str) -> Option<u32> {
        name.strip_prefix("P").and_then(|n| n.parse().ok())
    }

    fn games(&self, _id: u32) -> Result<Vec<GameLine>> {
        self.calls.borrow_mut().push(Instant::now());
        Ok(vec![game(1, 10.0, 5.0, Some(3.0))])
    }
}

#[test]
fn pauses_between_players_only() {
    let dir = tmp_dir("pause");
    let out = PipelineOptions { data_dir: dir, ..PipelineOptions::default() };
    let opts = FetchOptions { pause_ms: 50, ..fetch_opts() };
    let src = Clock { calls: RefCell::new(Vec::new()) };
    let names: Vec<String> = ["P1", "P2", "P3"].iter().map(|s| s.to_string()).collect();

    let start = Instant::now();
    let summary = fetch_l10(&src, &names, &opts, &out, None).unwrap();
    let elapsed = start.elapsed();
    assert_eq!(summary.fetched, 3);

    let calls = src.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].duration_since(start) < Duration::from_millis(50), "paused before the first request");
    for pair in calls.windows(2) {
        assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(50));
    }
    assert!(elapsed >= Duration::from_millis(100));
}

#[test]
fn dedupe_players_file() {
    let dir = tmp_dir("dedupe");
    let src = dir.join("players.txt");
    let dst = dir.join("cleaned_players.txt");
    fs::write(&src, "LeBron James\nStephen Curry\n\nLeBron James\n  Stephen Curry \nKevin Durant\n").unwrap();

    let (read, kept) = clean_players_file(&src, &dst).unwrap();
    assert_eq!((read, kept), (5, 3));
    assert_eq!(fs::read_to_string(&dst).unwrap(), "LeBron James\nStephen Curry\nKevin Durant\n");
}
