// src/scrape.rs
//
// Game-log fetcher: player list → provider game logs → `<category>_l10` files.
// Requests are sequential with a fixed pause; the provider throttles bursts.

use std::{path::PathBuf, thread, time::Duration};

use chrono::NaiveDate;

use crate::{
    config::consts::{L10_GAMES, PLAYER_INDEX_FILE},
    config::options::{Category, FetchOptions, PipelineOptions},
    core::net::StatsClient,
    csv::write_table,
    error::{Error, Result},
    players::{self, PlayerIndex},
    progress::Progress,
    records::L10Record,
    specs::gamelog::{self, GameLine},
};

/// Where game logs come from. The provider in production, fixtures in tests.
pub trait GameLogSource {
    fn player_id(&self, name: &str) -> Option<u32>;
    fn games(&self, player_id: u32) -> Result<Vec<GameLine>>;
}

pub struct ProviderSource {
    client: StatsClient,
    index: PlayerIndex,
    season: String,
}

impl ProviderSource {
    /// Builds the client and loads the player index (cached in `.store`).
    pub fn connect(season: &str, refresh_index: bool) -> Result<Self> {
        let client = StatsClient::new()?;
        let index = players::load_index(&client, season, refresh_index)?;
        logd!("Fetch: {} players in index ({})", index.len(), PLAYER_INDEX_FILE);
        Ok(Self { client, index, season: s!(season) })
    }
}

impl GameLogSource for ProviderSource {
    fn player_id(&self, name: &str) -> Option<u32> {
        self.index.find_id(name)
    }
    fn games(&self, player_id: u32) -> Result<Vec<GameLine>> {
        gamelog::fetch(&self.client, player_id, &self.season)
    }
}

#[derive(Debug, Default)]
pub struct FetchSummary {
    pub files_written: Vec<PathBuf>,
    pub fetched: usize,
    /// (player, reason)
    pub skipped: Vec<(String, String)>,
}

/// Cutoff from options, or today's local date.
pub fn resolve_cutoff(opts: &FetchOptions) -> Result<NaiveDate> {
    match opts.cutoff.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => gamelog::parse_date(s)
            .ok_or_else(|| Error::Config(format!("bad cutoff date '{}', expected YYYY-MM-DD", s))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Call `f` until it succeeds, at most `retries` extra times, doubling the wait.
pub fn with_retry<T>(retries: u32, base_ms: u64, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    let mut attempt = 0;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) if attempt < retries => {
                let wait = base_ms.saturating_mul(1 << attempt.min(16));
                logw!("Fetch: attempt {} failed ({}), retrying in {} ms", attempt + 1, e, wait);
                if wait > 0 {
                    thread::sleep(Duration::from_millis(wait));
                }
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// L10 rows for one player: one record per category that has any values.
/// Slots follow `games` one to one, so a missing stat leaves a gap.
pub fn l10_rows(player: &str, games: &[GameLine]) -> Vec<(Category, L10Record)> {
    Category::ALL.iter()
        .filter_map(|&cat| {
            let slots: Vec<Option<f64>> = games.iter().map(|g| g.stat(cat)).collect();
            if slots.iter().all(Option::is_none) { return None; }
            Some((cat, L10Record::from_slots(player, &slots)))
        })
        .collect()
}

/// Fetch every listed player and write the three L10 files into `out.data_dir`.
/// Unknown players and failed fetches are skipped; a file is only written
/// when it has at least one row.
pub fn fetch_l10(
    source: &dyn GameLogSource,
    names: &[String],
    opts: &FetchOptions,
    out: &PipelineOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchSummary> {
    let cutoff = resolve_cutoff(opts)?;
    let mut summary = FetchSummary::default();
    let mut by_cat: Vec<(Category, Vec<L10Record>)> = Category::ALL.iter().map(|&c| (c, Vec::new())).collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
        p.log(&format!("Fetching game logs for {} players (cutoff {})…", names.len(), cutoff));
    }

    for (i, name) in names.iter().enumerate() {
        if i > 0 && opts.pause_ms > 0 {
            thread::sleep(Duration::from_millis(opts.pause_ms)); // be polite
        }

        let outcome = match source.player_id(name) {
            None => Err(Error::PlayerNotFound(name.clone())),
            Some(id) => with_retry(opts.retries, opts.backoff_ms, || source.games(id))
                .map(|games| gamelog::last_n(games, cutoff, L10_GAMES))
                .and_then(|games| if games.is_empty() { Err(Error::NoGames(id)) } else { Ok(games) }),
        };

        match outcome {
            Ok(games) => {
                for (cat, rec) in l10_rows(name, &games) {
                    if let Some((_, rows)) = by_cat.iter_mut().find(|(c, _)| *c == cat) {
                        rows.push(rec);
                    }
                }
                summary.fetched += 1;
                logd!("Fetch: {} ({} games)", name, games.len());
                if let Some(p) = progress.as_deref_mut() { p.item_done(name); }
            }
            Err(e) => {
                logw!("Fetch: skipping {}: {}", name, e);
                if let Some(p) = progress.as_deref_mut() { p.item_failed(name, &e.to_string()); }
                summary.skipped.push((name.clone(), e.to_string()));
            }
        }
    }

    for (cat, rows) in &by_cat {
        if rows.is_empty() { continue; }
        let path = out.path(cat.l10_file(out.format));
        let data: Vec<Vec<String>> = rows.iter().map(L10Record::to_row).collect();
        write_table(&path, out.format.delim(), &L10Record::headers(), &data)?;
        logf!("Fetch: wrote {} ({} players)", path.display(), rows.len());
        summary.files_written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok(summary)
}
