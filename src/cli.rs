// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre};

use crate::{
    config::{
        consts::{CONFIG_FILE, DEFAULT_CLEAN_PLAYERS_FILE},
        file as config_file,
        options::{AppOptions, Category, OutputFormat, StrategyKind},
    },
    core::sanitize::fmt_1dp,
    csv::read_table,
    picks,
    players,
    progress::PrintProgress,
    records::ProjectionRecord,
    runner::{self, RunSummary, Stage},
    scrape::{self, ProviderSource},
};

/// NBA player-prop pipeline: game logs, best odds, projections.
#[derive(Parser)]
#[command(name = "nba_props", version, about)]
pub struct Cli {
    /// TOML config file; missing file means defaults
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding every input and output file
    #[arg(long, short = 'd', global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format for written files
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Restrict to these categories (comma-separated: points,rebounds,assists)
    #[arg(long, short = 'c', global = true, value_delimiter = ',', value_parser = parse_category)]
    pub categories: Vec<Category>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch last-10 game logs for every listed player
    Fetch {
        /// Player list, one name per line
        #[arg(long)]
        players: Option<PathBuf>,

        /// Season string, e.g. 2024-25
        #[arg(long)]
        season: Option<String>,

        /// Only games on or before this date (YYYY-MM-DD); default today
        #[arg(long)]
        cutoff: Option<String>,

        /// Pause between players (ms)
        #[arg(long)]
        pause_ms: Option<u64>,

        /// Extra attempts per player after a failure
        #[arg(long)]
        retries: Option<u32>,

        /// Ignore the cached player index
        #[arg(long)]
        refresh_index: bool,
    },

    /// Remove duplicate names from a player list
    DedupePlayers {
        /// Input list (default: config players file)
        input: Option<PathBuf>,

        #[arg(long, short = 'o', default_value = DEFAULT_CLEAN_PLAYERS_FILE)]
        output: PathBuf,
    },

    /// Raw sportsbook odds → best over/under per player
    CleanOdds,

    /// Best odds + L10 game logs → merged rows
    Merge,

    /// Merged rows → projections with edge
    Project {
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<StrategyKind>,
    },

    /// clean-odds, merge and project for every category
    Run {
        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<StrategyKind>,
    },

    /// Show projections: search, best picks, two-man bet
    Picks {
        /// Case-insensitive player search
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Minimum line (default per category from config)
        #[arg(long)]
        threshold: Option<f64>,

        /// Show the best two-man bet across categories
        #[arg(long)]
        pair: bool,

        #[arg(long, value_parser = parse_strategy)]
        strategy: Option<StrategyKind>,
    },

    /// Print the effective config, or write it out
    Config {
        #[arg(long)]
        write: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| format!("unknown category '{s}' (points, rebounds, assists)"))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "tsv" => Ok(OutputFormat::Tsv),
        other => Err(format!("unknown format '{other}' (csv, tsv)")),
    }
}

fn parse_strategy(s: &str) -> Result<StrategyKind, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "heuristic" => Ok(StrategyKind::Heuristic),
        "model" | "ai" => Ok(StrategyKind::Model),
        other => Err(format!("unknown strategy '{other}' (heuristic, model)")),
    }
}

/// Config file values, then global flags on top.
fn effective_options(cli: &Cli) -> color_eyre::Result<AppOptions> {
    let mut opts = config_file::load(&cli.config)?;
    if let Some(d) = &cli.data_dir {
        opts.pipeline.data_dir = d.clone();
    }
    if let Some(f) = cli.format {
        opts.pipeline.format = f;
    }
    if !cli.categories.is_empty() {
        opts.pipeline.categories = cli.categories.clone();
    }
    Ok(opts)
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    let mut opts = effective_options(&cli)?;
    let mut progress = PrintProgress::new();

    match cli.command {
        Command::Fetch { players: list, season, cutoff, pause_ms, retries, refresh_index } => {
            let f = &mut opts.fetch;
            if let Some(v) = list { f.players_file = v; }
            if let Some(v) = season { f.season = v; }
            if cutoff.is_some() { f.cutoff = cutoff; }
            if let Some(v) = pause_ms { f.pause_ms = v; }
            if let Some(v) = retries { f.retries = v; }

            let names = players::read_players(&opts.fetch.players_file)?;
            if names.is_empty() {
                bail!("no players in {}", opts.fetch.players_file.display());
            }
            let source = ProviderSource::connect(&opts.fetch.season, refresh_index)?;
            let s = scrape::fetch_l10(&source, &names, &opts.fetch, &opts.pipeline, Some(&mut progress))?;
            println!("Fetched {} players, skipped {}.", s.fetched, s.skipped.len());
            for p in &s.files_written {
                println!("  wrote {}", p.display());
            }
        }

        Command::DedupePlayers { input, output } => {
            let src = input.unwrap_or_else(|| opts.fetch.players_file.clone());
            let (read, kept) = players::clean_players_file(&src, &output)?;
            println!("{read} names -> {kept} unique ({})", output.display());
        }

        Command::CleanOdds => report(runner::run(&opts.pipeline, Stage::CleanOdds, Some(&mut progress))),
        Command::Merge => report(runner::run(&opts.pipeline, Stage::Merge, Some(&mut progress))),
        Command::Project { strategy } => {
            if let Some(s) = strategy { opts.pipeline.strategy = s; }
            report(runner::run(&opts.pipeline, Stage::Project, Some(&mut progress)));
        }
        Command::Run { strategy } => {
            if let Some(s) = strategy { opts.pipeline.strategy = s; }
            report(runner::run_all(&opts.pipeline, Some(&mut progress)));
        }

        Command::Picks { search, threshold, pair, strategy } => {
            if let Some(s) = strategy { opts.pipeline.strategy = s; }
            print_picks(&opts, search.as_deref(), threshold, pair)?;
        }

        Command::Config { write } => {
            if write {
                config_file::save(&cli.config, &opts)?;
                println!("wrote {}", cli.config.display());
            } else {
                let text = toml::to_string_pretty(&opts).map_err(|e| eyre!(e))?;
                print!("{text}");
            }
        }
    }
    Ok(())
}

fn report(summary: RunSummary) {
    for p in &summary.files_written {
        println!("wrote {}", p.display());
    }
    for (cat, reason) in &summary.skipped {
        println!("skipped {cat}: {reason}");
    }
}

/// Projection rows per configured category. Unreadable categories are
/// reported and left out.
fn read_projections(opts: &AppOptions) -> color_eyre::Result<Vec<(Category, Vec<ProjectionRecord>)>> {
    let p = &opts.pipeline;
    let mut out = Vec::new();
    for &cat in &p.categories {
        let path = p.path(cat.projections_file(p.strategy, p.format));
        match read_table(&path, p.format.delim()) {
            Ok(t) => out.push((cat, ProjectionRecord::from_table(&t, cat)?)),
            Err(e) => println!("{cat}: {e}"),
        }
    }
    Ok(out)
}

/// Two-man bet over every loaded row; search and thresholds do not apply.
fn pair_of(tables: &[(Category, Vec<ProjectionRecord>)], top: usize) -> Option<(&ProjectionRecord, &ProjectionRecord)> {
    picks::best_pair(tables.iter().flat_map(|(_, rows)| rows), top)
}

fn print_picks(
    opts: &AppOptions,
    search: Option<&str>,
    threshold: Option<f64>,
    pair: bool,
) -> color_eyre::Result<()> {
    let tables = read_projections(opts)?;

    for (cat, rows) in &tables {
        let shown: Vec<&ProjectionRecord> = match search {
            Some(q) => picks::lookup(rows, q),
            None => picks::best_picks(rows, threshold.unwrap_or(opts.view.threshold(*cat))),
        };
        println!("\n== {cat} ({} rows) ==", shown.len());
        print_rows(&shown);
    }

    if pair {
        println!("\n== Best 2-Man Bet ==");
        match pair_of(&tables, opts.view.top_picks) {
            Some((a, b)) => print_rows(&[a, b]),
            None => println!("(need picks from two categories)"),
        }
    }
    Ok(())
}

fn print_rows(rows: &[&ProjectionRecord]) {
    println!("{:<28} {:<9} {:>7} {:>7} {:>10} {:>6}", "Player", "Category", "Line", "Avg", "Projection", "Edge");
    for r in rows {
        println!("{:<28} {:<9} {:>7} {:>7} {:>10} {:>6}",
            r.player, r.category.title(),
            fmt_1dp(Some(r.line)), fmt_1dp(r.average),
            fmt_1dp(Some(r.projection)), fmt_1dp(Some(r.edge)));
    }
}
