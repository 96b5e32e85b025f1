// src/config/consts.rs

// Net config
pub const HOST: &str = "stats.nba.com";
pub const PREFIX: &str = "/stats/";
pub const DEFAULT_SEASON: &str = "2024-25";
pub const SEASON_TYPE: &str = "Regular Season";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const PLAYER_INDEX_FILE: &str = "player_index.csv";

// Config file
pub const CONFIG_FILE: &str = "nba_props.toml";

// Fetch
pub const L10_GAMES: usize = 10;
pub const REQUEST_PAUSE_MS: u64 = 2_000; // provider rate limit
pub const FETCH_RETRIES: u32 = 2;
pub const BACKOFF_BASE_MS: u64 = 1_000;

// Pipeline
pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_PLAYERS_FILE: &str = "players.txt";
pub const DEFAULT_CLEAN_PLAYERS_FILE: &str = "cleaned_players.txt";

// Presentation
pub const POINTS_THRESHOLD: f64 = 10.0;
pub const REBOUNDS_THRESHOLD: f64 = 4.0;
pub const ASSISTS_THRESHOLD: f64 = 3.0;
pub const TOP_PICKS: usize = 10;
