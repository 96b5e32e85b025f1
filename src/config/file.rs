// src/config/file.rs
//
// `nba_props.toml` <-> AppOptions. Every section is optional; anything
// missing falls back to the defaults in `consts.rs`.

use std::{fs, path::Path};

use crate::error::{Error, Result};
use super::options::AppOptions;

/// Load options from `path`. A missing file is not an error.
pub fn load(path: &Path) -> Result<AppOptions> {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)?;
    let opts = parse(&text)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    logf!("Config: loaded {}", path.display());
    Ok(opts)
}

pub fn parse(text: &str) -> std::result::Result<AppOptions, toml::de::Error> {
    toml::from_str(text)
}

pub fn save(path: &Path, opts: &AppOptions) -> Result<()> {
    let text = toml::to_string_pretty(opts)
        .map_err(|e| Error::Config(e.to_string()))?;
    crate::file::ensure_parent(path)?;
    fs::write(path, text)?;
    logf!("Config: saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{Category, OutputFormat, StrategyKind};

    #[test]
    fn partial_file_keeps_defaults() {
        let opts = parse(
            r#"
            [fetch]
            season = "2023-24"
            pause_ms = 500

            [pipeline]
            strategy = "model"
            categories = ["points", "assists"]
            "#,
        )
        .unwrap();

        assert_eq!(opts.fetch.season, "2023-24");
        assert_eq!(opts.fetch.pause_ms, 500);
        assert_eq!(opts.fetch.retries, crate::config::consts::FETCH_RETRIES);
        assert_eq!(opts.pipeline.strategy, StrategyKind::Model);
        assert_eq!(opts.pipeline.format, OutputFormat::Csv);
        assert_eq!(opts.pipeline.categories, vec![Category::Points, Category::Assists]);
        assert_eq!(opts.view.points_threshold, crate::config::consts::POINTS_THRESHOLD);
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(parse("").unwrap(), AppOptions::default());
    }
}
