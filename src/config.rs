//! Environment-driven settings. Call `Config::from_env()` once in `main`.
use crate::errors::{LoadError, LoadResult};
use std::num::NonZeroU64;
use std::path::PathBuf;

pub const DEFAULT_CSV: &str = "vehicles.csv";
pub const DEFAULT_DB: &str = "car_listings.db";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    /// Commit after this many accepted listings. `None` commits once at the end.
    pub commit_every: Option<NonZeroU64>,
    /// Stop after this many data rows have been read.
    pub max_rows: Option<u64>,
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV),
            db_path: PathBuf::from(DEFAULT_DB),
            commit_every: None,
            max_rows: None,
            report_path: None,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load .env if present, then read `LISTINGS_*` variables.
    pub fn from_env() -> LoadResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LoadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let commit_every = match get("LISTINGS_COMMIT_EVERY") {
            Some(raw) => {
                let n = parse_u64("LISTINGS_COMMIT_EVERY", &raw)?;
                Some(NonZeroU64::new(n).ok_or_else(|| {
                    LoadError::Config("LISTINGS_COMMIT_EVERY must be greater than zero".into())
                })?)
            }
            None => None,
        };

        let max_rows = get("LISTINGS_MAX_ROWS")
            .map(|raw| parse_u64("LISTINGS_MAX_ROWS", &raw))
            .transpose()?;

        let dry_run = get("LISTINGS_DRY_RUN")
            .map(|raw| parse_flag("LISTINGS_DRY_RUN", &raw))
            .transpose()?
            .unwrap_or(defaults.dry_run);

        Ok(Self {
            csv_path: get("LISTINGS_CSV").map(PathBuf::from).unwrap_or(defaults.csv_path),
            db_path: get("LISTINGS_DB").map(PathBuf::from).unwrap_or(defaults.db_path),
            commit_every,
            max_rows,
            report_path: get("LISTINGS_REPORT").map(PathBuf::from),
            dry_run,
        })
    }
}

fn parse_u64(key: &str, raw: &str) -> LoadResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| LoadError::Config(format!("{key}={raw:?}: {e}")))
}

/// Accepts 1/true/on/yes and 0/false/off/no, case-insensitive.
fn parse_flag(key: &str, raw: &str) -> LoadResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(LoadError::Config(format!("{key}={other:?} is not a boolean"))),
    }
}
