// Run settings. Defaults match the layout of the daily report checkout;
// each one can be overridden through the environment.
use std::env;
use std::path::PathBuf;

use crate::reports::DEFAULT_TOP_N;

pub const DEFAULT_DATA_DIR: &str = "./csse_covid_19_daily_reports_us";
pub const DEFAULT_MAP_OUTPUT: &str = "ifr_map.html";
pub const DEFAULT_EXPORT_CSV: &str = "ifr_top10.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub top_n: usize,
    pub map_output: PathBuf,
    pub export_csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            top_n: DEFAULT_TOP_N,
            map_output: PathBuf::from(DEFAULT_MAP_OUTPUT),
            export_csv: PathBuf::from(DEFAULT_EXPORT_CSV),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        if let Some(dir) = lookup("IFR_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("IFR_TOP_N") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => cfg.top_n = n,
                _ => log::warn!(
                    "ignoring IFR_TOP_N={:?}, using {}",
                    raw,
                    DEFAULT_TOP_N
                ),
            }
        }
        if let Some(path) = lookup("IFR_MAP_OUTPUT") {
            cfg.map_output = PathBuf::from(path);
        }
        if let Some(path) = lookup("IFR_EXPORT_CSV") {
            cfg.export_csv = PathBuf::from(path);
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
        assert_eq!(Config::default().top_n, 10);
    }

    #[test]
    fn overrides_apply() {
        let cfg = Config::from_lookup(lookup(&[
            ("IFR_DATA_DIR", "/data/us"),
            ("IFR_TOP_N", "5"),
            ("IFR_MAP_OUTPUT", "out.html"),
        ]));
        assert_eq!(cfg.data_dir, PathBuf::from("/data/us"));
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.map_output, PathBuf::from("out.html"));
        assert_eq!(cfg.export_csv, PathBuf::from(DEFAULT_EXPORT_CSV));
    }

    #[test]
    fn bad_top_n_falls_back() {
        for raw in ["0", "ten", "-1"] {
            let cfg = Config::from_lookup(lookup(&[("IFR_TOP_N", raw)]));
            assert_eq!(cfg.top_n, DEFAULT_TOP_N);
        }
    }
}
