//! Benchmark configuration.
//!
//! The configuration is a JSON object keyed by benchmark name. Each entry gives the input size, the
//! number of timed iterations, the expected checksum and optionally the warmup iteration count:
//!
//! `{ "Compress::BWTHuffEncode": { "size": 1000, "iterations": 3, "checksum": 1048 } }`
//!
//! Entries for benchmarks this program does not know about are ignored, so the configuration of
//! the full benchmark collection can be used as is.

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Configuration used when no file is given on the command line.
pub const DEFAULT_CONFIG: &str = include_str!("../../bench.json");

/// Settings for one benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub iterations: i64,
    #[serde(default)]
    pub checksum: u32,
    pub warmup_iterations: Option<i64>,
}

impl BenchConfig {
    /// Warmup runs default to a fifth of the timed runs, at least one.
    pub fn warmup(&self) -> usize {
        match self.warmup_iterations {
            Some(w) => w as usize,
            None => ((self.iterations as f64 * 0.2) as usize).max(1),
        }
    }

    fn validate(self, name: &str) -> Result<Self, ConfigError> {
        let checks = [
            ("size", self.size),
            ("iterations", self.iterations),
            ("warmup_iterations", self.warmup_iterations.unwrap_or(0)),
        ];
        for (field, value) in checks {
            if value < 0 {
                return Err(ConfigError::InvalidValue {
                    name: name.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    entries: FxHashMap<String, Value>,
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let entries: FxHashMap<String, Value> = serde_json::from_str(text)?;
        debug!("Config has {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Read the configuration file at `path`, or the built in configuration if there is none.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                info!("Reading config from {}", p);
                let text = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                Self::from_json(&text)
            }
            None => {
                info!("Using built in config");
                Self::from_json(DEFAULT_CONFIG)
            }
        }
    }

    /// Settings for the named benchmark.
    pub fn entry(&self, name: &str) -> Result<BenchConfig, ConfigError> {
        let value = self
            .entries
            .get(name)
            .ok_or_else(|| ConfigError::MissingEntry(name.to_string()))?;
        let entry = BenchConfig::deserialize(value)?;
        entry.validate(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn entry_test() {
        let config = Config::from_json(
            r#"{ "Compress::BWTEncode": { "checksum": 200, "size": 50, "iterations": 3 },
                 "Other": { "input": "ignored" } }"#,
        )
        .unwrap();
        let e = config.entry("Compress::BWTEncode").unwrap();
        assert_eq!(e.size, 50);
        assert_eq!(e.iterations, 3);
        assert_eq!(e.checksum, 200);
        assert_eq!(e.warmup(), 1);
    }

    #[test]
    fn warmup_test() {
        let mut e = BenchConfig {
            size: 1,
            iterations: 20,
            checksum: 0,
            warmup_iterations: None,
        };
        assert_eq!(e.warmup(), 4);
        e.warmup_iterations = Some(0);
        assert_eq!(e.warmup(), 0);
    }

    #[test]
    fn missing_entry_test() {
        let config = Config::from_json("{}").unwrap();
        assert!(matches!(
            config.entry("Compress::BWTEncode"),
            Err(ConfigError::MissingEntry(_))
        ));
    }

    #[test]
    fn invalid_value_test() {
        let config = Config::from_json(r#"{ "x": { "size": -5, "iterations": 1 } }"#).unwrap();
        assert!(matches!(
            config.entry("x"),
            Err(ConfigError::InvalidValue {
                field: "size",
                value: -5,
                ..
            })
        ));
    }

    #[test]
    fn parse_error_test() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn default_config_test() {
        let config = Config::load(None).unwrap();
        let e = config.entry("Compress::BWTHuffDecode").unwrap();
        assert_eq!(e.size, 1000);
    }
}
