use std::env;
use std::time::Duration;

use crate::render::DEFAULT_TIMEOUT;
use crate::types::Detection;

pub const ENV_DIFF: &str = "DIFFC_DIFF";
pub const ENV_DETECTION: &str = "DIFFC_DETECTION";
pub const ENV_LOG_FILE: &str = "DIFFC_LOG_FILE";
pub const ENV_TIMEOUT_MS: &str = "DIFFC_TIMEOUT_MS";

pub const DEFAULT_DIFF: &str = "diff";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub diff_command: String,
    pub detection: Detection,
    /// Word diff deadline per hunk; zero disables it.
    pub diff_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            diff_command: DEFAULT_DIFF.to_string(),
            detection: Detection::PreScan,
            diff_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(cmd) = lookup(ENV_DIFF) {
            let cmd = cmd.trim();
            if !cmd.is_empty() {
                config.diff_command = cmd.to_string();
            }
        }

        if let Some(value) = lookup(ENV_DETECTION) {
            match parse_detection(&value) {
                Some(d) => config.detection = d,
                None => {
                    log!("config: unknown {} value {:?}, using prescan", ENV_DETECTION, value);
                }
            }
        }

        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) => config.diff_timeout = Duration::from_millis(ms),
                Err(_) => {
                    log!("config: bad {} value {:?}, using default", ENV_TIMEOUT_MS, value);
                }
            }
        }

        config
    }
}

fn parse_detection(value: &str) -> Option<Detection> {
    match value.trim().to_lowercase().as_str() {
        "" | "prescan" | "pre-scan" => Some(Detection::PreScan),
        "streaming" | "stream" => Some(Detection::Streaming),
        _ => None,
    }
}
