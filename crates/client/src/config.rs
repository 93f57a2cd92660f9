//! Binary configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::{RuntimeConfig, TimingConfig};

/// How the presenter writes events to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventFormat {
    /// One human-readable line per event.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for EventFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown event format `{other}`")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArenaConfig {
    /// RON scenario file; the built-in lane arena when unset.
    pub scenario: Option<PathBuf>,
    pub runtime: RuntimeConfig,
    pub event_format: EventFormat,
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SCENARIO` - Path to a RON scenario (default: built-in lane)
    /// - `ARENA_COUNTDOWN_MS` - Vote window length (default: 5000)
    /// - `ARENA_TICK_MS` - Countdown display interval (default: 100)
    /// - `ARENA_BANNER_MS` - Result banner display time (default: 2000)
    /// - `ARENA_SETTLE_MS` - Wait after each resolved action (default: 1000)
    /// - `ARENA_EVENT_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|value| value.parse::<u64>().ok());
        let mut config = Self::default();

        config.scenario = lookup("ARENA_SCENARIO")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let timing: &mut TimingConfig = &mut config.runtime.timing;
        if let Some(ms) = read("ARENA_COUNTDOWN_MS") {
            timing.countdown = Duration::from_millis(ms);
        }
        if let Some(ms) = read("ARENA_TICK_MS") {
            timing.countdown_tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = read("ARENA_BANNER_MS") {
            timing.banner = Duration::from_millis(ms);
        }
        if let Some(ms) = read("ARENA_SETTLE_MS") {
            timing.player_settle = Duration::from_millis(ms);
            timing.enemy_settle = Duration::from_millis(ms);
        }

        if let Some(format) = lookup("ARENA_EVENT_FORMAT").and_then(|raw| raw.parse().ok()) {
            config.event_format = format;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ArenaConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ArenaConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = config_from(&[]);
        assert!(config.scenario.is_none());
        assert_eq!(config.runtime.timing, TimingConfig::default());
        assert_eq!(config.event_format, EventFormat::Text);
    }

    #[test]
    fn overrides_timing_and_format() {
        let config = config_from(&[
            ("ARENA_COUNTDOWN_MS", "1500"),
            ("ARENA_TICK_MS", "0"),
            ("ARENA_BANNER_MS", "250"),
            ("ARENA_SETTLE_MS", "400"),
            ("ARENA_EVENT_FORMAT", "JSON"),
            ("ARENA_SCENARIO", "scenarios/lane.ron"),
        ]);
        let timing = config.runtime.timing;
        assert_eq!(timing.countdown, Duration::from_millis(1500));
        assert_eq!(timing.countdown_tick, Duration::from_millis(1));
        assert_eq!(timing.banner, Duration::from_millis(250));
        assert_eq!(timing.player_settle, Duration::from_millis(400));
        assert_eq!(timing.enemy_settle, Duration::from_millis(400));
        assert_eq!(config.event_format, EventFormat::Json);
        assert_eq!(config.scenario, Some(PathBuf::from("scenarios/lane.ron")));
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = config_from(&[("ARENA_COUNTDOWN_MS", "soon"), ("ARENA_EVENT_FORMAT", "xml")]);
        assert_eq!(config.runtime.timing.countdown, Duration::from_secs(5));
        assert_eq!(config.event_format, EventFormat::Text);
    }
}
