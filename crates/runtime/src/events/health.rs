use serde::{Deserialize, Serialize};

use game_core::Health;

/// Coarse health bands for status displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HealthThreshold {
    /// Untouched.
    Full,
    /// 75% or more.
    Healthy,
    /// 25% up to 75%.
    Wounded,
    /// Below 25% but alive.
    Critical,
    Dead,
}

impl HealthThreshold {
    pub fn from_health(health: Health) -> Self {
        if health.current == 0 {
            return Self::Dead;
        }
        if health.maximum == 0 || health.current >= health.maximum {
            return Self::Full;
        }

        let percent = u64::from(health.current) * 100 / u64::from(health.maximum);
        match percent {
            75.. => Self::Healthy,
            25..=74 => Self::Wounded,
            _ => Self::Critical,
        }
    }
}
