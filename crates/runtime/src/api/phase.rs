//! Phases of the turn cycle.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The single logically active phase of a session.
///
/// The cycle is `Countdown → PlayerResolution → EnemyResolution(0..n) →
/// Countdown`. Victory and defeat are observable events, not phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    /// Vote window is open.
    Countdown { remaining: Duration },
    /// The crowd's winning action is being applied to the player.
    PlayerResolution,
    /// Enemy at `index` in this cycle's roster snapshot is acting.
    EnemyResolution { index: usize },
}

impl TurnPhase {
    /// Whether the state machine permits moving from `self` to `next`.
    pub fn can_advance_to(self, next: TurnPhase) -> bool {
        match (self, next) {
            (TurnPhase::Countdown { .. }, TurnPhase::PlayerResolution) => true,
            (TurnPhase::PlayerResolution, TurnPhase::EnemyResolution { index }) => index == 0,
            (TurnPhase::PlayerResolution, TurnPhase::Countdown { .. }) => true,
            (TurnPhase::EnemyResolution { index }, TurnPhase::EnemyResolution { index: next }) => {
                next == index + 1
            }
            (TurnPhase::EnemyResolution { .. }, TurnPhase::Countdown { .. }) => true,
            _ => false,
        }
    }

    pub fn accepts_votes(self) -> bool {
        matches!(self, TurnPhase::Countdown { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTDOWN: TurnPhase = TurnPhase::Countdown {
        remaining: Duration::from_secs(5),
    };

    #[test]
    fn cycle_order_is_enforced() {
        assert!(COUNTDOWN.can_advance_to(TurnPhase::PlayerResolution));
        assert!(TurnPhase::PlayerResolution.can_advance_to(TurnPhase::EnemyResolution { index: 0 }));
        assert!(
            TurnPhase::EnemyResolution { index: 0 }
                .can_advance_to(TurnPhase::EnemyResolution { index: 1 })
        );
        assert!(TurnPhase::EnemyResolution { index: 3 }.can_advance_to(COUNTDOWN));
    }

    #[test]
    fn skipping_or_rewinding_is_rejected() {
        assert!(!COUNTDOWN.can_advance_to(TurnPhase::EnemyResolution { index: 0 }));
        assert!(!COUNTDOWN.can_advance_to(COUNTDOWN));
        assert!(!TurnPhase::PlayerResolution.can_advance_to(TurnPhase::PlayerResolution));
        assert!(!TurnPhase::PlayerResolution.can_advance_to(TurnPhase::EnemyResolution { index: 2 }));
        assert!(
            !TurnPhase::EnemyResolution { index: 2 }
                .can_advance_to(TurnPhase::EnemyResolution { index: 1 })
        );
        assert!(!TurnPhase::EnemyResolution { index: 0 }.can_advance_to(TurnPhase::PlayerResolution));
    }

    #[test]
    fn only_the_countdown_accepts_votes() {
        assert!(COUNTDOWN.accepts_votes());
        assert!(!TurnPhase::PlayerResolution.accepts_votes());
        assert!(!TurnPhase::EnemyResolution { index: 0 }.accepts_votes());
    }
}
