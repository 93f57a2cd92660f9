//! Event payloads published on the bus.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use game_core::{
    Action, ActionEffect, Combatant, Direction, EntityId, ExecuteError, GameState, Health,
    Position, VoteSymbol, VoteTally,
};

use super::health::HealthThreshold;
use crate::api::TurnPhase;

/// Turn management events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TurnEvent {
    PhaseChanged {
        phase: TurnPhase,
    },
    /// A vote window opened for `duration`.
    CountdownStarted {
        duration: Duration,
    },
    CountdownTick {
        remaining: Duration,
    },
    /// The window closed. `winner` is what the player will do.
    CountdownEnded {
        winner: VoteSymbol,
        tally: VoteTally,
    },
    EnemyTurnStarted {
        entity: EntityId,
    },
}

/// Vote intake events, for per-vote highlights and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoteEvent {
    /// Counted; `count` is the symbol's running total in this window.
    Accepted { symbol: VoteSymbol, count: u32 },
    /// Dropped uncounted: it arrived outside a countdown or found the
    /// vote queue full.
    Rejected { symbol: VoteSymbol },
}

/// Action outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    ActionResolved {
        nonce: u64,
        actor: EntityId,
        action: Action,
        effects: Vec<ActionEffect>,
    },
    /// The action was a no-op. The actor's turn was still spent unless the
    /// error says otherwise.
    ActionFailed {
        actor: EntityId,
        action: Action,
        error: ExecuteError,
    },
    /// Announces the crowd's action. The controller waits `display` before
    /// moving on.
    ResultBanner {
        symbol: VoteSymbol,
        text: String,
        display: Duration,
    },
}

/// Session-level events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    StatusChanged(StatusSnapshot),
    Victory,
    Defeat,
}

/// Banner line for a resolved crowd vote, e.g. `"J key pressed: J"`.
pub fn banner_text(symbol: VoteSymbol) -> String {
    format!("{symbol} key pressed: {symbol}")
}

/// Display data for one combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantStatus {
    pub id: EntityId,
    pub position: Position,
    pub facing: Direction,
    pub health: Health,
    pub threshold: HealthThreshold,
    pub attack_cooldown: u32,
    pub swap_cooldown: u32,
    pub charging: bool,
}

impl From<&Combatant> for CombatantStatus {
    fn from(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            position: combatant.position,
            facing: combatant.facing,
            health: combatant.health,
            threshold: HealthThreshold::from_health(combatant.health),
            attack_cooldown: combatant.cooldowns.attack,
            swap_cooldown: combatant.cooldowns.swap,
            charging: combatant.is_charging(),
        }
    }
}

/// Health and cooldown panel contents after a resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub nonce: u64,
    pub player: CombatantStatus,
    /// Live enemies in roster order.
    pub enemies: Vec<CombatantStatus>,
}

impl StatusSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            nonce: state.nonce,
            player: CombatantStatus::from(&state.player),
            enemies: state.roster().iter().map(CombatantStatus::from).collect(),
        }
    }
}
