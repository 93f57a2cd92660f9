//! Deterministic combat rules for the crowd-voted arena.
//!
//! `game-core` defines the grid world, the combatant model, the vote
//! aggregator and the action pipeline. It performs no I/O and owns no clock;
//! timing and presentation live in the runtime crate. All state mutation
//! flows through [`engine::CombatResolver`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod vote;

pub use action::{
    Action, ActionEffect, ActionKind, ActionResult, ActionTransition, AttackAction, AttackError,
    ChargeAction, MoveAction, MoveError, TurnAction, TurnKind, WaitAction,
};
pub use config::{CombatantConfig, GameConfig};
pub use engine::{
    CombatResolver, ExecuteError, ExecutionOutcome, TransitionPhase, TransitionPhaseError,
    TransitionRejection,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CellType, Combatant, CooldownKind, Cooldowns, DamageReport, Damageable, Direction, EntityId,
    GameState, GridError, GridWorld, Health, InitializationError, InvariantViolation,
    Position, ReachPattern, Role, SessionStatus, TurnTaker, WeaponClass, WeaponProfile,
    WorldPosition,
};
pub use vote::{VoteAggregator, VoteError, VoteSymbol, VoteTally, WindowResult};
