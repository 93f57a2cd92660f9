//! Error types for the action execution pipeline.

use crate::action::{ActionKind, AttackAction, ActionTransition, MoveAction};
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase, self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Why the resolver refused to run an action at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TransitionRejection {
    UnknownActor,
    ActorDead,
    /// e.g. the player asked to charge.
    NotPermittedForRole,
}

/// Errors surfaced while executing an action through the resolver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("invalid transition: {action} by {actor} rejected ({reason})")]
    InvalidTransition {
        actor: EntityId,
        action: ActionKind,
        reason: TransitionRejection,
    },
}

impl ExecuteError {
    /// Whether the acting combatant's turn was consumed despite the failure.
    ///
    /// Action-level failures become no-ops that still end the turn; a
    /// rejected transition never touched the state.
    pub fn consumed_turn(&self) -> bool {
        !matches!(self, Self::InvalidTransition { .. })
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Move(e) => e.error.severity(),
            Self::Attack(e) => e.error.severity(),
            Self::InvalidTransition { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Move(e) => e.error.error_code(),
            Self::Attack(e) => e.error.error_code(),
            Self::InvalidTransition { .. } => "EXECUTE_INVALID_TRANSITION",
        }
    }
}
