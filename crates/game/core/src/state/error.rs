use crate::error::{ErrorSeverity, GameError};

use super::{CellType, EntityId, Position};

/// Structural configuration errors. Any of these prevents a session from starting.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error("grid must have at least one cell (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell size must be a positive finite number (got {cell_size})")]
    InvalidCellSize { cell_size: f32 },

    #[error("placement {position} is outside the grid")]
    OutOfBounds { position: Position },

    #[error("placement {position} is already taken by {occupant}")]
    Occupied {
        position: Position,
        occupant: CellType,
    },

    #[error("combatant {entity} must have a positive max health")]
    ZeroMaxHealth { entity: EntityId },

    #[error("arena has no enemies")]
    NoEnemies,
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGrid { .. } => "INIT_EMPTY_GRID",
            Self::InvalidCellSize { .. } => "INIT_INVALID_CELL_SIZE",
            Self::OutOfBounds { .. } => "INIT_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "INIT_OCCUPIED",
            Self::ZeroMaxHealth { .. } => "INIT_ZERO_MAX_HEALTH",
            Self::NoEnemies => "INIT_NO_ENEMIES",
        }
    }
}

/// A broken grid/combatant agreement detected by [`super::GameState::check_invariants`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{entity} stands on {position} but the cell reads {found}")]
    CellMismatch {
        entity: EntityId,
        position: Position,
        found: CellType,
    },

    #[error("cell {position} reads {found} but no live combatant stands there")]
    OrphanCell { position: Position, found: CellType },

    #[error("{first} and {second} share cell {position}")]
    SharedCell {
        position: Position,
        first: EntityId,
        second: EntityId,
    },

    #[error("{entity} is dead but still on the roster")]
    DeadOnRoster { entity: EntityId },
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CellMismatch { .. } => "STATE_CELL_MISMATCH",
            Self::OrphanCell { .. } => "STATE_ORPHAN_CELL",
            Self::SharedCell { .. } => "STATE_SHARED_CELL",
            Self::DeadOnRoster { .. } => "STATE_DEAD_ON_ROSTER",
        }
    }
}
