use crate::action::{ActionEffect, ActionResult, ActionTransition, combat};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CellType, CooldownKind, Direction, EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked by {occupant}")]
    Blocked {
        destination: Position,
        occupant: CellType,
    },

    #[error("swap is on cooldown for {remaining} more turn(s)")]
    SwapOnCooldown { remaining: u32 },

    #[error("cell {destination} is marked as an enemy but nobody stands there")]
    MissingTarget { destination: Position },

    #[error("occupancy desync for actor {actor} at {position}")]
    OccupancyDesync { actor: EntityId, position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::OutOfBounds { .. }
            | Self::Blocked { .. }
            | Self::SwapOnCooldown { .. }
            | Self::MissingTarget { .. } => ErrorSeverity::Recoverable,
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "MOVE_BLOCKED",
            Self::SwapOnCooldown { .. } => "MOVE_SWAP_ON_COOLDOWN",
            Self::MissingTarget { .. } => "MOVE_MISSING_TARGET",
            Self::OccupancyDesync { .. } => "MOVE_OCCUPANCY_DESYNC",
        }
    }
}

/// Single-cell step. Stepping into an enemy as the player becomes a swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: Direction,
}

/// What a validated move will do.
enum MovePlan {
    Walk {
        from: Position,
        to: Position,
    },
    Swap {
        from: Position,
        to: Position,
        enemy: EntityId,
    },
}

impl MoveAction {
    pub fn new(actor: EntityId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    fn plan(&self, state: &GameState) -> Result<MovePlan, MoveError> {
        let mover = state
            .combatant(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        let from = mover.position;
        let to = from.step(self.direction, 1);

        if !state.grid.is_in_bounds(to) {
            return Err(MoveError::OutOfBounds { destination: to });
        }

        match state.grid.cell_at(to) {
            CellType::Empty => Ok(MovePlan::Walk { from, to }),
            CellType::Enemy if mover.is_player() => {
                let remaining = mover.cooldowns.get(CooldownKind::Swap);
                if remaining > 0 {
                    return Err(MoveError::SwapOnCooldown { remaining });
                }
                let enemy = state
                    .combatant_at(to)
                    .filter(|occupant| occupant.is_enemy())
                    .ok_or(MoveError::MissingTarget { destination: to })?;
                Ok(MovePlan::Swap {
                    from,
                    to,
                    enemy: enemy.id,
                })
            }
            occupant => Err(MoveError::Blocked {
                destination: to,
                occupant,
            }),
        }
    }

    fn walk(&self, state: &mut GameState, from: Position, to: Position) -> Result<ActionResult, MoveError> {
        let mover = state
            .combatant_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        mover.position = to;
        // Only the player turns to face where it walks.
        if mover.is_player() {
            mover.facing = self.direction;
        }
        let cell = mover.cell_type();

        state
            .grid
            .move_entity(from, to, cell)
            .map_err(|_| MoveError::OutOfBounds { destination: to })?;

        Ok(ActionResult::single(ActionEffect::Moved {
            entity: self.actor,
            from,
            to,
        }))
    }

    fn swap(
        &self,
        state: &mut GameState,
        from: Position,
        to: Position,
        enemy: EntityId,
    ) -> Result<ActionResult, MoveError> {
        let player = state
            .combatant_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        player.position = to;
        player
            .cooldowns
            .arm(CooldownKind::Swap, player.config.swap_cooldown);
        let damage = player.config.swap_damage();

        state
            .combatant_mut(enemy)
            .ok_or(MoveError::MissingTarget { destination: to })?
            .position = from;

        // Both cells were validated in-bounds by `plan`.
        let _ = state.grid.set_cell(from, CellType::Enemy);
        let _ = state.grid.set_cell(to, CellType::Player);

        let mut result = ActionResult::single(ActionEffect::Swapped {
            player_to: to,
            enemy,
            enemy_to: from,
        });
        combat::apply_damage(state, enemy, damage, &mut result.effects);

        Ok(result.with_armed(CooldownKind::Swap))
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        self.plan(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionResult, Self::Error> {
        match self.plan(state)? {
            MovePlan::Walk { from, to } => self.walk(state, from, to),
            MovePlan::Swap { from, to, enemy } => self.swap(state, from, to, enemy),
        }
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let mover = state
            .combatant(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;

        if state.grid.cell_at(mover.position) == mover.cell_type() {
            Ok(())
        } else {
            Err(MoveError::OccupancyDesync {
                actor: self.actor,
                position: mover.position,
            })
        }
    }
}
