//! Action domain.
//!
//! Every action a combatant can take is a small struct implementing
//! [`ActionTransition`]. The [`crate::engine::CombatResolver`] drives each one
//! through `pre_validate → apply → post_validate`; validation rejects anything
//! that would fail half-way, so `apply` never leaves grid and combatant state
//! out of sync.

mod combat;
mod movement;
mod turn;
mod wait;

pub use combat::{AttackAction, AttackError, ChargeAction};
pub use movement::{MoveAction, MoveError};
pub use turn::{TurnAction, TurnKind};
pub use wait::WaitAction;

use crate::state::{CooldownKind, DamageReport, Direction, EntityId, GameState, Position};

/// Defines how a concrete action mutates game state.
pub trait ActionTransition {
    type Error;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Assumes `pre_validate` has already succeeded.
    fn apply(&self, state: &mut GameState) -> Result<ActionResult, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Discriminant of [`Action`], used for logs, events and error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Move,
    Turn,
    Wait,
    Attack,
    Charge,
}

/// A resolved action bound to its actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Turn(TurnAction),
    Wait(WaitAction),
    Attack(AttackAction),
    /// Enemy-only telegraph. The next turn must attack.
    Charge(ChargeAction),
}

impl Action {
    pub fn step(actor: EntityId, direction: Direction) -> Self {
        Self::Move(MoveAction::new(actor, direction))
    }

    pub fn reverse(actor: EntityId) -> Self {
        Self::Turn(TurnAction::new(actor, TurnKind::Reverse))
    }

    pub fn face_toward(actor: EntityId, target: Position) -> Self {
        Self::Turn(TurnAction::new(actor, TurnKind::Toward(target)))
    }

    pub fn wait(actor: EntityId) -> Self {
        Self::Wait(WaitAction::new(actor))
    }

    pub fn attack(actor: EntityId) -> Self {
        Self::Attack(AttackAction::new(actor))
    }

    pub fn charge(actor: EntityId) -> Self {
        Self::Charge(ChargeAction::new(actor))
    }

    pub fn actor(&self) -> EntityId {
        match self {
            Action::Move(action) => action.actor(),
            Action::Turn(action) => action.actor(),
            Action::Wait(action) => action.actor(),
            Action::Attack(action) => action.actor(),
            Action::Charge(action) => action.actor(),
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move(_) => ActionKind::Move,
            Action::Turn(_) => ActionKind::Turn,
            Action::Wait(_) => ActionKind::Wait,
            Action::Attack(_) => ActionKind::Attack,
            Action::Charge(_) => ActionKind::Charge,
        }
    }
}

/// One observable consequence of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    Moved {
        entity: EntityId,
        from: Position,
        to: Position,
    },
    Turned {
        entity: EntityId,
        from: Direction,
        to: Direction,
    },
    /// Player and enemy exchanged cells.
    Swapped {
        player_to: Position,
        enemy: EntityId,
        enemy_to: Position,
    },
    Damaged(DamageReport),
    /// The entity died and its cell at `position` was vacated.
    Died {
        entity: EntityId,
        position: Position,
    },
    ChargeStarted {
        entity: EntityId,
    },
    /// Attack resolved with no target in reach.
    AttackMissed {
        entity: EntityId,
    },
    Waited {
        entity: EntityId,
    },
}

/// Output of a successful transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub effects: Vec<ActionEffect>,
    /// Cooldown set to its full length by this action.
    pub armed: Option<CooldownKind>,
}

impl ActionResult {
    pub fn single(effect: ActionEffect) -> Self {
        Self {
            effects: vec![effect],
            armed: None,
        }
    }

    pub fn with_armed(mut self, kind: CooldownKind) -> Self {
        self.armed = Some(kind);
        self
    }

    /// Entities killed by this action.
    pub fn deaths(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            ActionEffect::Died { entity, .. } => Some(*entity),
            _ => None,
        })
    }
}
