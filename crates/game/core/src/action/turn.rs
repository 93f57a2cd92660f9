use core::convert::Infallible;

use crate::action::{ActionEffect, ActionResult, ActionTransition};
use crate::state::{Direction, EntityId, GameState, Position};

/// How the new facing is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnKind {
    /// Negate the current facing.
    Reverse,
    /// Face a target cell using the dominant-axis rule.
    Toward(Position),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub actor: EntityId,
    pub kind: TurnKind,
}

impl TurnAction {
    pub fn new(actor: EntityId, kind: TurnKind) -> Self {
        Self { actor, kind }
    }

    fn resolve(&self, position: Position, facing: Direction) -> Direction {
        match self.kind {
            TurnKind::Reverse => facing.reversed(),
            TurnKind::Toward(target) => Direction::toward(position, target).unwrap_or(facing),
        }
    }
}

impl ActionTransition for TurnAction {
    type Error = Infallible;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionResult, Self::Error> {
        let Some(actor) = state.combatant_mut(self.actor) else {
            return Ok(ActionResult::default());
        };

        let from = actor.facing;
        actor.facing = self.resolve(actor.position, from);

        Ok(ActionResult::single(ActionEffect::Turned {
            entity: self.actor,
            from,
            to: actor.facing,
        }))
    }
}
