use core::convert::Infallible;

use crate::action::{ActionEffect, ActionResult, ActionTransition};
use crate::state::{EntityId, GameState};

/// Wait action - actor passes its turn without changing anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Error = Infallible;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, _state: &mut GameState) -> Result<ActionResult, Self::Error> {
        Ok(ActionResult::single(ActionEffect::Waited { entity: self.actor }))
    }
}
