//! Blackboard the enemy behavior tree ticks on.

use game_core::{Action, Damageable, EntityId, GameState};

use super::perception::Perception;

/// Owned view of one enemy's situation plus the slot its decision lands in.
///
/// Perception is computed before the tree runs, so nodes never borrow the
/// board and the tree can be built once and reused for every enemy.
#[derive(Clone, Debug)]
pub struct AiContext {
    pub entity: EntityId,
    pub perception: Perception,
    decision: Option<Action>,
}

impl AiContext {
    pub fn new(entity: EntityId, perception: Perception) -> Self {
        Self {
            entity,
            perception,
            decision: None,
        }
    }

    /// Builds the context for `entity`, or `None` if it is not a live enemy.
    pub fn observe(entity: EntityId, state: &GameState) -> Option<Self> {
        let enemy = state
            .combatant(entity)
            .filter(|combatant| combatant.is_enemy() && combatant.is_alive())?;
        Some(Self::new(entity, Perception::observe(state, enemy)))
    }

    /// Records the chosen action. The first decision of a tick wins.
    pub fn decide(&mut self, action: Action) {
        self.decision.get_or_insert(action);
    }

    pub fn decision(&self) -> Option<Action> {
        self.decision
    }
}
