//! Behavior-tree enemy action provider.

use async_trait::async_trait;
use game_core::{Action, EntityId, GameState};

use super::policy::{BehaviorTree, enemy_policy};
use super::AiContext;
use crate::api::{ActionProvider, Result, RuntimeError};

/// Picks exactly one action per enemy turn by ticking [`enemy_policy`]
/// against a fresh [`AiContext`].
pub struct EnemyAiProvider {
    policy: BehaviorTree,
}

impl EnemyAiProvider {
    pub fn new() -> Self {
        Self::with_policy(enemy_policy())
    }

    /// Uses a custom tree. A tick that records nothing falls back to wait.
    pub fn with_policy(policy: BehaviorTree) -> Self {
        Self { policy }
    }

    /// Synchronous core of [`ActionProvider::provide_action`].
    pub fn decide(&self, entity: EntityId, state: &GameState) -> Result<Action> {
        let mut ctx =
            AiContext::observe(entity, state).ok_or(RuntimeError::UnknownEntity(entity))?;

        let status = self.policy.tick(&mut ctx);
        let action = ctx.decision().unwrap_or_else(|| {
            tracing::warn!(%entity, ?status, "policy made no decision, waiting");
            Action::wait(entity)
        });

        tracing::debug!(
            %entity,
            kind = %action.kind(),
            perception = ?ctx.perception,
            "enemy decided"
        );
        Ok(action)
    }
}

impl Default for EnemyAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionProvider for EnemyAiProvider {
    async fn provide_action(&self, entity: EntityId, state: &GameState) -> Result<Action> {
        self.decide(entity, state)
    }
}

#[cfg(test)]
mod tests {
    use behavior_tree::builder::sequence;
    use game_core::{CellType, CombatantConfig, Direction, GameConfig, Position};

    use super::*;

    fn lane() -> (GameState, EntityId) {
        let mut state = GameState::new(
            &GameConfig::new(10, 3, 1.0),
            Position::new(1, 1),
            CombatantConfig::player(),
        )
        .unwrap();
        let enemy = state
            .spawn_enemy(Position::new(6, 1), CombatantConfig::sword_enemy())
            .unwrap();
        (state, enemy)
    }

    #[test]
    fn enemy_walks_then_telegraphs_then_strikes() {
        let (mut state, enemy) = lane();
        let provider = EnemyAiProvider::new();

        assert_eq!(
            provider.decide(enemy, &state).unwrap(),
            Action::step(enemy, Direction::Left)
        );

        // Next to the player now.
        state.player.position = Position::new(5, 1);
        state.grid.set_cell(Position::new(1, 1), CellType::Empty).unwrap();
        state.grid.set_cell(Position::new(5, 1), CellType::Player).unwrap();
        assert_eq!(provider.decide(enemy, &state).unwrap(), Action::charge(enemy));

        state.combatant_mut(enemy).unwrap().set_charging(true);
        assert_eq!(provider.decide(enemy, &state).unwrap(), Action::attack(enemy));
    }

    #[test]
    fn turned_away_enemy_re_aims() {
        let (mut state, enemy) = lane();
        state.combatant_mut(enemy).unwrap().facing = Direction::Right;
        assert_eq!(
            EnemyAiProvider::new().decide(enemy, &state).unwrap(),
            Action::face_toward(enemy, Position::new(1, 1))
        );
    }

    #[test]
    fn the_player_is_not_an_enemy() {
        let (state, _) = lane();
        assert!(matches!(
            EnemyAiProvider::new().decide(EntityId::PLAYER, &state),
            Err(RuntimeError::UnknownEntity(EntityId::PLAYER))
        ));
    }

    #[test]
    fn empty_policy_falls_back_to_wait() {
        let (state, enemy) = lane();
        let provider = EnemyAiProvider::with_policy(sequence(vec![]));
        assert_eq!(provider.decide(enemy, &state).unwrap(), Action::wait(enemy));
    }
}
