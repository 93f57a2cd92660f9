//! Action execution pipeline.
//!
//! The [`CombatResolver`] is the only writer of [`GameState`]. It checks that
//! the acting combatant may act, drives the action's transition, and then
//! closes the combatant's turn (cooldown decrement and nonce bump) whether or
//! not the action itself succeeded.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError, TransitionRejection};

use crate::action::{Action, ActionKind, ActionResult};
use crate::state::{Damageable, GameState, SessionStatus, TurnTaker};

/// Complete outcome of a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Nonce the action executed at. The state's nonce is one past this.
    pub nonce: u64,
    pub action: Action,
    pub result: ActionResult,
    /// Session status after the action, so callers can detect the end.
    pub status: SessionStatus,
}

/// Applies actions to the arena.
pub struct CombatResolver<'a> {
    state: &'a mut GameState,
}

impl<'a> CombatResolver<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves `action` for its actor.
    ///
    /// Action-level failures (blocked move, attack on cooldown, vanished
    /// target) leave the board untouched but still consume the actor's turn;
    /// see [`ExecuteError::consumed_turn`].
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        self.validate_actor(action)?;

        let nonce = self.state.nonce;
        let outcome = transition::execute_transition(action, self.state);
        self.end_turn(action);

        let result = outcome?;
        Ok(ExecutionOutcome {
            nonce,
            action: *action,
            result,
            status: self.state.status(),
        })
    }

    fn validate_actor(&self, action: &Action) -> Result<(), ExecuteError> {
        let actor = action.actor();
        let reject = |reason| ExecuteError::InvalidTransition {
            actor,
            action: action.kind(),
            reason,
        };

        let combatant = self
            .state
            .combatant(actor)
            .ok_or_else(|| reject(TransitionRejection::UnknownActor))?;
        if !combatant.is_alive() {
            return Err(reject(TransitionRejection::ActorDead));
        }
        if action.kind() == ActionKind::Charge && combatant.is_player() {
            return Err(reject(TransitionRejection::NotPermittedForRole));
        }

        Ok(())
    }

    fn end_turn(&mut self, action: &Action) {
        if let Some(actor) = self.state.combatant_mut(action.actor()) {
            // A telegraphed strike is spent on this turn even if it failed.
            if action.kind() == ActionKind::Attack {
                actor.set_charging(false);
            }
            actor.end_turn();
        }
        self.state.nonce += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AttackError, MoveError};
    use crate::config::{CombatantConfig, GameConfig};
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{CooldownKind, Direction, EntityId, Position};

    fn duel() -> (GameState, EntityId) {
        let mut state = GameState::new(
            &GameConfig::new(6, 3, 1.0),
            Position::new(1, 1),
            CombatantConfig::player(),
        )
        .unwrap();
        let enemy = state
            .spawn_enemy(Position::new(2, 1), CombatantConfig::sword_enemy())
            .unwrap();
        (state, enemy)
    }

    #[test]
    fn cooldowns_tick_after_every_own_turn() {
        let (mut state, enemy) = duel();
        let mut resolver = CombatResolver::new(&mut state);

        // Armed to 2, then ticked at the end of the same turn.
        resolver.execute(&Action::attack(EntityId::PLAYER)).unwrap();
        assert_eq!(resolver.state().player.cooldowns.attack, 1);

        // A failed attack still ends the turn.
        let error = resolver
            .execute(&Action::attack(EntityId::PLAYER))
            .unwrap_err();
        assert_eq!(
            error,
            ExecuteError::Attack(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                AttackError::OnCooldown { remaining: 1 },
            ))
        );
        assert!(error.consumed_turn());
        assert_eq!(resolver.state().player.cooldowns.attack, 0);
        assert_eq!(resolver.state().nonce, 2);

        resolver.execute(&Action::attack(EntityId::PLAYER)).unwrap();
        assert_eq!(resolver.state().combatant(enemy).unwrap().health.current, 30);
    }

    #[test]
    fn attack_cooldown_of_two_blocks_a_single_turn() {
        let (mut state, enemy) = duel();
        let mut resolver = CombatResolver::new(&mut state);

        resolver.execute(&Action::attack(EntityId::PLAYER)).unwrap();
        resolver.execute(&Action::wait(EntityId::PLAYER)).unwrap();
        assert!(resolver.state().player.cooldowns.is_ready(CooldownKind::Attack));

        resolver.execute(&Action::attack(EntityId::PLAYER)).unwrap();
        assert_eq!(resolver.state().combatant(enemy).unwrap().health.current, 30);
    }

    #[test]
    fn charge_is_spent_even_when_the_strike_is_on_cooldown() {
        let mut state = GameState::new(
            &GameConfig::new(6, 3, 1.0),
            Position::new(1, 1),
            CombatantConfig::player(),
        )
        .unwrap();
        let enemy = state
            .spawn_enemy(
                Position::new(2, 1),
                CombatantConfig {
                    attack_cooldown: 3,
                    ..CombatantConfig::sword_enemy()
                },
            )
            .unwrap();
        let mut resolver = CombatResolver::new(&mut state);

        resolver.execute(&Action::attack(enemy)).unwrap();
        resolver.execute(&Action::charge(enemy)).unwrap();
        assert!(resolver.state().combatant(enemy).unwrap().is_charging());
        assert_eq!(resolver.state().combatant(enemy).unwrap().cooldowns.attack, 1);

        let error = resolver.execute(&Action::attack(enemy)).unwrap_err();
        assert!(matches!(
            error,
            ExecuteError::Attack(TransitionPhaseError {
                error: AttackError::OnCooldown { remaining: 1 },
                ..
            })
        ));
        let striker = resolver.state().combatant(enemy).unwrap();
        assert!(!striker.is_charging());
        assert_eq!(striker.cooldowns.attack, 0);
    }

    #[test]
    fn player_cannot_charge() {
        let (mut state, _) = duel();
        let before = state.clone();
        let error = CombatResolver::new(&mut state)
            .execute(&Action::charge(EntityId::PLAYER))
            .unwrap_err();

        assert!(matches!(
            error,
            ExecuteError::InvalidTransition {
                reason: TransitionRejection::NotPermittedForRole,
                ..
            }
        ));
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert!(!error.consumed_turn());
        assert_eq!(state, before);
    }

    #[test]
    fn removed_enemy_cannot_act() {
        let (mut state, enemy) = duel();
        let mut resolver = CombatResolver::new(&mut state);
        for _ in 0..5 {
            resolver.state.player.cooldowns.attack = 0;
            resolver.execute(&Action::attack(EntityId::PLAYER)).unwrap();
        }
        assert_eq!(resolver.state().status(), SessionStatus::Victory);

        let error = resolver.execute(&Action::wait(enemy)).unwrap_err();
        assert!(matches!(
            error,
            ExecuteError::InvalidTransition {
                reason: TransitionRejection::UnknownActor,
                ..
            }
        ));
    }

    #[test]
    fn blocked_move_is_a_recoverable_no_op() {
        let (mut state, enemy) = duel();
        let before_grid = state.grid.clone();

        let error = CombatResolver::new(&mut state)
            .execute(&Action::step(enemy, Direction::Left))
            .unwrap_err();

        assert!(matches!(
            error,
            ExecuteError::Move(TransitionPhaseError {
                error: MoveError::Blocked { .. },
                ..
            })
        ));
        assert_eq!(error.error_code(), "MOVE_BLOCKED");
        assert_eq!(error.severity(), ErrorSeverity::Recoverable);
        assert_eq!(state.grid, before_grid);
    }

    #[test]
    fn outcome_records_nonce_and_status() {
        let (mut state, _) = duel();
        let mut resolver = CombatResolver::new(&mut state);
        let first = resolver.execute(&Action::reverse(EntityId::PLAYER)).unwrap();
        let second = resolver.execute(&Action::reverse(EntityId::PLAYER)).unwrap();

        assert_eq!(first.nonce, 0);
        assert_eq!(second.nonce, 1);
        assert_eq!(second.status, SessionStatus::Ongoing);
        assert_eq!(resolver.state().player.facing, Direction::Right);
    }
}
