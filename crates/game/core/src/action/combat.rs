//! Attacks, telegraphs and the shared damage step.

use core::convert::Infallible;

use crate::action::{ActionEffect, ActionResult, ActionTransition};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CellType, CooldownKind, Damageable, EntityId, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("attack is on cooldown for {remaining} more turn(s)")]
    OnCooldown { remaining: u32 },

    #[error("cell {position} is marked as occupied but nobody stands there")]
    MissingTarget { position: Position },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
            Self::OnCooldown { .. } | Self::MissingTarget { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "ATTACK_ACTOR_NOT_FOUND",
            Self::OnCooldown { .. } => "ATTACK_ON_COOLDOWN",
            Self::MissingTarget { .. } => "ATTACK_MISSING_TARGET",
        }
    }
}

/// Strike along the actor's facing using its weapon's reach pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: EntityId,
}

impl AttackAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    /// First combatant in reach, scanning pattern cells in order.
    ///
    /// Empty cells are skipped; an obstacle (or the grid edge) stops the scan.
    /// The player only ever strikes enemies, while an enemy strikes whoever
    /// stands first in its reach.
    fn find_target(&self, state: &GameState) -> Result<Option<EntityId>, AttackError> {
        let attacker = state
            .combatant(self.actor)
            .ok_or(AttackError::ActorNotFound(self.actor))?;

        for cell in attacker.weapon.reach.cells(attacker.position, attacker.facing) {
            match state.grid.cell_at(cell) {
                CellType::Empty => continue,
                CellType::Obstacle => return Ok(None),
                CellType::Player | CellType::Enemy => {
                    let target = state
                        .combatant_at(cell)
                        .ok_or(AttackError::MissingTarget { position: cell })?;
                    if attacker.is_player() && !target.is_enemy() {
                        return Ok(None);
                    }
                    return Ok(Some(target.id));
                }
            }
        }

        Ok(None)
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let attacker = state
            .combatant(self.actor)
            .ok_or(AttackError::ActorNotFound(self.actor))?;

        let remaining = attacker.cooldowns.get(CooldownKind::Attack);
        if remaining > 0 {
            return Err(AttackError::OnCooldown { remaining });
        }

        self.find_target(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionResult, Self::Error> {
        let target = self.find_target(state)?;

        let attacker = state
            .combatant_mut(self.actor)
            .ok_or(AttackError::ActorNotFound(self.actor))?;
        attacker.set_charging(false);

        let Some(target) = target else {
            // A miss leaves the attack cooldown untouched.
            return Ok(ActionResult::single(ActionEffect::AttackMissed {
                entity: self.actor,
            }));
        };

        let damage = attacker.config.attack_damage;
        attacker
            .cooldowns
            .arm(CooldownKind::Attack, attacker.config.attack_cooldown);

        let mut result = ActionResult::default().with_armed(CooldownKind::Attack);
        apply_damage(state, target, damage, &mut result.effects);
        Ok(result)
    }
}

/// Enemy telegraph: sets the charging flag so the next turn must attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargeAction {
    pub actor: EntityId,
}

impl ChargeAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for ChargeAction {
    type Error = Infallible;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, state: &mut GameState) -> Result<ActionResult, Self::Error> {
        let charged = state
            .combatant_mut(self.actor)
            .is_some_and(|actor| actor.set_charging(true));

        Ok(if charged {
            ActionResult::single(ActionEffect::ChargeStarted { entity: self.actor })
        } else {
            ActionResult::default()
        })
    }
}

/// Reduces `target` health and handles death.
///
/// A dead enemy leaves the roster and its cell; a dead player vacates its
/// cell but stays on record so the session can report defeat.
pub(crate) fn apply_damage(
    state: &mut GameState,
    target: EntityId,
    amount: u32,
    effects: &mut Vec<ActionEffect>,
) {
    let Some(victim) = state.combatant_mut(target) else {
        return;
    };
    let report = victim.take_damage(amount);
    let position = victim.position;
    effects.push(ActionEffect::Damaged(report));

    if !report.died {
        return;
    }

    if target.is_player() {
        let _ = state.grid.set_cell(position, CellType::Empty);
    } else {
        state.remove_enemy(target);
    }
    effects.push(ActionEffect::Died {
        entity: target,
        position,
    });
}
