//! Condition nodes for AI behavior trees.
//!
//! Condition nodes read the enemy's perception and return Success or
//! Failure. They never record a decision.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::AiContext;

/// The enemy telegraphed last turn and must strike now.
pub struct IsCharging;

impl Behavior<AiContext> for IsCharging {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.perception.charging.into()
    }
}

/// The first occupied cell along the enemy's facing is the player.
pub struct HasLineOfSight;

impl Behavior<AiContext> for HasLineOfSight {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.perception.sight_clear.into()
    }
}

pub struct IsFacingPlayer;

impl Behavior<AiContext> for IsFacingPlayer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.perception.facing_player.into()
    }
}

/// The player stands on one of the weapon's reach cells.
pub struct IsPlayerInReach;

impl Behavior<AiContext> for IsPlayerInReach {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.perception.player_in_reach.into()
    }
}

/// The next cell toward the player is enterable.
pub struct CanApproach;

impl Behavior<AiContext> for CanApproach {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.perception.approach.is_some().into()
    }
}
