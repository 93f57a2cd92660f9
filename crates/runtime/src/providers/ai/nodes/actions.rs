//! Action nodes for AI behavior trees.
//!
//! Each node records one concrete [`Action`] on the context and succeeds.
//! A node whose preconditions do not hold fails without deciding.

use behavior_tree::{Behavior, Status};
use game_core::Action;

use crate::providers::ai::AiContext;

pub struct Attack;

impl Behavior<AiContext> for Attack {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decide(Action::attack(ctx.entity));
        Status::Success
    }
}

/// Re-aims at the player using the dominant-axis rule.
pub struct FacePlayer;

impl Behavior<AiContext> for FacePlayer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decide(Action::face_toward(ctx.entity, ctx.perception.player_position));
        Status::Success
    }
}

/// Telegraphs an attack for next turn.
pub struct StartCharge;

impl Behavior<AiContext> for StartCharge {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decide(Action::charge(ctx.entity));
        Status::Success
    }
}

pub struct Approach;

impl Behavior<AiContext> for Approach {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.perception.approach {
            Some(direction) => {
                ctx.decide(Action::step(ctx.entity, direction));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

pub struct Wait;

impl Behavior<AiContext> for Wait {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.decide(Action::wait(ctx.entity));
        Status::Success
    }
}
