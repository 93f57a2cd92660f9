//! The enemy decision procedure as a priority selector.
//!
//! Branches are tried top to bottom and the first one that succeeds decides
//! the turn:
//!
//! 1. charging → attack
//! 2. sight blocked → face the player
//! 3. not facing the player → face the player
//! 4. player in reach → start charging
//! 5. next cell toward the player is free → step
//! 6. otherwise → wait

use behavior_tree::Behavior;
use behavior_tree::builder::{node, not, selector, sequence};

use super::AiContext;
use super::nodes::{
    Approach, Attack, CanApproach, FacePlayer, HasLineOfSight, IsCharging, IsFacingPlayer,
    IsPlayerInReach, StartCharge, Wait,
};

pub type BehaviorTree = Box<dyn Behavior<AiContext>>;

/// Full enemy policy.
pub fn enemy_policy() -> BehaviorTree {
    selector(vec![
        resolve_charge(),
        reacquire_player(),
        telegraph_attack(),
        advance(),
        node(Wait),
    ])
}

/// A charge always resolves on the very next turn.
pub fn resolve_charge() -> BehaviorTree {
    sequence(vec![node(IsCharging), node(Attack)])
}

/// Turns toward the player when it cannot be seen or is off-axis.
pub fn reacquire_player() -> BehaviorTree {
    selector(vec![
        sequence(vec![not(node(HasLineOfSight)), node(FacePlayer)]),
        sequence(vec![not(node(IsFacingPlayer)), node(FacePlayer)]),
    ])
}

pub fn telegraph_attack() -> BehaviorTree {
    sequence(vec![node(IsPlayerInReach), node(StartCharge)])
}

pub fn advance() -> BehaviorTree {
    sequence(vec![node(CanApproach), node(Approach)])
}
