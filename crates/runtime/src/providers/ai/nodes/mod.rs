//! Leaf nodes for enemy behavior trees.
pub mod actions;
pub mod conditions;

pub use actions::{Approach, Attack, FacePlayer, StartCharge, Wait};
pub use conditions::{CanApproach, HasLineOfSight, IsCharging, IsFacingPlayer, IsPlayerInReach};
