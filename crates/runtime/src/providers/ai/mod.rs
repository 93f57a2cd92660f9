//! Enemy decision-making.
//!
//! Each enemy turn runs in two steps:
//!
//! 1. **Perception**: pure reads of the board ([`perception`]) summarize what
//!    the enemy sees into a [`Perception`].
//! 2. **Policy**: a behavior tree ([`policy::enemy_policy`]) ticks on an
//!    [`AiContext`] built from that perception and records one action.
//!
//! [`EnemyAiProvider`] wraps both behind [`crate::ActionProvider`].

pub mod context;
pub mod nodes;
pub mod perception;
pub mod policy;
pub mod provider;

pub use context::AiContext;
pub use perception::{Perception, is_player_in_attack_range, line_of_sight};
pub use policy::{BehaviorTree, enemy_policy};
pub use provider::EnemyAiProvider;
