//! Deterministic behavior trees for turn-based decision making.
//!
//! Every tick completes immediately: a node either succeeds or fails, and
//! there is no `Running` state. This matches one-decision-per-turn enemy
//! policies, where a tree is evaluated once per turn to pick exactly one
//! action.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composites: [`Sequence`] (AND), [`Selector`] (priority OR)
//! - Decorator: [`Inverter`]
//!
//! Leaves are domain structs that implement [`Behavior`] for their context.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
