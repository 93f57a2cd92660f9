//! Core behavior trait.

use crate::Status;

/// A node evaluated against a mutable context (the blackboard).
///
/// Nodes may read state from the context and write intermediate results back
/// into it, e.g. the action an enemy chose this turn.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets boxed nodes sit in heterogeneous child lists.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
