//! Composite nodes.
//!
//! Both composites evaluate children left to right and short-circuit, so
//! child order doubles as priority order.

use crate::{Behavior, Status};

/// Short-circuiting AND: fails at the first failing child.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// An empty sequence succeeds vacuously.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.children
            .iter()
            .all(|child| child.tick(ctx).is_success())
            .into()
    }
}

/// Short-circuiting OR: succeeds at the first succeeding child.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// An empty selector always fails.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.children
            .iter()
            .any(|child| child.tick(ctx).is_success())
            .into()
    }
}
