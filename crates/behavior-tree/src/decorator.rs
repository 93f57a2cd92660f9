//! Decorator nodes.

use crate::{Behavior, Status};

/// Logical NOT over a single child.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsPositive;

    impl Behavior<i32> for IsPositive {
        fn tick(&self, n: &mut i32) -> Status {
            (*n > 0).into()
        }
    }

    #[test]
    fn inverter_flips_its_child() {
        let negative = Inverter::new(Box::new(IsPositive));

        assert_eq!(negative.tick(&mut 3), Status::Failure);
        assert_eq!(negative.tick(&mut -3), Status::Success);
    }
}
