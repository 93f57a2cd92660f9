//! Shorthand constructors that return boxed nodes, so trees read top-down.

use crate::{Behavior, Inverter, Selector, Sequence};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn not<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Boxes an existing node.
#[inline]
pub fn node<C, B>(behavior: B) -> Box<dyn Behavior<C>>
where
    B: Behavior<C> + 'static,
{
    Box::new(behavior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    struct IsNegative;

    impl Behavior<i32> for IsNegative {
        fn tick(&self, n: &mut i32) -> Status {
            (*n < 0).into()
        }
    }

    struct Increment;

    impl Behavior<i32> for Increment {
        fn tick(&self, n: &mut i32) -> Status {
            *n += 1;
            Status::Success
        }
    }

    struct Reset;

    impl Behavior<i32> for Reset {
        fn tick(&self, n: &mut i32) -> Status {
            *n = 0;
            Status::Success
        }
    }

    #[test]
    fn builds_a_guarded_policy() {
        let policy = selector(vec![
            sequence(vec![not(node(IsNegative)), node(Increment)]),
            node(Reset),
        ]);

        let mut value = 4;
        policy.tick(&mut value);
        assert_eq!(value, 5);

        let mut value = -4;
        policy.tick(&mut value);
        assert_eq!(value, 0);
    }
}
