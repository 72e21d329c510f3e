//! Decorator behaviour nodes.
//!
//! Decorators wrap a single child node and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (error suppression).
//! Both let `Running` through untouched so the child keeps its progress.

use crate::{Behavior, Node, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, so does the inverter
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child node.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Returns `Success` whenever its child finishes, whatever the outcome.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - If the child returns `Running`, returns `Running`
///
/// This is useful for optional behaviours that shouldn't cause a sequence to fail.
pub struct AlwaysSucceed<C> {
    child: Node<C>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child node.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn update(&mut self, ctx: &mut TestContext) -> Status {
            if ctx.value > 0 {
                Status::Success
            } else {
                Status::Failure
            }
        }
    }

    struct FailAndIncrement;
    impl Behavior<TestContext> for FailAndIncrement {
        fn update(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Failure
        }
    }

    struct Busy;
    impl Behavior<TestContext> for Busy {
        fn update(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Running
        }
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Node::new(Inverter::new(Node::new(IsPositive)));

        let mut ctx = TestContext { value: 10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Node::new(Inverter::new(Node::new(IsPositive)));

        let mut ctx = TestContext { value: -10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn inverter_keeps_running() {
        let mut inverter = Node::new(Inverter::new(Node::new(Busy)));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(inverter.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn always_succeed_on_failure() {
        let mut always = Node::new(AlwaysSucceed::new(Node::new(FailAndIncrement)));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(always.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Child still executed
    }

    #[test]
    fn always_succeed_keeps_running() {
        let mut always = Node::new(AlwaysSucceed::new(Node::new(Busy)));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(always.tick(&mut ctx), Status::Running);
    }
}
