//! The tick lifecycle shared by every node.

use crate::{Behavior, Status};

/// A behaviour together with the status of its last tick.
///
/// `Node` is what composites own and what drivers tick. The status is private
/// to the node and only changes inside [`Node::tick`] and [`Node::reset`].
pub struct Node<C> {
    behavior: Box<dyn Behavior<C>>,
    status: Status,
}

impl<C> Node<C> {
    /// Wraps a behaviour in a fresh node with status `Invalid`.
    pub fn new<B>(behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        Self::from_boxed(Box::new(behavior))
    }

    /// Wraps an already boxed behaviour.
    pub fn from_boxed(behavior: Box<dyn Behavior<C>>) -> Self {
        Self {
            behavior,
            status: Status::Invalid,
        }
    }

    /// Runs one lifecycle step and returns the new status.
    ///
    /// 1. `init` unless the previous status was `Running`
    /// 2. `update`, whose result becomes the stored status
    /// 3. `terminate` unless the new status is `Running`
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        if self.status != Status::Running {
            self.behavior.init(ctx);
        }

        self.status = self.behavior.update(ctx);
        debug_assert!(
            self.status != Status::Invalid,
            "update() must not return Status::Invalid"
        );

        if self.status != Status::Running {
            self.behavior.terminate(ctx, self.status);
        }

        self.status
    }

    /// Status of the last tick, `Invalid` before the first one.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn check_status(&self, status: Status) -> bool {
        self.status == status
    }

    /// Forgets the last status so the next tick starts with `init`.
    ///
    /// Also resets the wrapped behaviour, which for composites rewinds the
    /// cursor and resets every child.
    pub fn reset(&mut self) {
        self.status = Status::Invalid;
        self.behavior.reset();
    }
}

impl<C> std::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node").field("status", &self.status).finish()
    }
}
