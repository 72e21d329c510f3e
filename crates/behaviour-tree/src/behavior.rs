//! Core behaviour trait.
//!
//! This module defines the [`Behavior`] trait, the single capability every
//! tree node implements. The trait is generic over a context type `C` that the
//! driver hands to each tick, so leaves can read and modify domain state
//! without holding references to it.

use crate::Status;

/// The init / update / terminate hooks of a tree node.
///
/// Implementors only provide the hooks. The lifecycle that decides when each
/// hook runs lives in [`Node::tick`](crate::Node::tick).
pub trait Behavior<C> {
    /// Called before `update` whenever the previous status was not `Running`.
    ///
    /// Use it to reset per-run state such as a cursor or a counter.
    fn init(&mut self, _ctx: &mut C) {}

    /// Performs the node's work for this tick.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behaviour finished successfully
    /// - `Status::Failure` if the behaviour failed
    /// - `Status::Running` if it needs to be updated again next tick
    fn update(&mut self, ctx: &mut C) -> Status;

    /// Called after `update` returned a finishing status, with that status.
    fn terminate(&mut self, _ctx: &mut C, _status: Status) {}

    /// Drops any progress kept between ticks.
    ///
    /// Composites and wrappers forward this to their children.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviours.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn init(&mut self, ctx: &mut C) {
        (**self).init(ctx)
    }

    #[inline]
    fn update(&mut self, ctx: &mut C) -> Status {
        (**self).update(ctx)
    }

    #[inline]
    fn terminate(&mut self, ctx: &mut C, status: Status) {
        (**self).terminate(ctx, status)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
