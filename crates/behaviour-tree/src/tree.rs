//! The root container handed to drivers.

use crate::{Behavior, Node, Status};

/// Owns the root node of a tree and is ticked once per frame by its driver.
///
/// A `BehaviourTree` is itself a [`Behavior`], so a finished tree can be
/// wrapped in a [`Node`] and used as a child of a larger tree.
pub struct BehaviourTree<C> {
    root: Option<Node<C>>,
}

impl<C> BehaviourTree<C> {
    /// Creates a tree without a root. A root must be set before the first tick.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: Node<C>) -> Self {
        Self { root: Some(root) }
    }

    /// Replaces the root node.
    pub fn set_root(&mut self, root: Node<C>) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Node<C>> {
        self.root.as_ref()
    }

    /// Status of the root's last tick, `Invalid` when there is no root.
    pub fn status(&self) -> Status {
        self.root.as_ref().map_or(Status::Invalid, Node::status)
    }

    /// Ticks the root once and returns its status.
    ///
    /// # Panics
    ///
    /// Panics if no root was set.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let Some(root) = self.root.as_mut() else {
            panic!("BehaviourTree ticked without a root node");
        };

        let status = root.tick(ctx);
        tracing::trace!(?status, "behaviour tree ticked");
        status
    }

    /// Drops all progress so the next tick starts the whole tree afresh.
    pub fn reset(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.reset();
        }
    }
}

impl<C> Default for BehaviourTree<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for BehaviourTree<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        self.tick(ctx)
    }

    fn reset(&mut self) {
        BehaviourTree::reset(self);
    }
}
