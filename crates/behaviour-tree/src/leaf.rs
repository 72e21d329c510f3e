//! Ready-made leaves.
//!
//! Any [`Behavior`] implementor can be a leaf. This module adds two that need
//! no dedicated type: [`Action`], a leaf made from a closure, and [`Shared`],
//! a node that several parents can own at once.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Behavior, Node, Status};

/// A leaf whose update is a closure over the tick context.
///
/// # Example
///
/// ```rust
/// use behaviour_tree::{Action, Node, Status};
///
/// let mut leaf: Node<i32> = Node::new(Action::new(|hp: &mut i32| {
///     if *hp > 0 { Status::Success } else { Status::Failure }
/// }));
///
/// let mut hp = 3;
/// assert_eq!(leaf.tick(&mut hp), Status::Success);
/// ```
pub struct Action<F> {
    update: F,
}

impl<F> Action<F> {
    pub fn new(update: F) -> Self {
        Self { update }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status,
{
    fn update(&mut self, ctx: &mut C) -> Status {
        (self.update)(ctx)
    }
}

/// A node owned jointly by several parents.
///
/// Clones refer to the same node, so they share one status and, for
/// composites, one cursor: a subtree left `Running` by one parent is resumed
/// by whichever parent ticks it next.
///
/// # Panics
///
/// Ticking a shared node from inside its own subtree (a cycle) panics on the
/// nested borrow.
pub struct Shared<C> {
    node: Rc<RefCell<Node<C>>>,
}

impl<C> Shared<C> {
    pub fn new(node: Node<C>) -> Self {
        Self {
            node: Rc::new(RefCell::new(node)),
        }
    }

    /// Status of the shared node's last tick.
    pub fn status(&self) -> Status {
        self.node.borrow().status()
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<C> Behavior<C> for Shared<C> {
    fn update(&mut self, ctx: &mut C) -> Status {
        self.node.borrow_mut().tick(ctx)
    }

    fn reset(&mut self) {
        self.node.borrow_mut().reset();
    }
}
