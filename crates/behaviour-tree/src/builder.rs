//! Builder utilities for ergonomic behaviour tree construction.
//!
//! [`Builder`] assembles a tree from one chained expression whose indentation
//! mirrors the tree's shape:
//!
//! ```rust
//! use behaviour_tree::{Builder, Status};
//!
//! let mut tree = Builder::<u32>::new()
//!     .selector()
//!         .action(|hp| if *hp > 50 { Status::Success } else { Status::Failure })
//!         .sequence()
//!             .action(|hp| { *hp += 10; Status::Success })
//!             .action(|_| Status::Running)
//!         .end()
//!     .end()
//!     .build();
//!
//! let mut hp = 20;
//! assert_eq!(tree.tick(&mut hp), Status::Running);
//! assert_eq!(hp, 30);
//! ```
//!
//! The free functions at the bottom of the module build [`Node`]s directly,
//! for small trees that read better as nested calls.

use crate::{
    Action, AlwaysSucceed, BehaviourTree, Behavior, BuildError, CompositeBehavior, Inverter, Node,
    Selector, Sequence, Status,
};

/// Stack-shaped tree builder.
///
/// Composites opened with [`composite`](Self::composite) (or the
/// [`sequence`](Self::sequence) / [`selector`](Self::selector) shorthands) stay
/// open until the matching [`end`](Self::end); leaves added in between become
/// their children. Anything added while no composite is open becomes the root.
///
/// Mismatched nesting is recorded as the first [`BuildError`] and reported by
/// [`try_build`](Self::try_build); calls after the error are ignored.
pub struct Builder<C> {
    root: Option<Node<C>>,
    open: Vec<Box<dyn CompositeBehavior<C>>>,
    error: Option<BuildError>,
}

impl<C: 'static> Builder<C> {
    pub fn new() -> Self {
        Self {
            root: None,
            open: Vec::new(),
            error: None,
        }
    }

    /// Adds a leaf behaviour.
    pub fn leaf<B>(self, leaf: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        self.node(Node::new(leaf))
    }

    /// Adds a closure leaf, see [`Action`].
    pub fn action<F>(self, update: F) -> Self
    where
        F: FnMut(&mut C) -> Status + 'static,
    {
        self.leaf(Action::new(update))
    }

    /// Adds a finished tree as a single child.
    pub fn subtree(self, tree: BehaviourTree<C>) -> Self {
        self.leaf(tree)
    }

    /// Adds an already constructed node.
    pub fn node(mut self, node: Node<C>) -> Self {
        if self.error.is_none() {
            self.attach(node);
        }
        self
    }

    /// Opens a composite. Until the matching [`end`](Self::end), added nodes
    /// become its children.
    pub fn composite<B>(mut self, composite: B) -> Self
    where
        B: CompositeBehavior<C> + 'static,
    {
        if self.error.is_none() {
            self.open.push(Box::new(composite));
        }
        self
    }

    /// Opens a [`Sequence`].
    pub fn sequence(self) -> Self {
        self.composite(Sequence::new())
    }

    /// Opens a [`Selector`].
    pub fn selector(self) -> Self {
        self.composite(Selector::new())
    }

    /// Closes the innermost open composite.
    pub fn end(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        match self.open.pop() {
            Some(composite) => self.attach(Node::new(composite)),
            None => self.error = Some(BuildError::UnbalancedEnd),
        }
        self
    }

    /// Finishes the tree.
    pub fn try_build(self) -> Result<BehaviourTree<C>, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.open.is_empty() {
            return Err(BuildError::UnclosedComposites {
                open: self.open.len(),
            });
        }

        let root = self.root.ok_or(BuildError::EmptyTree)?;
        tracing::debug!("behaviour tree built");
        Ok(BehaviourTree::with_root(root))
    }

    /// Finishes the tree.
    ///
    /// # Panics
    ///
    /// Panics if the chain never set a root or its nesting is unbalanced.
    /// Use [`try_build`](Self::try_build) to get the error instead.
    pub fn build(self) -> BehaviourTree<C> {
        match self.try_build() {
            Ok(tree) => tree,
            Err(error) => {
                tracing::error!(%error, "invalid behaviour tree definition");
                panic!("{error}");
            }
        }
    }

    fn attach(&mut self, node: Node<C>) {
        match self.open.last_mut() {
            Some(parent) => parent.composite_mut().push(node),
            None => self.root = Some(node),
        }
    }
}

impl<C: 'static> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a sequence node.
///
/// Shorthand for `Node::new(Sequence::with_children(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Sequence::with_children(children))
}

/// Creates a selector node.
///
/// Shorthand for `Node::new(Selector::with_children(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Selector::with_children(children))
}

/// Creates an inverter node.
///
/// Shorthand for `Node::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Inverter::new(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Node::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(AlwaysSucceed::new(child))
}

/// Creates a closure leaf node.
///
/// Shorthand for `Node::new(Action::new(update))`.
#[inline]
pub fn action<C, F>(update: F) -> Node<C>
where
    C: 'static,
    F: FnMut(&mut C) -> Status + 'static,
{
    Node::new(Action::new(update))
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Vec<&'static str>;

    fn push(tag: &'static str, status: Status) -> impl FnMut(&mut Log) -> Status {
        move |log: &mut Log| {
            log.push(tag);
            status
        }
    }

    #[test]
    fn leaf_at_top_level_is_root() {
        let mut tree = Builder::<Log>::new().action(push("a", Status::Success)).build();

        let mut log = Vec::new();
        assert_eq!(tree.tick(&mut log), Status::Success);
        assert_eq!(log, ["a"]);
    }

    #[test]
    fn later_top_level_node_replaces_root() {
        let mut tree = Builder::<Log>::new()
            .action(push("a", Status::Success))
            .action(push("b", Status::Failure))
            .build();

        let mut log = Vec::new();
        assert_eq!(tree.tick(&mut log), Status::Failure);
        assert_eq!(log, ["b"]);
    }

    #[test]
    #[rustfmt::skip]
    fn nested_chain_mirrors_tree_shape() {
        let mut tree = Builder::<Log>::new()
            .selector()
                .sequence()
                    .action(push("check", Status::Success))
                    .action(push("refuse", Status::Failure))
                .end()
                .sequence()
                    .action(push("fallback", Status::Success))
                .end()
                .action(push("unreached", Status::Success))
            .end()
            .build();

        let mut log = Vec::new();
        assert_eq!(tree.tick(&mut log), Status::Success);
        assert_eq!(log, ["check", "refuse", "fallback"]);
    }

    #[test]
    #[rustfmt::skip]
    fn subtree_is_a_single_child() {
        let inner = Builder::<Log>::new()
            .sequence()
                .action(push("inner", Status::Success))
            .end()
            .build();

        let mut tree = Builder::<Log>::new()
            .sequence()
                .subtree(inner)
                .action(push("outer", Status::Success))
            .end()
            .build();

        let mut log = Vec::new();
        assert_eq!(tree.tick(&mut log), Status::Success);
        assert_eq!(log, ["inner", "outer"]);
    }

    #[test]
    fn empty_builder_is_an_error() {
        let result = Builder::<()>::new().try_build();
        assert_eq!(result.err(), Some(BuildError::EmptyTree));
    }

    #[test]
    #[rustfmt::skip]
    fn extra_end_is_an_error() {
        let result = Builder::<()>::new()
            .sequence()
                .action(|_| Status::Success)
            .end()
            .end()
            .try_build();
        assert_eq!(result.err(), Some(BuildError::UnbalancedEnd));
    }

    #[test]
    #[rustfmt::skip]
    fn missing_end_is_an_error() {
        let result = Builder::<()>::new()
            .selector()
                .sequence()
                    .action(|_| Status::Success)
                .end()
            .try_build();
        assert_eq!(result.err(), Some(BuildError::UnclosedComposites { open: 1 }));
    }

    #[test]
    #[should_panic(expected = "the behaviour tree is empty")]
    fn build_panics_without_root() {
        Builder::<()>::new().build();
    }

    #[test]
    fn shorthand_functions_compose() {
        let mut root: Node<Log> = selector(vec![
            inverter(action(push("a", Status::Success))),
            always_succeed(action(push("b", Status::Failure))),
        ]);

        let mut log = Vec::new();
        assert_eq!(root.tick(&mut log), Status::Success);
        assert_eq!(log, ["a", "b"]);
    }
}
