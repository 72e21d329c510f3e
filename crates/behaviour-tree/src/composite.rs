//! Composite behaviour nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviours.
//! This module provides the shared child storage with its resumable cursor
//! ([`Composite`]) and the two ordered policies built on it: [`Sequence`]
//! (AND logic) and [`Selector`] (OR logic).

use crate::{Behavior, Node, Status};

/// Ordered children plus the position to resume from.
///
/// The cursor is only meaningful while the owning node is `Running`. A fresh
/// run is expected to [`rewind`](Composite::rewind) it from `init`.
pub struct Composite<C> {
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> Composite<C> {
    /// Creates an empty composite. Children are added with [`push`](Self::push).
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node<C>> {
        self.children.get_mut(index)
    }

    /// Index of the child the next resumed `run` starts from.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor back to the first child.
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Rewinds and resets every child.
    pub fn reset(&mut self) {
        self.rewind();
        for child in &mut self.children {
            child.reset();
        }
    }

    /// Ticks children from the cursor while they report `proceed_on`.
    ///
    /// The first child reporting anything else stops the walk, and its status
    /// is returned with the cursor still pointing at it. Walking past the last
    /// child returns `proceed_on`.
    ///
    /// # Panics
    ///
    /// Panics if there are no children. Ticking an empty composite indicates
    /// a tree that was assembled incorrectly.
    pub fn run(&mut self, ctx: &mut C, proceed_on: Status) -> Status {
        assert!(!self.children.is_empty(), "Composite has no children");

        while let Some(child) = self.children.get_mut(self.cursor) {
            let status = child.tick(ctx);
            if status != proceed_on {
                return status;
            }
            self.cursor += 1;
        }

        proceed_on
    }
}

impl<C> Default for Composite<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A behaviour that owns a [`Composite`].
///
/// The builder uses this to attach children to any composite node, including
/// domain composites that decide for themselves which children to tick.
pub trait CompositeBehavior<C>: Behavior<C> {
    fn composite(&self) -> &Composite<C>;

    fn composite_mut(&mut self) -> &mut Composite<C>;
}

/// Boxed composites are behaviours too, so an open composite can become a
/// child node once the builder closes it.
impl<C> Behavior<C> for Box<dyn CompositeBehavior<C>> {
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

/// Executes child behaviours in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops immediately**
///   and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
///   within the same tick
/// - If all children return `Success`, the sequence returns `Success`
///
/// While the sequence is `Running` it resumes at the child that was running,
/// without ticking the children that already succeeded.
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    composite: Composite<C>,
}

impl<C> Sequence<C> {
    /// Creates an empty sequence; children are added through the builder or
    /// [`Composite::push`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            composite: Composite::with_children(children),
        }
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn init(&mut self, _ctx: &mut C) {
        self.composite.rewind();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.composite.run(ctx, Status::Success)
    }

    fn reset(&mut self) {
        self.composite.reset();
    }
}

impl<C> CompositeBehavior<C> for Sequence<C> {
    fn composite(&self) -> &Composite<C> {
        &self.composite
    }

    fn composite_mut(&mut self) -> &mut Composite<C> {
        &mut self.composite
    }
}

/// Executes child behaviours in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    composite: Composite<C>,
}

impl<C> Selector<C> {
    /// Creates an empty selector; children are added through the builder or
    /// [`Composite::push`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            composite: Composite::with_children(children),
        }
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn init(&mut self, _ctx: &mut C) {
        self.composite.rewind();
    }

    fn update(&mut self, ctx: &mut C) -> Status {
        self.composite.run(ctx, Status::Failure)
    }

    fn reset(&mut self) {
        self.composite.reset();
    }
}

impl<C> CompositeBehavior<C> for Selector<C> {
    fn composite(&self) -> &Composite<C> {
        &self.composite
    }

    fn composite_mut(&mut self) -> &mut Composite<C> {
        &mut self.composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn update(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn update(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn update(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
    }

    /// Adds 10 and keeps running until the value reaches `limit`.
    struct RunUntil {
        limit: i32,
    }
    impl Behavior<TestContext> for RunUntil {
        fn update(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 10;
            if ctx.value >= self.limit {
                Status::Success
            } else {
                Status::Running
            }
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Node::new(Sequence::with_children(vec![
            Node::new(Increment),
            Node::new(Increment),
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Node::new(Sequence::with_children(vec![
            Node::new(Increment),
            Node::new(FailAlways),
            Node::new(Increment), // Should not execute
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
    }

    #[test]
    fn sequence_resumes_at_running_child() {
        let mut seq = Node::new(Sequence::with_children(vec![
            Node::new(Increment),
            Node::new(RunUntil { limit: 31 }),
            Node::new(Decrement),
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 11);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 21);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        // Increment ran once, RunUntil three times, Decrement once.
        assert_eq!(ctx.value, 30);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Node::new(Selector::with_children(vec![
            Node::new(FailAlways),
            Node::new(Increment),
            Node::new(Decrement), // Should not execute
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Only Increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Node::new(Selector::with_children(vec![
            Node::new(FailAlways),
            Node::new(FailAlways),
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn selector_stops_on_running_child() {
        let mut sel = Node::new(Selector::with_children(vec![
            Node::new(RunUntil { limit: 100 }),
            Node::new(Increment),
        ]));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 10);
    }

    #[test]
    fn reset_rewinds_cursor() {
        let mut composite = Composite::with_children(vec![
            Node::new(Increment),
            Node::new(RunUntil { limit: 100 }),
        ]);

        let mut ctx = TestContext { value: 0 };
        assert_eq!(composite.run(&mut ctx, Status::Success), Status::Running);
        assert_eq!(composite.cursor(), 1);

        composite.reset();
        assert_eq!(composite.cursor(), 0);
        assert!(composite.children()[1].check_status(Status::Invalid));
    }

    #[test]
    #[should_panic(expected = "Composite has no children")]
    fn empty_sequence_panics_on_tick() {
        let mut seq: Node<TestContext> = Node::new(Sequence::new());
        seq.tick(&mut TestContext { value: 0 });
    }

    #[test]
    #[should_panic(expected = "Composite has no children")]
    fn empty_selector_panics_on_tick() {
        let mut sel: Node<TestContext> = Node::new(Selector::new());
        sel.tick(&mut TestContext { value: 0 });
    }
}
