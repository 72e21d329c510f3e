//! Tree construction errors.

/// Mistakes in a [`Builder`](crate::Builder) chain.
///
/// These describe a tree that was assembled incorrectly. They are returned by
/// [`Builder::try_build`](crate::Builder::try_build); [`Builder::build`](crate::Builder::build)
/// panics with the same message instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No leaf or composite was ever set as the root.
    #[error("the behaviour tree is empty")]
    EmptyTree,

    /// `end()` was called with no composite open.
    #[error("end() called with no open composite")]
    UnbalancedEnd,

    /// `build()` was called while composites were still open.
    #[error("{open} composite(s) still open at build(); missing end()")]
    UnclosedComposites { open: usize },
}
