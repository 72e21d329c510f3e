//! Status returned by behaviour nodes.

/// The outcome of a node's most recent update.
///
/// # Frame-driven Semantics
///
/// A tree is ticked once per frame by its driver. A node either finishes
/// within that tick (`Success` / `Failure`) or asks to be re-entered on the
/// next one (`Running`). `Invalid` is only ever observed on a node that has
/// not been ticked yet, or that was explicitly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The node has never been ticked (or was reset).
    #[default]
    Invalid,

    /// The behaviour completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished.
    Success,

    /// The behaviour failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behaviour needs more frames.
    ///
    /// The node will be updated again on the next tick without another
    /// `init`, keeping whatever progress it stored.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for the two finishing outcomes, `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Swaps `Success` and `Failure`.
    ///
    /// `Running` and `Invalid` have no opposite and are returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}
