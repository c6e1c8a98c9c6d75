//! Error types shared by every container contract in the workspace.

use std::error::Error;
use std::fmt;

/// A view operation that could not be carried out.
///
/// Every mutating contract method returns `Result<_, ViewError>` so that a
/// disallowed mutation is an ordinary, synchronous result rather than a
/// panic. A failed operation is never partially applied: the backing
/// container is left exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The operation is structurally disallowed for this container shape
    /// (inserting into a fixed matrix, mutating a frozen wrapper, inserting
    /// through a one-way transformed view).
    Unsupported {
        /// The operation that was attempted.
        op: &'static str,
    },
    /// A write-through view could not translate the written value back into
    /// the backing element type. See [`NoInverse`].
    NoInverse,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { op } => write!(f, "unsupported operation: {op}"),
            Self::NoInverse => write!(f, "value has no inverse under the view's transformation"),
        }
    }
}

impl Error for ViewError {}

/// A two-way transformation had no input for the requested output.
///
/// Returned by `Commuter::disapply` when the forward function is not
/// surjective at the given point, or when the transform records no
/// invertible relationship there. Write-through views catch this at the
/// view boundary: an `insert` re-signals it as [`ViewError::NoInverse`],
/// while lookups (`contains`, `remove`) treat it as *not present*.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoInverse;

impl fmt::Display for NoInverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no inverse exists for the supplied output")
    }
}

impl Error for NoInverse {}

impl From<NoInverse> for ViewError {
    fn from(_: NoInverse) -> Self {
        ViewError::NoInverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let e = ViewError::Unsupported { op: "insert" };
        assert_eq!(e.to_string(), "unsupported operation: insert");
        assert_eq!(
            ViewError::from(NoInverse),
            ViewError::NoInverse,
        );
    }
}
