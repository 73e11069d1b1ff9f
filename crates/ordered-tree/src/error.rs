use thiserror::Error;

/// Failure modes of the bounded-search queries (`floor` / `ceiling`).
///
/// Every other tree operation is total and reports its outcome through the
/// return value instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree holds no entries at all.
    #[error("tree is empty")]
    EmptyTree,

    /// Every stored key falls on the wrong side of the query bound: the
    /// argument is smaller than the minimum (floor) or larger than the
    /// maximum (ceiling).
    #[error("no stored key satisfies the query bound")]
    NotFound,
}
