//! Crate-wide error type.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BricksError>;

/// Errors surfaced while building, solving, or reading back a Bricks model.
///
/// Every variant is returned to the caller synchronously. Nothing is
/// retried: re-solving an unchanged integer program gains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BricksError {
    /// The problem description is malformed (duplicate or unknown brick
    /// ids, impossible capacity, bad dimensions or config).
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// The solver proved that no feasible assignment exists.
    #[error("no feasible placement exists")]
    Infeasible,

    /// The solver reported an unbounded objective.
    #[error("solver reported an unbounded objective")]
    Unbounded,

    /// The solver failed for any other reason; message kept verbatim.
    #[error("solver did not finish: {0}")]
    NotSolved(String),

    /// The solved assignment violates a model invariant.
    #[error("inconsistent solution: {0}")]
    InconsistentSolution(String),
}
