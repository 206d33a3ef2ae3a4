//! 0/1 integer programming layer.
//!
//! Provides a domain-agnostic description of a minimization problem over
//! binary variables with linear constraints, and a solver boundary.
//!
//! # Key Components
//!
//! - **Program**: [`IntegerProgram`] — variables, objective, constraints
//! - **Constraints**: [`LinearConstraint`] — immutable `terms sense rhs` rows
//! - **Solver**: [`MipSolver`] trait — interface for solver implementations
//! - **Adapter**: [`MicroLpSolver`] — `good_lp` + `microlp` backend
//!
//! # Design
//!
//! This module defines the modeling layer only. Branch and bound lives in
//! the external solver; the [`MipSolver`] trait allows plugging in any
//! MILP backend `good_lp` supports (CBC, HiGHS, SCIP) without touching
//! model builders.

mod microlp;
mod program;
mod solver;

pub use microlp::MicroLpSolver;
pub use program::{IntegerProgram, LinearConstraint, Sense};
pub use solver::{MipSolver, SolveOutcome, SolveStatus};
