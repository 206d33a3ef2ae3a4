//! Solver interface for integer programs.

use super::program::IntegerProgram;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// Proven optimal solution found.
    Optimal,
    /// No feasible solution exists.
    Infeasible,
    /// The objective can decrease without bound.
    Unbounded,
    /// The solver stopped without a conclusive answer.
    NotSolved,
}

/// Outcome of a solve call.
///
/// `assignment` is present only when `status` is [`SolveStatus::Optimal`];
/// it holds one value per program variable, indexed by variable id.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Solver status.
    pub status: SolveStatus,
    /// Variable values (0/1 as `bool`).
    pub assignment: Option<Vec<bool>>,
    /// Objective value reported by the solver.
    pub objective_value: Option<f64>,
    /// Solver-provided diagnostic, if any.
    pub message: Option<String>,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl SolveOutcome {
    /// Creates an outcome without an assignment.
    pub fn empty(status: SolveStatus) -> Self {
        Self {
            status,
            assignment: None,
            objective_value: None,
            message: None,
            solve_time_ms: 0,
        }
    }

    /// Creates an optimal outcome.
    pub fn optimal(assignment: Vec<bool>, objective_value: f64) -> Self {
        Self {
            status: SolveStatus::Optimal,
            assignment: Some(assignment),
            objective_value: Some(objective_value),
            message: None,
            solve_time_ms: 0,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_solve_time_ms(mut self, ms: i64) -> Self {
        self.solve_time_ms = ms;
        self
    }

    /// Whether an assignment was found.
    pub fn is_solution_found(&self) -> bool {
        self.status == SolveStatus::Optimal && self.assignment.is_some()
    }
}

/// Trait for integer-program solver implementations.
///
/// Implementors wrap an external MILP solver. The call is blocking and
/// has no cancellation; a caller wanting a wall-clock bound imposes it
/// outside this interface.
pub trait MipSolver {
    /// Solves the program and returns the outcome.
    fn solve(&self, program: &IntegerProgram) -> SolveOutcome;
}

impl<S: MipSolver + ?Sized> MipSolver for &S {
    fn solve(&self, program: &IntegerProgram) -> SolveOutcome {
        (**self).solve(program)
    }
}
