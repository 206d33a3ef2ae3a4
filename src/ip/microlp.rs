//! Adapter over `good_lp`'s pure-Rust `microlp` backend.

use super::program::{IntegerProgram, Sense};
use super::solver::{MipSolver, SolveOutcome, SolveStatus};
use good_lp::{constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};
use std::time::Instant;

/// Solves an [`IntegerProgram`] with `microlp` (branch and bound over
/// the dual simplex), through `good_lp`.
///
/// Every program variable becomes a `good_lp` binary variable; solved
/// values are rounded at 0.5.
///
/// # Examples
///
/// ```
/// use u_bricks::ip::{IntegerProgram, LinearConstraint, MicroLpSolver, MipSolver, Sense, SolveStatus};
///
/// let mut program = IntegerProgram::new("pick-one", 2);
/// program.set_objective_coefficient(0, 4);
/// program.set_objective_coefficient(1, 1);
/// program.add_constraint(LinearConstraint::new("one", vec![(0, 1), (1, 1)], Sense::Equal, 1));
///
/// let outcome = MicroLpSolver::new().solve(&program);
/// assert_eq!(outcome.status, SolveStatus::Optimal);
/// assert_eq!(outcome.assignment, Some(vec![false, true]));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl MipSolver for MicroLpSolver {
    fn solve(&self, program: &IntegerProgram) -> SolveOutcome {
        if let Err(msg) = program.validate() {
            return SolveOutcome::empty(SolveStatus::NotSolved).with_message(msg);
        }

        // Nothing to hand to the backend; every row is constant.
        if program.num_vars() == 0 {
            return if program.is_feasible(&[]) {
                SolveOutcome::optimal(Vec::new(), 0.0)
            } else {
                SolveOutcome::empty(SolveStatus::Infeasible)
                    .with_message("constant constraint violated")
            };
        }

        let start_time = Instant::now();

        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = (0..program.num_vars())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective: Expression = program
            .objective
            .iter()
            .zip(&handles)
            .filter(|&(&coef, _)| coef != 0)
            .map(|(&coef, &var)| coef as f64 * var)
            .sum();

        let mut model = vars.minimise(objective).using(microlp);
        for c in &program.constraints {
            let lhs: Expression = c
                .terms
                .iter()
                .map(|&(var, coef)| coef as f64 * handles[var])
                .sum();
            let rhs = c.rhs as f64;
            let row = match c.sense {
                Sense::LessEq => constraint::leq(lhs, rhs),
                Sense::Equal => constraint::eq(lhs, rhs),
                Sense::GreaterEq => constraint::geq(lhs, rhs),
            };
            model = model.with(row);
        }

        let result = model.solve();
        let elapsed = start_time.elapsed().as_millis() as i64;

        match result {
            Ok(solution) => {
                let assignment: Vec<bool> = handles.iter().map(|&h| solution.value(h) > 0.5).collect();
                // Recomputed from the rounded values so the reported
                // objective is exact.
                let objective_value = program.objective_value(&assignment) as f64;
                SolveOutcome::optimal(assignment, objective_value).with_solve_time_ms(elapsed)
            }
            Err(err) => {
                let status = match err {
                    ResolutionError::Infeasible => SolveStatus::Infeasible,
                    ResolutionError::Unbounded => SolveStatus::Unbounded,
                    _ => SolveStatus::NotSolved,
                };
                SolveOutcome::empty(status)
                    .with_message(err.to_string())
                    .with_solve_time_ms(elapsed)
            }
        }
    }
}
