//! Build, solve, extract.

use super::builder::{BricksModel, ModelBuilder};
use super::config::BricksConfig;
use super::extract::Placement;
use super::problem::BricksProblem;
use crate::error::{BricksError, Result};
use crate::ip::{MipSolver, SolveStatus};

/// Result of a Bricks solve.
#[derive(Debug, Clone)]
pub struct BricksResult {
    /// Brick placement read from the optimal assignment.
    pub placement: Placement,

    /// Objective value (total penalty) of the assignment.
    pub objective_value: f64,

    /// Raw 0/1 assignment, indexed by variable id.
    pub assignment: Vec<bool>,

    /// Number of decision variables in the model.
    pub var_count: usize,

    /// Number of constraints in the model.
    pub constraint_count: usize,

    /// Solve time reported by the solver, in milliseconds.
    pub solve_time_ms: i64,
}

/// Runs a Bricks problem end to end.
pub struct BricksRunner;

impl BricksRunner {
    /// Builds the model for `problem`, solves it with `solver`, and reads
    /// back the placement.
    ///
    /// Non-optimal solver statuses become errors and are never retried.
    pub fn solve<S: MipSolver>(
        problem: &BricksProblem,
        solver: &S,
        config: &BricksConfig,
    ) -> Result<BricksResult> {
        let model = ModelBuilder::build(problem, config)?;
        Self::solve_model(&model, solver, config)
    }

    /// Solves an already built model.
    pub fn solve_model<S: MipSolver>(
        model: &BricksModel,
        solver: &S,
        config: &BricksConfig,
    ) -> Result<BricksResult> {
        log::info!(
            "solving bricks {}x{} with {} bricks: {} vars, {} constraints",
            model.layout().xsize,
            model.layout().ysize,
            model.layout().bricks,
            model.var_count(),
            model.constraint_count()
        );

        let outcome = solver.solve(model.program());
        let reason = || outcome.message.clone().unwrap_or_else(|| "no detail".into());

        let assignment = match (outcome.status, &outcome.assignment) {
            (SolveStatus::Optimal, Some(a)) => a.clone(),
            (SolveStatus::Optimal, None) => {
                return Err(BricksError::NotSolved(
                    "solver reported optimal without an assignment".into(),
                ))
            }
            (SolveStatus::Infeasible, _) => {
                log::warn!("bricks model infeasible: {}", reason());
                return Err(BricksError::Infeasible);
            }
            (SolveStatus::Unbounded, _) => {
                log::warn!("bricks model unbounded: {}", reason());
                return Err(BricksError::Unbounded);
            }
            (SolveStatus::NotSolved, _) => {
                log::warn!("bricks model not solved: {}", reason());
                return Err(BricksError::NotSolved(reason()));
            }
        };

        if config.verify_solution {
            if assignment.len() != model.var_count() {
                return Err(BricksError::InconsistentSolution(format!(
                    "assignment has {} values, model has {} variables",
                    assignment.len(),
                    model.var_count()
                )));
            }
            if let Some(violated) = model.program().violations(&assignment).next() {
                return Err(BricksError::InconsistentSolution(format!(
                    "solver assignment violates {}",
                    violated.label
                )));
            }
        }

        let placement = Placement::extract(model, &assignment)?;
        let objective_value = outcome
            .objective_value
            .unwrap_or_else(|| model.program().objective_value(&assignment) as f64);

        log::info!(
            "bricks solved: {} placed, objective {objective_value} in {} ms",
            placement.placed_count(),
            outcome.solve_time_ms
        );

        Ok(BricksResult {
            placement,
            objective_value,
            assignment,
            var_count: model.var_count(),
            constraint_count: model.constraint_count(),
            solve_time_ms: outcome.solve_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ip::{IntegerProgram, SolveOutcome};
    use std::cell::Cell;

    /// Replays a fixed outcome and counts calls.
    struct Scripted {
        outcome: SolveOutcome,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(outcome: SolveOutcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl MipSolver for Scripted {
        fn solve(&self, _program: &IntegerProgram) -> SolveOutcome {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    fn problem() -> BricksProblem {
        BricksProblem::new(2, 1)
            .with_bricks(["a1", "a2"])
            .with_pair("a1", "a2")
    }

    fn good_assignment(model: &BricksModel) -> Vec<bool> {
        let mut a = vec![false; model.var_count()];
        a[model.var(1, 0, 0, 1)] = true;
        a[model.var(0, 0, 1, 1)] = true;
        a
    }

    #[test]
    fn test_optimal() {
        let config = BricksConfig::default();
        let model = ModelBuilder::build(&problem(), &config).unwrap();
        let solver = Scripted::new(SolveOutcome::optimal(good_assignment(&model), 10.0));

        let result = BricksRunner::solve_model(&model, &solver, &config).unwrap();
        assert_eq!(result.placement.placed_count(), 2);
        assert_eq!(result.placement.anchor_of("a1"), Some(1));
        assert_eq!(result.placement.anchor_of("a2"), Some(1));
        assert!((result.objective_value - 10.0).abs() < 1e-10);
        assert_eq!(result.var_count, 8);
    }

    #[test]
    fn test_invalid_model_skips_solver() {
        let solver = Scripted::new(SolveOutcome::empty(SolveStatus::NotSolved));
        let problem = BricksProblem::new(1, 1).with_bricks(["a", "b"]);

        let err = BricksRunner::solve(&problem, &solver, &BricksConfig::default()).unwrap_err();
        assert!(matches!(err, BricksError::InvalidModel(_)));
        assert_eq!(solver.calls.get(), 0);
    }

    #[test]
    fn test_infeasible() {
        let solver = Scripted::new(SolveOutcome::empty(SolveStatus::Infeasible));
        let err = BricksRunner::solve(&problem(), &solver, &BricksConfig::default()).unwrap_err();
        assert_eq!(err, BricksError::Infeasible);
        assert_eq!(solver.calls.get(), 1);
    }

    #[test]
    fn test_not_solved_message_verbatim() {
        let solver = Scripted::new(
            SolveOutcome::empty(SolveStatus::NotSolved).with_message("iteration limit"),
        );
        let err = BricksRunner::solve(&problem(), &solver, &BricksConfig::default()).unwrap_err();
        assert_eq!(err, BricksError::NotSolved("iteration limit".into()));
        assert_eq!(solver.calls.get(), 1);
    }

    #[test]
    fn test_unbounded() {
        let solver = Scripted::new(SolveOutcome::empty(SolveStatus::Unbounded));
        let err = BricksRunner::solve(&problem(), &solver, &BricksConfig::default()).unwrap_err();
        assert_eq!(err, BricksError::Unbounded);
    }

    #[test]
    fn test_verification_catches_bad_assignment() {
        let config = BricksConfig::default();
        let model = ModelBuilder::build(&problem(), &config).unwrap();
        // a2 missing
        let mut a = vec![false; model.var_count()];
        a[model.var(1, 0, 0, 1)] = true;
        let solver = Scripted::new(SolveOutcome::optimal(a, 0.0));

        let err = BricksRunner::solve_model(&model, &solver, &config).unwrap_err();
        assert!(matches!(err, BricksError::InconsistentSolution(msg) if msg.contains("placement(a2)")));
    }

    #[test]
    fn test_verification_disabled() {
        let config = BricksConfig::default().with_verify_solution(false);
        let model = ModelBuilder::build(&problem(), &config).unwrap();
        let mut a = vec![false; model.var_count()];
        a[model.var(1, 0, 0, 1)] = true;
        let solver = Scripted::new(SolveOutcome::optimal(a, 0.0));

        let result = BricksRunner::solve_model(&model, &solver, &config).unwrap();
        assert_eq!(result.placement.placed_count(), 1);
    }
}
