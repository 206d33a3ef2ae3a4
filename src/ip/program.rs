//! Integer program definition.

use std::fmt;

/// Comparison sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `lhs <= rhs`
    LessEq,
    /// `lhs == rhs`
    Equal,
    /// `lhs >= rhs`
    GreaterEq,
}

impl Sense {
    /// Whether `lhs` and `rhs` satisfy this sense.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Sense::LessEq => lhs <= rhs,
            Sense::Equal => lhs == rhs,
            Sense::GreaterEq => lhs >= rhs,
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Sense::LessEq => "<=",
            Sense::Equal => "==",
            Sense::GreaterEq => ">=",
        };
        f.write_str(op)
    }
}

/// A linear (in)equality over binary variables.
///
/// Records are immutable once added to a program. `label` is a
/// human-readable tag (e.g. `occupancy(2,1)`) used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    /// Diagnostic label.
    pub label: String,
    /// `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, i64)>,
    /// Comparison sense.
    pub sense: Sense,
    /// Right-hand side.
    pub rhs: i64,
}

impl LinearConstraint {
    pub fn new(label: impl Into<String>, terms: Vec<(usize, i64)>, sense: Sense, rhs: i64) -> Self {
        Self {
            label: label.into(),
            terms,
            sense,
            rhs,
        }
    }

    /// Left-hand side value under `assignment`.
    ///
    /// Variables past the end of `assignment` count as unset.
    pub fn lhs(&self, assignment: &[bool]) -> i64 {
        self.terms
            .iter()
            .filter(|&&(var, _)| assignment.get(var).copied().unwrap_or(false))
            .map(|&(_, coef)| coef)
            .sum()
    }

    /// Whether `assignment` satisfies this constraint.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.sense.holds(self.lhs(assignment), self.rhs)
    }
}

/// A minimization problem over binary variables.
///
/// Variables are identified by their index `0..num_vars`. The objective
/// is stored densely, one coefficient per variable.
///
/// # Examples
///
/// ```
/// use u_bricks::ip::{IntegerProgram, LinearConstraint, Sense};
///
/// let mut program = IntegerProgram::new("pick-one", 3);
/// program.set_objective_coefficient(0, 5);
/// program.set_objective_coefficient(1, 2);
/// program.set_objective_coefficient(2, 7);
/// program.add_constraint(LinearConstraint::new(
///     "exactly-one",
///     vec![(0, 1), (1, 1), (2, 1)],
///     Sense::Equal,
///     1,
/// ));
///
/// assert!(program.validate().is_ok());
/// assert!(program.is_feasible(&[false, true, false]));
/// assert_eq!(program.objective_value(&[false, true, false]), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IntegerProgram {
    /// Program name.
    pub name: String,
    /// Objective coefficient per variable.
    pub objective: Vec<i64>,
    /// Constraints, in insertion order.
    pub constraints: Vec<LinearConstraint>,
}

impl IntegerProgram {
    /// Creates a program with `num_vars` binary variables and a zero objective.
    pub fn new(name: impl Into<String>, num_vars: usize) -> Self {
        Self {
            name: name.into(),
            objective: vec![0; num_vars],
            constraints: Vec::new(),
        }
    }

    /// Number of binary variables.
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn set_objective_coefficient(&mut self, var: usize, coef: i64) {
        self.objective[var] = coef;
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Validates the program for consistency.
    ///
    /// Checks that every constraint references existing variables.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.num_vars();
        for constraint in &self.constraints {
            if let Some(&(var, _)) = constraint.terms.iter().find(|&&(var, _)| var >= n) {
                return Err(format!(
                    "{}: variable {var} out of range (program has {n})",
                    constraint.label
                ));
            }
        }
        Ok(())
    }

    /// Objective value of `assignment`.
    pub fn objective_value(&self, assignment: &[bool]) -> i64 {
        self.objective
            .iter()
            .zip(assignment)
            .filter(|&(_, &on)| on)
            .map(|(&coef, _)| coef)
            .sum()
    }

    /// Constraints violated by `assignment`.
    ///
    /// A short `assignment` is read as if padded with `false`; use
    /// [`is_feasible`](Self::is_feasible) to also reject a length mismatch.
    pub fn violations<'a>(&'a self, assignment: &'a [bool]) -> impl Iterator<Item = &'a LinearConstraint> + 'a {
        self.constraints
            .iter()
            .filter(move |c| !c.is_satisfied_by(assignment))
    }

    /// Whether `assignment` satisfies every constraint.
    pub fn is_feasible(&self, assignment: &[bool]) -> bool {
        assignment.len() == self.num_vars() && self.violations(assignment).next().is_none()
    }
}
