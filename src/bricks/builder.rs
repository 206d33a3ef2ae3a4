//! Translation of a Bricks problem into a 0/1 integer program.

use super::config::BricksConfig;
use super::problem::BricksProblem;
use super::variables::{VarKey, VarLayout};
use crate::error::{BricksError, Result};
use crate::ip::{IntegerProgram, LinearConstraint, Sense};

/// The four families of placement constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintFamily {
    /// At most one brick per cell.
    Occupancy,
    /// Exactly one cell per brick.
    Placement,
    /// Nothing recorded under an anchor to its left.
    AnchorBoundary,
    /// Both bricks of a same-color pair share an anchor.
    ColorCohesion,
}

/// A built model: the problem, its variable layout, and the program.
///
/// Read-only once built: `layout` and `families` must stay in step with
/// `problem` and `program.constraints`.
#[derive(Debug, Clone)]
pub struct BricksModel {
    problem: BricksProblem,
    layout: VarLayout,
    program: IntegerProgram,
    families: Vec<ConstraintFamily>,
}

impl BricksModel {
    /// Problem the model was built from.
    pub fn problem(&self) -> &BricksProblem {
        &self.problem
    }

    /// Flat layout of the decision tensor.
    pub fn layout(&self) -> VarLayout {
        self.layout
    }

    /// The integer program handed to the solver.
    pub fn program(&self) -> &IntegerProgram {
        &self.program
    }

    /// Flat variable index of `v[x][y][brick][rb]`.
    pub fn var(&self, x: usize, y: usize, brick: usize, rb: usize) -> usize {
        self.layout.index(VarKey::new(x, y, brick, rb))
    }

    /// Family of constraint `i`.
    pub fn family_of(&self, i: usize) -> ConstraintFamily {
        self.families[i]
    }

    /// Number of constraints in `family`.
    pub fn family_count(&self, family: ConstraintFamily) -> usize {
        self.families.iter().filter(|&&f| f == family).count()
    }

    /// Returns the number of variables.
    pub fn var_count(&self) -> usize {
        self.program.num_vars()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.program.constraint_count()
    }
}

/// Largest objective magnitude accepted: integers above 2^53 lose
/// precision once handed to the solver as `f64`.
pub const MAX_OBJECTIVE: i64 = 1 << 53;

/// Builds [`BricksModel`]s.
///
/// # Examples
///
/// ```
/// use u_bricks::bricks::{BricksConfig, BricksProblem, ConstraintFamily, ModelBuilder};
///
/// let problem = BricksProblem::new(2, 2)
///     .with_bricks(["a1", "a2", "b1"])
///     .with_pair("a1", "a2");
/// let model = ModelBuilder::build(&problem, &BricksConfig::default()).unwrap();
///
/// assert_eq!(model.var_count(), 2 * 2 * 3 * 2);
/// assert_eq!(model.family_count(ConstraintFamily::Occupancy), 4);
/// assert_eq!(model.family_count(ConstraintFamily::Placement), 3);
/// assert_eq!(model.family_count(ConstraintFamily::AnchorBoundary), 1);
/// assert_eq!(model.family_count(ConstraintFamily::ColorCohesion), 2);
/// ```
pub struct ModelBuilder<'a> {
    problem: &'a BricksProblem,
    layout: VarLayout,
    program: IntegerProgram,
    families: Vec<ConstraintFamily>,
}

/// Worst case: every brick at column 0 under anchor `xsize - 1`.
fn check_penalty_range(problem: &BricksProblem, config: &BricksConfig) -> Result<()> {
    let worst = i64::try_from(problem.xsize - 1)
        .ok()
        .zip(i64::try_from(problem.bricks.len()).ok())
        .and_then(|(span, n)| span.checked_mul(n))
        .and_then(|units| config.penalty_scale.checked_mul(units));
    match worst {
        Some(total) if total <= MAX_OBJECTIVE => Ok(()),
        _ => Err(BricksError::InvalidModel(format!(
            "penalty_scale {} is too large for a {}-column grid with {} bricks (total penalty must stay within 2^53)",
            config.penalty_scale,
            problem.xsize,
            problem.bricks.len()
        ))),
    }
}

impl<'a> ModelBuilder<'a> {
    /// Validates `problem` and builds its model.
    ///
    /// Fails with [`BricksError::InvalidModel`] on an invalid config or
    /// problem description, or when the worst-case total penalty exceeds
    /// [`MAX_OBJECTIVE`]; never touches a solver.
    pub fn build(problem: &'a BricksProblem, config: &BricksConfig) -> Result<BricksModel> {
        config.validate().map_err(BricksError::InvalidModel)?;
        problem.validate(config)?;
        check_penalty_range(problem, config)?;

        let layout = VarLayout::new(problem.xsize, problem.ysize, problem.bricks.len());
        let mut builder = ModelBuilder {
            problem,
            layout,
            program: IntegerProgram::new("bricks", layout.len()),
            families: Vec::new(),
        };

        builder.set_objective(config);
        builder.add_occupancy();
        builder.add_placement();
        builder.add_anchor_boundary();
        builder.add_color_cohesion();

        let model = builder.finish();
        log::debug!(
            "bricks model: {} vars, {} constraints (occupancy {}, placement {}, anchor {}, cohesion {})",
            model.var_count(),
            model.constraint_count(),
            model.family_count(ConstraintFamily::Occupancy),
            model.family_count(ConstraintFamily::Placement),
            model.family_count(ConstraintFamily::AnchorBoundary),
            model.family_count(ConstraintFamily::ColorCohesion),
        );
        Ok(model)
    }

    fn push(&mut self, family: ConstraintFamily, constraint: LinearConstraint) {
        self.program.add_constraint(constraint);
        self.families.push(family);
    }

    fn set_objective(&mut self, config: &BricksConfig) {
        for key in self.layout.keys() {
            let penalty = config.penalty(key.x, key.rb);
            if penalty != 0 {
                let i = self.layout.index(key);
                self.program.set_objective_coefficient(i, penalty);
            }
        }
    }

    /// `Σ_{brick,rb} v[x,y,brick,rb] <= 1` for every cell.
    fn add_occupancy(&mut self) {
        for x in 0..self.layout.xsize {
            for y in 0..self.layout.ysize {
                let terms = self.layout.cell(x, y).map(|i| (i, 1)).collect();
                self.push(
                    ConstraintFamily::Occupancy,
                    LinearConstraint::new(format!("occupancy({x},{y})"), terms, Sense::LessEq, 1),
                );
            }
        }
    }

    /// `Σ_{x,y,rb} v[x,y,brick,rb] == 1` for every brick.
    fn add_placement(&mut self) {
        let l = self.layout;
        for brick in 0..l.bricks {
            let mut terms = Vec::with_capacity(l.xsize * l.ysize * l.xsize);
            for x in 0..l.xsize {
                for y in 0..l.ysize {
                    for rb in 0..l.xsize {
                        terms.push((l.index(VarKey::new(x, y, brick, rb)), 1));
                    }
                }
            }
            let label = format!("placement({})", self.problem.bricks[brick]);
            self.push(
                ConstraintFamily::Placement,
                LinearConstraint::new(label, terms, Sense::Equal, 1),
            );
        }
    }

    /// `Σ_{y,brick} v[x,y,brick,rb] == 0` for every `x > rb`.
    fn add_anchor_boundary(&mut self) {
        let l = self.layout;
        for x in 0..l.xsize {
            for rb in 0..x {
                let mut terms = Vec::with_capacity(l.ysize * l.bricks);
                for y in 0..l.ysize {
                    for brick in 0..l.bricks {
                        terms.push((l.index(VarKey::new(x, y, brick, rb)), 1));
                    }
                }
                self.push(
                    ConstraintFamily::AnchorBoundary,
                    LinearConstraint::new(format!("anchor({x},{rb})"), terms, Sense::Equal, 0),
                );
            }
        }
    }

    /// `Σ_{x,y} v[x,y,b1,rb] - Σ_{x,y} v[x,y,b2,rb] == 0` for every listed
    /// pair and anchor. Pairs are taken as listed; no closure is computed.
    fn add_color_cohesion(&mut self) {
        let l = self.layout;
        for (b1, b2) in self.problem.pair_indices() {
            for rb in 0..l.xsize {
                let mut terms = Vec::with_capacity(2 * l.xsize * l.ysize);
                for x in 0..l.xsize {
                    for y in 0..l.ysize {
                        terms.push((l.index(VarKey::new(x, y, b1, rb)), 1));
                        terms.push((l.index(VarKey::new(x, y, b2, rb)), -1));
                    }
                }
                let label = format!(
                    "cohesion({},{},{rb})",
                    self.problem.bricks[b1], self.problem.bricks[b2]
                );
                self.push(
                    ConstraintFamily::ColorCohesion,
                    LinearConstraint::new(label, terms, Sense::Equal, 0),
                );
            }
        }
    }

    fn finish(self) -> BricksModel {
        BricksModel {
            problem: self.problem.clone(),
            layout: self.layout,
            program: self.program,
            families: self.families,
        }
    }
}
