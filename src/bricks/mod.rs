//! The Bricks placement puzzle as a 0/1 integer program.
//!
//! Named bricks are placed on an `XSIZE × YSIZE` grid. Bricks of the
//! same color converge on a shared anchor column `rb`; a brick in column
//! `x` costs `k * |rb - x|`.
//!
//! The decision tensor `v[x][y][brick][rb]` is true iff `brick` sits at
//! `(x, y)` under anchor `rb`. The model minimizes total penalty subject
//! to four constraint families:
//!
//! - **Occupancy**: at most one brick per cell
//! - **Placement**: exactly one cell per brick
//! - **Anchor boundary**: no brick to the right of its anchor (`x <= rb`)
//! - **Color cohesion**: each listed same-color pair shares its anchor
//!
//! # Key Components
//!
//! - [`BricksProblem`] — grid size, brick ids, same-color pairs
//! - [`ModelBuilder`] — builds a [`BricksModel`] (layout + program)
//! - [`Placement`] — extracted grid and its text rendering
//! - [`BricksRunner`] — build, solve, extract
//!
//! # Examples
//!
//! ```
//! use u_bricks::bricks::{BricksConfig, BricksProblem, BricksRunner};
//! use u_bricks::ip::MicroLpSolver;
//!
//! let problem = BricksProblem::new(2, 2)
//!     .with_bricks(["a1", "a2", "b1"])
//!     .with_prefix_pairs();
//! let result = BricksRunner::solve(&problem, &MicroLpSolver::new(), &BricksConfig::default()).unwrap();
//!
//! assert_eq!(result.placement.placed_count(), 3);
//! assert_eq!(result.placement.anchor_of("a1"), result.placement.anchor_of("a2"));
//! assert_eq!(result.objective_value, 0.0);
//! ```

mod builder;
mod config;
mod extract;
mod problem;
mod runner;
mod variables;

pub use builder::{BricksModel, ConstraintFamily, ModelBuilder, MAX_OBJECTIVE};
pub use config::{BricksConfig, DEFAULT_PENALTY_SCALE};
pub use extract::{PlacedBrick, Placement};
pub use problem::{color_prefix, BricksProblem, ColorGroup};
pub use runner::{BricksResult, BricksRunner};
pub use variables::{VarKey, VarLayout};
