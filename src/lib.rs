//! Bricks placement as a 0/1 integer linear program.
//!
//! Provides:
//!
//! - **IP layer** ([`ip`]): a domain-agnostic description of binary
//!   minimization problems with linear constraints, a [`ip::MipSolver`]
//!   boundary, and an adapter over `good_lp`'s `microlp` backend.
//! - **Bricks model** ([`bricks`]): translates grid placement rules
//!   (grouping, alignment, minimal spread) into an [`ip::IntegerProgram`]
//!   and reads the solved assignment back into a placement grid.
//!
//! # Architecture
//!
//! The crate generates models; it does not search. Branch and bound is
//! delegated to the solver behind [`ip::MipSolver`]. Logging goes
//! through the `log` facade; install any logger to see it.

pub mod bricks;
pub mod error;
pub mod ip;

pub use error::{BricksError, Result};
