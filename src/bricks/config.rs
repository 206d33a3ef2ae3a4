//! Bricks model configuration.

/// Default cost per column of distance between a brick and its anchor.
pub const DEFAULT_PENALTY_SCALE: i64 = 10;

/// Configuration for building and solving a Bricks model.
///
/// # Examples
///
/// ```
/// use u_bricks::bricks::BricksConfig;
///
/// let config = BricksConfig::default()
///     .with_penalty_scale(5)
///     .with_check_capacity(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.penalty(1, 3), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BricksConfig {
    /// Scale `k` of the penalty `k * |rb - x|`.
    pub penalty_scale: i64,

    /// Reject problems with more bricks than cells before solving.
    ///
    /// When disabled, the solver reports such problems as infeasible.
    pub check_capacity: bool,

    /// Re-check the solved assignment against every constraint.
    pub verify_solution: bool,
}

impl Default for BricksConfig {
    fn default() -> Self {
        Self {
            penalty_scale: DEFAULT_PENALTY_SCALE,
            check_capacity: true,
            verify_solution: true,
        }
    }
}

impl BricksConfig {
    pub fn with_penalty_scale(mut self, k: i64) -> Self {
        self.penalty_scale = k;
        self
    }

    pub fn with_check_capacity(mut self, check: bool) -> Self {
        self.check_capacity = check;
        self
    }

    pub fn with_verify_solution(mut self, verify: bool) -> Self {
        self.verify_solution = verify;
        self
    }

    /// Penalty for a brick in column `x` whose anchor is `rb`.
    ///
    /// Symmetric in its arguments and zero when `x == rb`. Saturates at
    /// `i64::MAX`.
    pub fn penalty(&self, x: usize, rb: usize) -> i64 {
        let span = i64::try_from(x.abs_diff(rb)).unwrap_or(i64::MAX);
        self.penalty_scale.saturating_mul(span)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.penalty_scale < 0 {
            return Err(format!(
                "penalty_scale must be non-negative, got {}",
                self.penalty_scale
            ));
        }
        Ok(())
    }
}
