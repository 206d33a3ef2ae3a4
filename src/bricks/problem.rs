//! Bricks problem description.

use crate::bricks::config::BricksConfig;
use crate::error::{BricksError, Result};
use std::collections::HashMap;

/// Color of a brick under the naming convention: the id with trailing
/// ASCII digits stripped (`c3` → `c`).
///
/// An id made only of digits is its own color.
pub fn color_prefix(id: &str) -> &str {
    let trimmed = id.trim_end_matches(|c: char| c.is_ascii_digit());
    if trimmed.is_empty() {
        id
    } else {
        trimmed
    }
}

/// A set of bricks that must share one anchor column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup {
    /// Member brick ids, in brick-list order.
    pub members: Vec<String>,
}

impl ColorGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, brick: &str) -> bool {
        self.members.iter().any(|m| m == brick)
    }
}

/// Problem description: grid size, ordered brick ids, and unordered
/// same-color pairs.
///
/// # Examples
///
/// ```
/// use u_bricks::bricks::BricksProblem;
///
/// let problem = BricksProblem::new(2, 2)
///     .with_bricks(["a1", "a2", "b1"])
///     .with_prefix_pairs();
/// assert_eq!(problem.same_color_pairs, vec![("a1".to_string(), "a2".to_string())]);
/// assert_eq!(problem.color_groups().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BricksProblem {
    /// Grid width (`XSIZE`).
    pub xsize: usize,
    /// Grid height (`YSIZE`).
    pub ysize: usize,
    /// Brick ids, in order.
    pub bricks: Vec<String>,
    /// Same-color pairs, as listed.
    pub same_color_pairs: Vec<(String, String)>,
}

impl BricksProblem {
    /// Creates an empty problem on an `xsize × ysize` grid.
    pub fn new(xsize: usize, ysize: usize) -> Self {
        Self {
            xsize,
            ysize,
            bricks: Vec::new(),
            same_color_pairs: Vec::new(),
        }
    }

    pub fn with_brick(mut self, id: impl Into<String>) -> Self {
        self.bricks.push(id.into());
        self
    }

    pub fn with_bricks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bricks.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Declares `a` and `b` to be the same color.
    pub fn with_pair(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.same_color_pairs.push((a.into(), b.into()));
        self
    }

    /// Adds pairs derived from the naming convention: for each color
    /// prefix, consecutive bricks of that color (in brick order) are
    /// paired, forming a chain.
    pub fn with_prefix_pairs(mut self) -> Self {
        let mut last_of_color: HashMap<&str, &str> = HashMap::new();
        let mut pairs = Vec::new();
        for id in &self.bricks {
            let color = color_prefix(id);
            if let Some(prev) = last_of_color.insert(color, id) {
                pairs.push((prev.to_string(), id.clone()));
            }
        }
        self.same_color_pairs.extend(pairs);
        self
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> usize {
        self.xsize * self.ysize
    }

    /// Position of `id` in the brick list.
    pub fn brick_index(&self, id: &str) -> Option<usize> {
        self.bricks.iter().position(|b| b == id)
    }

    /// Checks the description before a model is built.
    ///
    /// Fails with [`BricksError::InvalidModel`] on zero dimensions, empty
    /// or duplicate ids, pairs naming unknown bricks or the same brick
    /// twice, and (when `config.check_capacity`) more bricks than cells.
    pub fn validate(&self, config: &BricksConfig) -> Result<()> {
        if self.xsize == 0 || self.ysize == 0 {
            return Err(BricksError::InvalidModel(format!(
                "grid must be at least 1x1, got {}x{}",
                self.xsize, self.ysize
            )));
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.bricks.len());
        for (i, id) in self.bricks.iter().enumerate() {
            if id.is_empty() {
                return Err(BricksError::InvalidModel(format!("brick {i} has an empty id")));
            }
            if seen.insert(id.as_str(), i).is_some() {
                return Err(BricksError::InvalidModel(format!("duplicate brick id: {id}")));
            }
        }

        for (a, b) in &self.same_color_pairs {
            for id in [a, b] {
                if !seen.contains_key(id.as_str()) {
                    return Err(BricksError::InvalidModel(format!(
                        "pair ({a}, {b}) references unknown brick: {id}"
                    )));
                }
            }
            if a == b {
                return Err(BricksError::InvalidModel(format!(
                    "pair ({a}, {b}) pairs a brick with itself"
                )));
            }
        }

        if config.check_capacity && self.bricks.len() > self.capacity() {
            return Err(BricksError::InvalidModel(format!(
                "{} bricks do not fit in a {}x{} grid ({} cells)",
                self.bricks.len(),
                self.xsize,
                self.ysize,
                self.capacity()
            )));
        }

        Ok(())
    }

    /// Pairs as brick indices. Unknown ids are skipped.
    pub fn pair_indices(&self) -> Vec<(usize, usize)> {
        let index: HashMap<&str, usize> = self
            .bricks
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        self.same_color_pairs
            .iter()
            .filter_map(|(a, b)| Some((*index.get(a.as_str())?, *index.get(b.as_str())?)))
            .collect()
    }

    /// Color groups: connected components of the same-color relation.
    ///
    /// Bricks without pairs form singleton groups. Groups are ordered by
    /// their first member; members keep brick-list order.
    pub fn color_groups(&self) -> Vec<ColorGroup> {
        let n = self.bricks.len();
        let mut parent: Vec<usize> = (0..n).collect();

        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        for (a, b) in self.pair_indices() {
            let ra = find(&mut parent, a);
            let rb = find(&mut parent, b);
            if ra != rb {
                // keep the earlier brick as root
                let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
                parent[hi] = lo;
            }
        }

        let mut group_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<ColorGroup> = Vec::new();
        for (i, id) in self.bricks.iter().enumerate() {
            let root = find(&mut parent, i);
            let g = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(ColorGroup { members: Vec::new() });
                groups.len() - 1
            });
            groups[g].members.push(id.clone());
        }
        groups
    }
}
