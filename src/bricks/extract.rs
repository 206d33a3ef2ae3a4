//! Reading a solved assignment back into a placement grid.

use super::builder::BricksModel;
use super::config::BricksConfig;
use crate::error::{BricksError, Result};
use std::fmt;

/// A brick sitting in a cell, with the anchor column it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedBrick {
    /// Brick id.
    pub brick: String,
    /// Anchor column.
    pub anchor: usize,
}

/// Grid mapping each cell `(x, y)` to the brick placed there, if any.
///
/// Rendering (via [`Display`](fmt::Display) or [`render`](Self::render))
/// prints one line per row, `y` ascending, with cells `x` ascending and
/// tab-separated; a placed cell reads `<brick>[<anchor>]`, an empty one
/// is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Grid width.
    pub xsize: usize,
    /// Grid height.
    pub ysize: usize,
    /// Cells in row-major order (`y * xsize + x`).
    cells: Vec<Option<PlacedBrick>>,
}

impl Placement {
    /// Creates an empty placement.
    pub fn empty(xsize: usize, ysize: usize) -> Self {
        Self {
            xsize,
            ysize,
            cells: vec![None; xsize * ysize],
        }
    }

    /// Reads the placement out of `assignment`.
    ///
    /// For each cell, finds the unique `(brick, rb)` whose variable is
    /// set. Fails with [`BricksError::InconsistentSolution`] if the
    /// assignment has the wrong length or a cell holds more than one
    /// brick.
    pub fn extract(model: &BricksModel, assignment: &[bool]) -> Result<Self> {
        let layout = model.layout();
        if assignment.len() != layout.len() {
            return Err(BricksError::InconsistentSolution(format!(
                "assignment has {} values, model has {} variables",
                assignment.len(),
                layout.len()
            )));
        }

        let mut placement = Self::empty(layout.xsize, layout.ysize);
        for x in 0..layout.xsize {
            for y in 0..layout.ysize {
                let mut set = layout.cell(x, y).filter(|&i| assignment[i]);
                let Some(first) = set.next() else {
                    continue;
                };
                if let Some(second) = set.next() {
                    let bricks = &model.problem().bricks;
                    let a = layout.key(first);
                    let b = layout.key(second);
                    return Err(BricksError::InconsistentSolution(format!(
                        "cell ({x},{y}) holds both {}[{}] and {}[{}]",
                        bricks[a.brick], a.rb, bricks[b.brick], b.rb
                    )));
                }
                let key = layout.key(first);
                placement.set(
                    x,
                    y,
                    PlacedBrick {
                        brick: model.problem().bricks[key.brick].clone(),
                        anchor: key.rb,
                    },
                );
            }
        }
        Ok(placement)
    }

    fn set(&mut self, x: usize, y: usize, placed: PlacedBrick) {
        let i = y * self.xsize + x;
        self.cells[i] = Some(placed);
    }

    /// Brick at `(x, y)`, if any. Out-of-range cells are empty.
    pub fn get(&self, x: usize, y: usize) -> Option<&PlacedBrick> {
        if x >= self.xsize || y >= self.ysize {
            return None;
        }
        self.cells[y * self.xsize + x].as_ref()
    }

    /// Occupied cells as `((x, y), brick)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &PlacedBrick)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|placed| ((i % self.xsize, i / self.xsize), placed))
        })
    }

    /// Cell holding `brick`.
    pub fn location_of(&self, brick: &str) -> Option<(usize, usize)> {
        self.iter()
            .find(|(_, placed)| placed.brick == brick)
            .map(|(cell, _)| cell)
    }

    /// Anchor column assigned to `brick`.
    pub fn anchor_of(&self, brick: &str) -> Option<usize> {
        self.iter()
            .find(|(_, placed)| placed.brick == brick)
            .map(|(_, placed)| placed.anchor)
    }

    /// Number of occupied cells.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Sum of `penalty(x, anchor)` over placed bricks.
    pub fn total_penalty(&self, config: &BricksConfig) -> i64 {
        self.iter()
            .map(|((x, _), placed)| config.penalty(x, placed.anchor))
            .sum()
    }

    /// Text rendering of the grid.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.ysize {
            for x in 0..self.xsize {
                if x > 0 {
                    f.write_str("\t")?;
                }
                if let Some(placed) = self.get(x, y) {
                    write!(f, "{}[{}]", placed.brick, placed.anchor)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
