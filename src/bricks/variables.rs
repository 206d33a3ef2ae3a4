//! Decision variable tensor layout.

/// Coordinates of one decision variable `v[x][y][brick][rb]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarKey {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
    /// Index of the brick in the problem's brick list.
    pub brick: usize,
    /// Anchor column.
    pub rb: usize,
}

impl VarKey {
    pub fn new(x: usize, y: usize, brick: usize, rb: usize) -> Self {
        Self { x, y, brick, rb }
    }
}

/// Flat layout of the 4-dimensional boolean tensor.
///
/// Index function: `((x * ysize + y) * bricks + brick) * xsize + rb`.
/// The anchor dimension varies fastest, so all anchors of one
/// `(cell, brick)` combination are contiguous.
///
/// # Examples
///
/// ```
/// use u_bricks::bricks::{VarKey, VarLayout};
///
/// let layout = VarLayout::new(4, 3, 12);
/// assert_eq!(layout.len(), 4 * 3 * 12 * 4);
///
/// let key = VarKey::new(2, 1, 5, 3);
/// assert_eq!(layout.key(layout.index(key)), key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarLayout {
    /// Grid width; also the number of anchor columns.
    pub xsize: usize,
    /// Grid height.
    pub ysize: usize,
    /// Number of bricks.
    pub bricks: usize,
}

impl VarLayout {
    pub fn new(xsize: usize, ysize: usize, bricks: usize) -> Self {
        Self {
            xsize,
            ysize,
            bricks,
        }
    }

    /// Total number of variables, `|X| * |Y| * |bricks| * |X|`.
    pub fn len(&self) -> usize {
        self.xsize * self.ysize * self.bricks * self.xsize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of `key`.
    ///
    /// Coordinates must be in range; checked in debug builds.
    pub fn index(&self, key: VarKey) -> usize {
        debug_assert!(key.x < self.xsize && key.rb < self.xsize);
        debug_assert!(key.y < self.ysize && key.brick < self.bricks);
        ((key.x * self.ysize + key.y) * self.bricks + key.brick) * self.xsize + key.rb
    }

    /// Inverse of [`index`](Self::index).
    pub fn key(&self, index: usize) -> VarKey {
        let rb = index % self.xsize;
        let rest = index / self.xsize;
        let brick = rest % self.bricks;
        let rest = rest / self.bricks;
        let y = rest % self.ysize;
        let x = rest / self.ysize;
        VarKey { x, y, brick, rb }
    }

    /// Variables of cell `(x, y)`: every brick and anchor.
    pub fn cell(&self, x: usize, y: usize) -> std::ops::Range<usize> {
        let width = self.bricks * self.xsize;
        let start = (x * self.ysize + y) * width;
        start..start + width
    }

    /// Every key, in index order.
    pub fn keys(&self) -> impl Iterator<Item = VarKey> + '_ {
        (0..self.len()).map(move |i| self.key(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(VarLayout::new(4, 3, 12).len(), 576);
        assert!(VarLayout::new(3, 3, 0).is_empty());
    }

    #[test]
    fn test_index_order() {
        let layout = VarLayout::new(2, 2, 2);
        assert_eq!(layout.index(VarKey::new(0, 0, 0, 0)), 0);
        assert_eq!(layout.index(VarKey::new(0, 0, 0, 1)), 1);
        assert_eq!(layout.index(VarKey::new(0, 0, 1, 0)), 2);
        assert_eq!(layout.index(VarKey::new(0, 1, 0, 0)), 4);
        assert_eq!(layout.index(VarKey::new(1, 0, 0, 0)), 8);
        assert_eq!(layout.index(VarKey::new(1, 1, 1, 1)), 15);
    }

    #[test]
    fn test_keys_roundtrip() {
        let layout = VarLayout::new(3, 2, 4);
        for (i, key) in layout.keys().enumerate() {
            assert_eq!(layout.index(key), i);
        }
    }

    #[test]
    fn test_cell_range() {
        let layout = VarLayout::new(3, 2, 4);
        let range = layout.cell(1, 1);
        assert_eq!(range.len(), 12);
        assert!(range.clone().all(|i| {
            let k = layout.key(i);
            k.x == 1 && k.y == 1
        }));
    }
}
