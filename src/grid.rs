use crate::error::{AntError, Result};
use std::fmt;

/// Largest window a bitmap will allocate, one byte per cell.
pub const MAX_CELLS: usize = 1 << 30;

/// Cell count of a `width` x `height` window, or `WindowTooLarge` if it
/// overflows or exceeds [`MAX_CELLS`].
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or(AntError::WindowTooLarge { width, height })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The four axis-aligned neighbors in +x, -x, +y, -y order. Neighbors that
    /// would overflow the coordinate type are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(move |(dx, dy)| {
                Some(Position {
                    x: self.x.checked_add(dx)?,
                    y: self.y.checked_add(dy)?,
                })
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size field of visited/unvisited cells covering `[0, width) x [0, height)`.
///
/// Cells are stored X-major: all of column `x` is contiguous, matching the
/// line order of the PBM output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cells = cell_count(width, height)?;
        Ok(Bitmap {
            width,
            height,
            cells: vec![false; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Whether `pos` is marked visited. Cells outside the bitmap never are.
    pub fn get(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i])
    }

    /// Marks `pos` visited. Returns `false` if `pos` lies outside the bitmap.
    pub fn set(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// One slice per x, each holding `height` cells.
    pub fn columns(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.height.max(1)).take(self.width)
    }
}
