use std::fmt;

use crate::error::{Error, Field, Result};
use crate::rule::RuleSet;

/// Toroidal field of cells, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let capacity = check_dimensions(width, height)?;
        Ok(Grid {
            width,
            height,
            data: vec![false; capacity],
        })
    }

    /// Reads a pattern drawn as text, one row per line. `'0'`, `'.'` and
    /// `' '` are dead cells, anything else is alive. Empty lines are skipped.
    pub fn from_text(s: &str) -> Result<Self> {
        let mut data = vec![];
        let mut width = None;
        let mut height = 0;

        for (row, line) in s.lines().filter(|l| !l.is_empty()).enumerate() {
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(Error::RaggedPattern { row, len, expected })
                }
                Some(_) => {}
            }
            data.extend(line.chars().map(|c| !matches!(c, '0' | '.' | ' ')));
            height += 1;
        }

        let width = width.unwrap_or(0);
        check_dimensions(width, height)?;
        Ok(Grid { width, height, data })
    }

    /// Wraps an existing row-major buffer.
    pub(crate) fn from_cells(width: usize, height: usize, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Grid { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Sets a cell; coordinates outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.height && col < self.width {
            self.data[row * self.width + col] = alive;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.data.chunks(self.width)
    }

    /// Flattened row-major view.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.data
    }

    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&c| c).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

/// Checks both dimensions are positive and returns the cell count.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize> {
    if width == 0 {
        return Err(Error::InvalidDimension {
            field: Field::Width,
            value: 0,
        });
    }
    if height == 0 {
        return Err(Error::InvalidDimension {
            field: Field::Height,
            value: 0,
        });
    }
    width.checked_mul(height).ok_or(Error::InvalidDimension {
        field: Field::Height,
        value: i64::try_from(height).unwrap_or(i64::MAX),
    })
}

/// Live-neighbor count of every cell, same shape as the grid it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl NeighborCounts {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    pub fn counts(&self) -> &[u8] {
        &self.data
    }
}

/// Counts live cells in the Moore neighborhood of every cell, with rows
/// and columns wrapping around to the opposite edge.
///
/// On grids one cell thick the wrapped neighbors are the cell itself or
/// its row/column mates, each counted once per offset that reaches it.
pub fn neighbor_counts(grid: &Grid) -> NeighborCounts {
    let (w, h) = (grid.width, grid.height);
    let mut data = Vec::with_capacity(w * h);

    for i in 0..h {
        let up = (i + h - 1) % h;
        let down = (i + 1) % h;
        for j in 0..w {
            let left = (j + w - 1) % w;
            let right = (j + 1) % w;

            let neighbors = [
                (up, left),
                (up, j),
                (up, right),
                (i, left),
                (i, right),
                (down, left),
                (down, j),
                (down, right),
            ];
            let n = neighbors
                .iter()
                .filter(|&&(r, c)| grid.data[r * w + c])
                .count();
            data.push(n as u8);
        }
    }

    NeighborCounts {
        width: w,
        height: h,
        data,
    }
}

/// Computes the next generation. Every cell reads the counts of the
/// input grid only, so the update is simultaneous.
pub fn step(grid: &Grid, rules: &RuleSet) -> Grid {
    let counts = neighbor_counts(grid);
    let data = grid
        .data
        .iter()
        .zip(&counts.data)
        .map(|(&current, &n)| produce_value(current, n, rules))
        .collect();
    Grid::from_cells(grid.width, grid.height, data)
}

#[inline]
fn produce_value(current: bool, n: u8, rules: &RuleSet) -> bool {
    if current {
        rules.survives(n)
    } else {
        rules.born(n)
    }
}
