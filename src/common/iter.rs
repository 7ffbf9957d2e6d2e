use std::ops::Not;

use super::metadata::Version;

// Zigzag traversal of the encoding region
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Not for Direction {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

// Walks two-column strips from the bottom right corner, right column before left,
// reversing direction at the top and bottom edges. The vertical timing column is
// skipped entirely. Yields every other module of the grid, so callers must skip
// modules already taken by function patterns.
#[derive(Debug, Clone)]
pub struct ZigZagIter {
    w: i16,
    // Right column of the current strip
    col: i16,
    row: i16,
    dir: Direction,
    // Whether the next module is in the left column of the strip
    left: bool,
}

impl ZigZagIter {
    pub fn new(ver: Version) -> Self {
        let w = ver.width() as i16;
        Self { w, col: w - 1, row: w - 1, dir: Direction::Up, left: false }
    }

    fn advance(&mut self) {
        if !self.left {
            self.left = true;
            return;
        }

        self.left = false;
        match self.dir {
            Direction::Up if self.row > 0 => self.row -= 1,
            Direction::Down if self.row < self.w - 1 => self.row += 1,
            _ => {
                self.dir = !self.dir;
                self.col -= 2;
                if self.col == VERT_TIMING_COL {
                    self.col -= 1;
                }
            }
        }
    }
}

impl Iterator for ZigZagIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.col < 0 {
            return None;
        }
        let res = (self.row, self.col - self.left as i16);
        self.advance();
        Some(res)
    }
}


// Global constants
//------------------------------------------------------------------------------

static VERT_TIMING_COL: i16 = 6;
