use std::fmt::{Display, Error, Formatter};
use std::ops::Deref;

use tracing::{debug, trace};

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        match pattern {
            0..=7 => Ok(Self(pattern)),
            _ => Err(QRError::InvalidMaskingPattern),
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for MaskPattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}

mod mask_functions {
    pub fn checkerboard(r: i32, c: i32) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i32, _: i32) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i32, c: i32) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i32, c: i32) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i32, c: i32) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i32, c: i32) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i32, c: i32) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i32, c: i32) -> bool {
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    // Predicate over (row, col) telling which data modules get flipped
    pub fn mask_function(self) -> fn(i32, i32) -> bool {
        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid pattern {}", self.0),
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

// A fully masked symbol with format info stamped and its total penalty
#[derive(Debug, Clone)]
pub struct MaskCandidate {
    pub mask: MaskPattern,
    pub qr: QR,
    pub penalty: u32,
}

impl MaskCandidate {
    pub fn new(qr: &QR, mask: MaskPattern) -> Self {
        let mut qr = qr.clone();
        qr.apply_mask(mask);
        let penalty = compute_total_penalty(&qr);
        trace!(mask = *mask, penalty, "Scored mask candidate");
        Self { mask, qr, penalty }
    }
}

// Masks the unmasked symbol with the lowest penalty pattern. Ties go to the lower pattern.
pub fn apply_best_mask(qr: &mut QR) -> MaskPattern {
    let mut best = MaskCandidate::new(qr, MaskPattern(0));
    for mask in MaskPattern::all().skip(1) {
        let candidate = MaskCandidate::new(qr, mask);
        if candidate.penalty < best.penalty {
            best = candidate;
        }
    }

    debug!(mask = *best.mask, penalty = best.penalty, "Selected mask");
    *qr = best.qr;
    best.mask
}

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let grid = qr.colors();
    let w = qr.width();
    let run_pen = compute_run_penalty(&grid, w);
    let blk_pen = compute_block_penalty(&grid, w);
    let fp_pen = compute_finder_pattern_penalty(&grid, w);
    let bal_pen = compute_balance_penalty(&grid);
    run_pen + blk_pen + fp_pen + bal_pen
}

// Penalty rules over a row major grid of width `w`
//------------------------------------------------------------------------------

fn rows_and_cols(grid: &[Color], w: usize) -> impl Iterator<Item = Vec<Color>> + '_ {
    let rows = grid.chunks(w).map(<[Color]>::to_vec);
    let cols = (0..w).map(move |c| (0..w).map(|r| grid[r * w + c]).collect::<Vec<_>>());
    rows.chain(cols)
}

// N1: 3 points for a run of 5 same colored modules, plus 1 for each module beyond
fn compute_run_penalty(grid: &[Color], w: usize) -> u32 {
    rows_and_cols(grid, w).map(|line| line_run_penalty(&line)).sum()
}

fn line_run_penalty(line: &[Color]) -> u32 {
    let run_pen = |run: u32| if run >= 5 { run - 2 } else { 0 };
    let mut pen = 0;
    let mut run = 0;
    for (i, clr) in line.iter().enumerate() {
        if i > 0 && line[i - 1] != *clr {
            pen += run_pen(run);
            run = 0;
        }
        run += 1;
    }
    pen + run_pen(run)
}

// N2: 3 points for every 2x2 block of one color, overlaps included
fn compute_block_penalty(grid: &[Color], w: usize) -> u32 {
    let mut pen = 0;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = grid[r * w + c];
            if clr == grid[r * w + c + 1]
                && clr == grid[(r + 1) * w + c]
                && clr == grid[(r + 1) * w + c + 1]
            {
                pen += 3;
            }
        }
    }
    pen
}

// N3: 40 points for every 1:1:3:1:1 finder like pattern with 4 light modules on one side
fn compute_finder_pattern_penalty(grid: &[Color], w: usize) -> u32 {
    rows_and_cols(grid, w)
        .map(|line| {
            let hits = line
                .windows(FINDER_LIKE.len())
                .filter(|win| *win == FINDER_LIKE || *win == FINDER_LIKE_REV)
                .count();
            hits as u32 * 40
        })
        .sum()
}

// N4: 10 points for every 5% the dark ratio strays from 50%
fn compute_balance_penalty(grid: &[Color]) -> u32 {
    let total = grid.len();
    let dark = grid.iter().filter(|&&c| c == Color::Dark).count();
    let pct = dark * 100 / total;
    let k1 = pct - pct % 5;
    let k2 = if dark * 100 == k1 * total { k1 } else { k1 + 5 };
    let dev = k1.abs_diff(50).min(k2.abs_diff(50));
    (dev / 5 * 10) as u32
}


// Global constants
//------------------------------------------------------------------------------

static FINDER_LIKE: [Color; 11] = {
    use Color::{Dark as D, Light as L};
    [D, L, D, D, D, L, D, L, L, L, L]
};

static FINDER_LIKE_REV: [Color; 11] = {
    use Color::{Dark as D, Light as L};
    [L, L, L, L, D, L, D, D, D, L, D]
};
