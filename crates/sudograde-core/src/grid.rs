//! The 9×9 digit grid and its text form.
//!
//! This module provides [`DigitGrid`], the plain value grid every solver
//! starts from, together with parsing from and formatting to the 81-character
//! puzzle text representation used by puzzle corpora.
//!
//! # Text format
//!
//! Puzzles scan row-major: digits `1`-`9` are filled cells, `0`, `.`, and `_`
//! are empty cells. All other characters (whitespace, separators, trailing
//! noise) are ignored, and anything beyond 81 cells is truncated.
//!
//! ```
//! use sudograde_core::DigitGrid;
//!
//! let grid: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid.filled_count(), 30);
//! # Ok::<(), sudograde_core::ParseGridError>(())
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::digit::Digit;
use crate::house::House;
use crate::position::Position;

/// Error parsing an 81-character puzzle string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contained fewer than 81 cell characters.
    #[display("expected 81 cells, found {found}")]
    NotEnoughCells {
        /// Number of cell characters found.
        found: usize,
    },
}

/// A 9×9 grid of digits; `None` marks an empty cell.
///
/// This is the caller-facing puzzle representation. Solvers take a
/// `DigitGrid` by reference and work on private copies; a caller's grid is
/// never mutated by a solve call.
///
/// # Examples
///
/// ```
/// use sudograde_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Digit::D5);
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.can_place(Position::new(8, 0), Digit::D5)); // same row
/// assert!(grid.can_place(Position::new(8, 8), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the digit at a position.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` iff `digit` appears nowhere in the row, column, or box
    /// containing `pos`.
    ///
    /// The scan includes `pos` itself, so placing a digit onto a cell that
    /// already holds it is reported as illegal. Pure, no mutation.
    #[must_use]
    pub fn can_place(&self, pos: Position, digit: Digit) -> bool {
        let houses = [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: pos.box_index(),
            },
        ];
        houses
            .iter()
            .flat_map(|house| house.positions())
            .all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns `true` iff the grid is completely filled and self-consistent.
    ///
    /// Each filled cell is re-checked as if it were vacated: its digit must
    /// not appear in any *other* cell of its row, column, or box. A single
    /// legality pass is not enough here, since a full grid can still contain
    /// duplicates; the vacate-and-recheck form detects that.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            let houses = [
                House::Row { y: pos.y() },
                House::Column { x: pos.x() },
                House::Box {
                    index: pos.box_index(),
                },
            ];
            let duplicated = houses
                .iter()
                .flat_map(|house| house.positions())
                .any(|peer| peer != pos && self.get(peer) == Some(digit));
            if duplicated {
                return false;
            }
        }
        true
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            let cell = match c {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    Digit::try_from_value(value)
                }
                '0' | '.' | '_' => None,
                _ => continue,
            };
            if let Some(digit) = cell {
                grid.cells[count] = Some(digit);
            }
            count += 1;
            if count == 81 {
                break;
            }
        }
        if count < 81 {
            return Err(ParseGridError::NotEnoughCells { found: count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
