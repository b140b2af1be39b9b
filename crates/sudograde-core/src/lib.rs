//! Core data structures for the sudograde difficulty-grading engines.
//!
//! This crate provides the grid and candidate model shared by every solver:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Per-cell candidate sets as 9-bit sets
//! - [`position`] / [`house`]: Board coordinates and the row/column/box
//!   scopes the uniqueness constraint applies to
//! - [`grid`]: The 9×9 value grid, placement legality, the solved check, and
//!   the 81-character puzzle text form
//! - [`candidate_grid`]: The grid-plus-candidates working state and its
//!   atomic place-and-propagate operation
//!
//! Solvers copy this state on entry and on every branch; nothing in this
//! crate performs I/O or holds state across calls.
//!
//! # Examples
//!
//! ```
//! use sudograde_core::{CandidateGrid, Digit, DigitGrid, Position};
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
//! let state = CandidateGrid::from_grid(&grid);
//! assert!(!state.candidates_at(Position::new(2, 0)).contains(Digit::D5));
//! # Ok::<(), sudograde_core::ParseGridError>(())
//! ```

pub mod candidate_grid;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    candidate_grid::CandidateGrid,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
