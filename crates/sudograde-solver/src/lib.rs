//! Difficulty-grading solvers for sudoku puzzles.
//!
//! This crate provides the two engines used to measure how hard a puzzle is:
//!
//! - [`solve_with_rules`]: a rule-based human solver that applies seven
//!   ordered logical techniques until solved or stuck, grading difficulty by
//!   the hardest rule used and the weighted count of applications.
//! - [`forcing_chain_solve`]: a propagate-then-branch solver that combines
//!   singles propagation with recursive assumption branching, reporting the
//!   maximum assumption-nesting depth explored.
//!
//! Both engines are pure functions over their input: they copy the grid on
//! entry, share no state between calls, and classify rather than fail.
//! Stuck, contradicted, and budget-exhausted runs all come back as ordinary
//! results with `solved == false`. Batch drivers may freely run them over
//! many puzzles in parallel; each call is independent.
//!
//! # Examples
//!
//! ```
//! use sudograde_core::DigitGrid;
//! use sudograde_solver::{forcing_chain_solve, solve_with_rules};
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
//! let rules = solve_with_rules(&grid);
//! let chain = forcing_chain_solve(&grid);
//! println!(
//!     "score {} / depth {}",
//!     rules.total_score(),
//!     chain.max_chain_depth()
//! );
//! # Ok::<(), sudograde_core::ParseGridError>(())
//! ```

pub mod technique;

mod forcing_chain;
mod rule_solver;

#[cfg(test)]
mod testing;

pub use self::{
    forcing_chain::{ForcingChainResult, forcing_chain_solve},
    rule_solver::{RuleSolveResult, solve_with_rules},
    technique::Rule,
};
