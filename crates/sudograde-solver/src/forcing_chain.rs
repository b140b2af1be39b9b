//! The forcing-chain solver.
//!
//! Models solving as propagate-then-branch: singles propagation runs to a
//! fixed point, and when it stalls the solver assumes a value for the
//! least-constrained cell, recursing on a private copy of the state and
//! backtracking on contradiction. The maximum assumption-nesting depth
//! reached anywhere in the explored tree is the difficulty signal.

use sudograde_core::{CandidateGrid, Digit, DigitGrid, DigitSet, Position};

use crate::technique::singles;

/// Recursion ceiling for assumption nesting.
const MAX_DEPTH: usize = 20;

/// Global node-expansion budget for one solve call.
const MAX_NODES: usize = 2_000_000;

/// Assumption-nesting depth at which a puzzle counts as requiring
/// "ten-step reasoning".
const TEN_STEP_DEPTH: usize = 10;

/// The outcome of a forcing-chain solve.
///
/// `max_chain_depth` is a property of the search tree explored, not of the
/// final solution path: a failed branch that reached depth 7 before being
/// backtracked still counts if nothing went deeper. Propagation-only solves
/// report depth 0.
///
/// # Examples
///
/// ```
/// use sudograde_core::DigitGrid;
/// use sudograde_solver::forcing_chain_solve;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let result = forcing_chain_solve(&grid);
/// assert!(result.solved());
/// # Ok::<(), sudograde_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcingChainResult {
    solved: bool,
    max_chain_depth: usize,
}

impl ForcingChainResult {
    /// Returns `true` if a solution was found.
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the deepest assumption nesting reached by any explored
    /// branch, including branches later abandoned as contradictions.
    #[must_use]
    pub const fn max_chain_depth(&self) -> usize {
        self.max_chain_depth
    }

    /// Returns `true` if the search needed an assumption nesting of ten or
    /// more. A fixed narrative difficulty tier with no other behavioral
    /// effect.
    #[must_use]
    pub const fn ten_step_reasoning(&self) -> bool {
        self.max_chain_depth >= TEN_STEP_DEPTH
    }
}

/// Where a propagation run ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Propagation {
    /// The grid is completely filled and self-consistent.
    Solved,
    /// Some empty cell has no remaining candidates.
    Contradiction,
    /// No single applies; branching is required.
    Stuck,
}

/// Depth and budget bookkeeping threaded through the recursion.
///
/// Explicit state rather than globals keeps the solver reentrant: every
/// solve call owns its own context.
#[derive(Debug, Default)]
struct SearchContext {
    max_depth: usize,
    nodes: usize,
}

/// Applies naked and hidden singles until solved, contradicted, or stuck.
///
/// A strict subset of the rule solver's techniques: no pair or pointing
/// logic. Running this again on an already-propagated state places nothing.
fn propagate(grid: &mut CandidateGrid) -> Propagation {
    loop {
        if grid.has_contradiction() {
            return Propagation::Contradiction;
        }
        if grid.is_solved() {
            return Propagation::Solved;
        }
        if let Some((pos, digit)) = singles::find_naked_single(grid) {
            grid.place_and_update(pos, digit);
            continue;
        }
        if let Some((pos, digit)) = find_hidden_single(grid) {
            grid.place_and_update(pos, digit);
            continue;
        }
        return Propagation::Stuck;
    }
}

fn find_hidden_single(grid: &CandidateGrid) -> Option<(Position, Digit)> {
    singles::find_hidden_single_row(grid)
        .or_else(|| singles::find_hidden_single_col(grid))
        .or_else(|| singles::find_hidden_single_box(grid))
}

/// Picks the empty cell with the fewest remaining candidates (at least two),
/// ties broken by row-major scan order.
fn pick_branch_cell(grid: &CandidateGrid) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    let mut best_len = 10;
    for pos in Position::ALL {
        if !grid.is_empty_cell(pos) {
            continue;
        }
        let candidates = grid.candidates_at(pos);
        let len = candidates.len();
        if len >= 2 && len < best_len {
            best_len = len;
            best = Some((pos, candidates));
        }
    }
    best
}

fn search(grid: &mut CandidateGrid, depth: usize, ctx: &mut SearchContext) -> bool {
    match propagate(grid) {
        Propagation::Contradiction => false,
        Propagation::Solved => true,
        Propagation::Stuck => {
            let Some((pos, candidates)) = pick_branch_cell(grid) else {
                return false;
            };
            if depth >= MAX_DEPTH {
                return false;
            }
            for digit in candidates {
                ctx.nodes += 1;
                if ctx.nodes > MAX_NODES {
                    return false;
                }
                let mut branch = grid.clone();
                branch.place_and_update(pos, digit);
                let next_depth = depth + 1;
                ctx.max_depth = ctx.max_depth.max(next_depth);
                if search(&mut branch, next_depth, ctx) {
                    return true;
                }
            }
            false
        }
    }
}

/// Solves a puzzle by propagation plus assumption branching, tracking the
/// maximum assumption-nesting depth.
///
/// Runs on a private copy of `puzzle`; every branch additionally clones the
/// whole grid-and-candidate state before assuming a placement, so
/// backtracking never corrupts a sibling branch. Depth-first,
/// first-success-wins: the search stops at the first solution rather than
/// exploring exhaustively.
///
/// Depth and node ceilings are circuit breakers against pathological inputs:
/// exceeding either abandons the branch (or the whole run) and reports
/// `solved == false`, never a panic. Unsatisfiable grids likewise classify
/// as unsolved via contradiction.
#[must_use]
pub fn forcing_chain_solve(puzzle: &DigitGrid) -> ForcingChainResult {
    let mut grid = CandidateGrid::from_grid(puzzle);
    let mut ctx = SearchContext::default();

    let solved = search(&mut grid, 0, &mut ctx);

    ForcingChainResult {
        solved,
        max_chain_depth: ctx.max_depth,
    }
}
