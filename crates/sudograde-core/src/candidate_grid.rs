//! Candidate tracking over a digit grid.
//!
//! This module provides [`CandidateGrid`], the working state shared by the
//! solving engines: a [`DigitGrid`] paired with one [`DigitSet`] of remaining
//! candidates per cell.
//!
//! Candidates are derived data, not independently authoritative. They are
//! built from the grid by legality checks and kept in sync eagerly: every
//! placement immediately clears the placed digit from all peer candidate
//! sets and empties the placed cell's own set. That discipline makes
//! "empty candidate set on an empty cell" a reliable contradiction signal.

use crate::digit::Digit;
use crate::digit_set::DigitSet;
use crate::grid::DigitGrid;
use crate::house::House;
use crate::position::Position;

/// A digit grid plus per-cell candidate sets.
///
/// The invariants maintained by this type:
///
/// - An empty cell's candidate set is exactly the set of digits legal there
///   at construction time, minus any candidates eliminated since.
/// - A filled cell's candidate set is always empty.
///
/// `Clone` is the copy-on-branch primitive: branching searches clone the
/// whole state before assuming a placement, so backtracking never corrupts a
/// sibling branch or the caller's grid.
///
/// # Examples
///
/// ```
/// use sudograde_core::{CandidateGrid, Digit, DigitGrid, Position};
///
/// let grid = DigitGrid::new();
/// let mut state = CandidateGrid::from_grid(&grid);
///
/// assert_eq!(state.candidates_at(Position::new(0, 0)).len(), 9);
///
/// state.place_and_update(Position::new(0, 0), Digit::D5);
/// assert!(!state.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(state.candidates_at(Position::new(0, 0)).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    grid: DigitGrid,
    candidates: [DigitSet; 81],
}

impl CandidateGrid {
    /// Builds the candidate state for a grid.
    ///
    /// For every empty cell the candidate set is exactly
    /// `{d : can_place(pos, d)}`; filled cells get empty sets. The input
    /// grid is copied, never borrowed mutably.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut candidates = [DigitSet::EMPTY; 81];
        for pos in Position::ALL {
            if grid.get(pos).is_some() {
                continue;
            }
            for digit in Digit::ALL {
                if grid.can_place(pos, digit) {
                    candidates[pos.index()].insert(digit);
                }
            }
        }
        Self {
            grid: grid.clone(),
            candidates,
        }
    }

    /// Returns the underlying digit grid.
    #[must_use]
    pub const fn digit_grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Returns the candidate set at a position.
    ///
    /// Meaningful only for empty cells; filled cells always report the
    /// empty set.
    #[must_use]
    pub const fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index()]
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[must_use]
    pub const fn is_empty_cell(&self, pos: Position) -> bool {
        self.grid.get(pos).is_none()
    }

    /// Places a digit and propagates the elimination to all peers.
    ///
    /// Sets the cell, clears `digit` from every candidate set in the same
    /// row, column, and box, then empties the placed cell's own set. This is
    /// the atomic unit all solving logic builds on.
    pub fn place_and_update(&mut self, pos: Position, digit: Digit) {
        self.grid.set(pos, digit);
        let houses = [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: pos.box_index(),
            },
        ];
        for house in houses {
            for peer in house.positions() {
                self.candidates[peer.index()].remove(digit);
            }
        }
        self.candidates[pos.index()] = DigitSet::EMPTY;
    }

    /// Removes a single candidate. Returns `true` if it was present.
    pub const fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates[pos.index()].remove(digit)
    }

    /// Returns `true` if some empty cell has no remaining candidates.
    ///
    /// This is the contradiction signal for branching searches: a state in
    /// which an empty cell can hold nothing is unsatisfiable.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        Position::ALL
            .iter()
            .any(|&pos| self.grid.get(pos).is_none() && self.candidates[pos.index()].is_empty())
    }

    /// Returns `true` iff the underlying grid is completely filled and
    /// self-consistent. See [`DigitGrid::is_solved`].
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_candidates_match_legality() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        let state = CandidateGrid::from_grid(&grid);

        for pos in Position::ALL {
            if grid.get(pos).is_some() {
                assert!(state.candidates_at(pos).is_empty());
                continue;
            }
            for digit in Digit::ALL {
                assert_eq!(
                    state.candidates_at(pos).contains(digit),
                    grid.can_place(pos, digit),
                    "candidate mismatch at {pos} for {digit}"
                );
            }
        }
    }

    #[test]
    fn test_place_and_update_clears_peers_and_self() {
        let grid = DigitGrid::new();
        let mut state = CandidateGrid::from_grid(&grid);
        let pos = Position::new(4, 4);

        state.place_and_update(pos, Digit::D7);

        // placed cell holds the digit and has no candidates
        assert_eq!(state.digit_grid().get(pos), Some(Digit::D7));
        assert!(state.candidates_at(pos).is_empty());

        // all peers lost exactly D7
        for peer in Position::ALL {
            if peer == pos {
                continue;
            }
            let shares_house = peer.y() == pos.y()
                || peer.x() == pos.x()
                || peer.box_index() == pos.box_index();
            let candidates = state.candidates_at(peer);
            assert_eq!(candidates.contains(Digit::D7), !shares_house);
            for digit in Digit::ALL {
                if digit != Digit::D7 {
                    assert!(candidates.contains(digit));
                }
            }
        }
    }

    #[test]
    fn test_contradiction_detection() {
        let grid = DigitGrid::new();
        let mut state = CandidateGrid::from_grid(&grid);
        assert!(!state.has_contradiction());

        let pos = Position::new(0, 0);
        for digit in Digit::ALL {
            state.remove_candidate(pos, digit);
        }
        assert!(state.has_contradiction());
    }

    #[test]
    fn test_inconsistent_grid_yields_empty_candidates_not_panic() {
        // two cells in the same row already hold the same digit; the state
        // builds fine and simply reports tight candidate sets
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D1);
        grid.set(Position::new(5, 0), Digit::D1);
        let state = CandidateGrid::from_grid(&grid);
        assert!(!state.candidates_at(Position::new(1, 0)).contains(Digit::D1));
    }

    #[test]
    fn test_clone_isolates_branches() {
        let grid = DigitGrid::new();
        let state = CandidateGrid::from_grid(&grid);

        let mut branch = state.clone();
        branch.place_and_update(Position::new(0, 0), Digit::D9);

        // the original state is untouched
        assert!(state.digit_grid().get(Position::new(0, 0)).is_none());
        assert!(state.candidates_at(Position::new(1, 0)).contains(Digit::D9));
    }
}

#[cfg(test)]
mod conservation {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Placing a digit removes it from exactly the peer cells that
        /// previously contained it, and changes nothing else.
        #[test]
        fn place_and_update_is_conservative(
            placements in prop::collection::vec((0usize..81, 1u8..=9), 0..30),
            target in 0usize..81,
            digit in 1u8..=9,
        ) {
            let mut grid = DigitGrid::new();
            for (index, value) in placements {
                let pos = Position::from_index(index);
                let digit = Digit::from_value(value);
                if grid.get(pos).is_none() && grid.can_place(pos, digit) {
                    grid.set(pos, digit);
                }
            }

            let pos = Position::from_index(target);
            let digit = Digit::from_value(digit);
            prop_assume!(grid.get(pos).is_none() && grid.can_place(pos, digit));

            let before = CandidateGrid::from_grid(&grid);
            let mut after = before.clone();
            after.place_and_update(pos, digit);

            for peer in Position::ALL {
                let was = before.candidates_at(peer);
                let now = after.candidates_at(peer);
                if peer == pos {
                    prop_assert!(now.is_empty());
                } else if peer.y() == pos.y()
                    || peer.x() == pos.x()
                    || peer.box_index() == pos.box_index()
                {
                    let mut expected = was;
                    expected.remove(digit);
                    prop_assert_eq!(now, expected);
                } else {
                    prop_assert_eq!(now, was);
                }
            }
        }
    }
}
