//! Elimination passes: naked pairs, pointing pairs, hidden pairs.
//!
//! These passes only prune candidate sets; they never place digits. Each
//! returns on the first change it makes, and the solver restarts from the
//! easiest rule after any successful pruning. Application counts therefore
//! reflect restart cycles, not logically distinct deductions.

use sudograde_core::{CandidateGrid, Digit, DigitSet, House, Position};
use tinyvec::ArrayVec;

/// Within any unit, two cells whose candidate sets are the same two digits
/// eliminate those digits from every other cell of the unit.
pub(crate) fn apply_naked_pairs(grid: &mut CandidateGrid) -> bool {
    for house in House::ALL {
        let cells = house.positions();
        let mut spots: ArrayVec<[Position; 9]> = ArrayVec::new();
        for pos in cells {
            if grid.candidates_at(pos).len() >= 2 {
                spots.push(pos);
            }
        }
        for (i, &first) in spots.iter().enumerate() {
            let pair = grid.candidates_at(first);
            if pair.len() != 2 {
                continue;
            }
            for &second in &spots[i + 1..] {
                if grid.candidates_at(second) != pair {
                    continue;
                }
                let mut changed = false;
                for pos in cells {
                    if pos == first || pos == second {
                        continue;
                    }
                    for digit in pair {
                        changed |= grid.remove_candidate(pos, digit);
                    }
                }
                if changed {
                    return true;
                }
            }
        }
    }
    false
}

/// Within a box, a digit whose candidates all lie on one row or column is
/// eliminated from that line outside the box.
pub(crate) fn apply_pointing_pairs(grid: &mut CandidateGrid) -> bool {
    for (box_index, cells) in Position::BOXES.iter().enumerate() {
        for digit in Digit::ALL {
            let mut positions: ArrayVec<[Position; 9]> = ArrayVec::new();
            for &pos in cells {
                if grid.candidates_at(pos).contains(digit) {
                    positions.push(pos);
                }
            }
            if positions.len() < 2 {
                continue;
            }

            let mut changed = false;
            if positions.iter().all(|pos| pos.y() == positions[0].y()) {
                for pos in Position::ROWS[positions[0].y() as usize] {
                    if pos.box_index() as usize == box_index {
                        continue;
                    }
                    changed |= grid.remove_candidate(pos, digit);
                }
            }
            if positions.iter().all(|pos| pos.x() == positions[0].x()) {
                for pos in Position::COLUMNS[positions[0].x() as usize] {
                    if pos.box_index() as usize == box_index {
                        continue;
                    }
                    changed |= grid.remove_candidate(pos, digit);
                }
            }
            if changed {
                return true;
            }
        }
    }
    false
}

/// Within any unit, two digits confined to the same two cells strip all
/// other candidates from those cells.
///
/// Only counts as a change when a candidate set actually shrinks; a pair
/// whose cells already hold nothing else is skipped.
pub(crate) fn apply_hidden_pairs(grid: &mut CandidateGrid) -> bool {
    for house in House::ALL {
        let cells = house.positions();
        let mut spots: ArrayVec<[Position; 9]> = ArrayVec::new();
        for pos in cells {
            if grid.candidates_at(pos).len() >= 2 {
                spots.push(pos);
            }
        }
        for (i, &d1) in Digit::ALL.iter().enumerate() {
            for &d2 in &Digit::ALL[i + 1..] {
                let with1: ArrayVec<[Position; 9]> = spots
                    .iter()
                    .copied()
                    .filter(|&pos| grid.candidates_at(pos).contains(d1))
                    .collect();
                let with2: ArrayVec<[Position; 9]> = spots
                    .iter()
                    .copied()
                    .filter(|&pos| grid.candidates_at(pos).contains(d2))
                    .collect();
                if with1.len() != 2 || with2.len() != 2 || with1 != with2 {
                    continue;
                }
                let (p1, p2) = (with1[0], with1[1]);
                if grid.candidates_at(p1).len() <= 2 && grid.candidates_at(p2).len() <= 2 {
                    continue;
                }
                let keep = DigitSet::from_elem(d1) | DigitSet::from_elem(d2);
                let mut changed = false;
                for pos in [p1, p2] {
                    for digit in grid.candidates_at(pos) & !keep {
                        changed |= grid.remove_candidate(pos, digit);
                    }
                }
                if changed {
                    return true;
                }
            }
        }
    }
    false
}
