//! Placement finders: naked and hidden singles.
//!
//! Each finder returns the first matching placement in scan order without
//! mutating the grid; the caller performs the placement. Scan order is part
//! of the contract: results must be deterministic across runs.

use sudograde_core::{CandidateGrid, Digit, House, Position};

/// Finds the first empty cell with exactly one remaining candidate,
/// scanning row-major.
pub(crate) fn find_naked_single(grid: &CandidateGrid) -> Option<(Position, Digit)> {
    Position::ALL.iter().find_map(|&pos| {
        if !grid.is_empty_cell(pos) {
            return None;
        }
        grid.candidates_at(pos).as_single().map(|digit| (pos, digit))
    })
}

/// Finds the first digit with exactly one legal cell within a row.
pub(crate) fn find_hidden_single_row(grid: &CandidateGrid) -> Option<(Position, Digit)> {
    find_hidden_single_in(grid, &House::ROWS)
}

/// Finds the first digit with exactly one legal cell within a column.
pub(crate) fn find_hidden_single_col(grid: &CandidateGrid) -> Option<(Position, Digit)> {
    find_hidden_single_in(grid, &House::COLUMNS)
}

/// Finds the first digit with exactly one legal cell within a box.
pub(crate) fn find_hidden_single_box(grid: &CandidateGrid) -> Option<(Position, Digit)> {
    find_hidden_single_in(grid, &House::BOXES)
}

fn find_hidden_single_in(grid: &CandidateGrid, houses: &[House; 9]) -> Option<(Position, Digit)> {
    for house in houses {
        for digit in Digit::ALL {
            let mut count = 0;
            let mut found = None;
            for pos in house.positions() {
                if !grid.is_empty_cell(pos) {
                    continue;
                }
                if grid.candidates_at(pos).contains(digit) {
                    count += 1;
                    found = Some(pos);
                }
            }
            if count == 1
                && let Some(pos) = found
            {
                return Some((pos, digit));
            }
        }
    }
    None
}
