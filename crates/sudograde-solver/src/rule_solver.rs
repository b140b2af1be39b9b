//! The rule-based human solver.
//!
//! Applies the ordered rule list until the grid is solved or no rule fires,
//! and grades difficulty from what it took: the hardest rule used, the
//! weighted total of every application, and per-rule counts.

use sudograde_core::{CandidateGrid, DigitGrid};

use crate::technique::Rule;

/// Iteration ceiling for the solve loop. A circuit breaker only; real
/// puzzles finish in well under a hundred steps.
const MAX_STEPS: usize = 10_000;

/// The outcome of a rule-based solve, with its difficulty grading.
///
/// Score and counts accumulate regardless of eventual success, so an
/// unsolved puzzle still reports partial progress.
///
/// # Examples
///
/// ```
/// use sudograde_core::DigitGrid;
/// use sudograde_solver::solve_with_rules;
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
/// let result = solve_with_rules(&grid);
/// if result.solved() {
///     println!(
///         "solved in {} steps, score {}, hardest: {:?}",
///         result.steps(),
///         result.total_score(),
///         result.hardest_rule()
///     );
/// }
/// # Ok::<(), sudograde_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSolveResult {
    solved: bool,
    hardest_rule: Option<Rule>,
    total_score: u32,
    steps: usize,
    applications: [usize; Rule::COUNT],
}

impl RuleSolveResult {
    /// Returns `true` if the solve loop reached a fully filled,
    /// self-consistent grid.
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the hardest rule that actually fired, or `None` if no rule
    /// ever did (grid already solved, or already stuck at the start).
    #[must_use]
    pub const fn hardest_rule(&self) -> Option<Rule> {
        self.hardest_rule
    }

    /// Returns the index of the hardest rule in [`Rule::ALL`], if any rule
    /// fired.
    #[must_use]
    pub fn hardest_rule_index(&self) -> Option<usize> {
        self.hardest_rule.map(Rule::index)
    }

    /// Returns the sum of weights of every rule application.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Returns the number of solving iterations taken.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns rule application counts, aligned with [`Rule::ALL`].
    ///
    /// Rules that never fired have a count of `0`.
    #[must_use]
    pub const fn applications(&self) -> &[usize; Rule::COUNT] {
        &self.applications
    }

    /// Returns how many times the given rule fired.
    #[must_use]
    pub const fn count(&self, rule: Rule) -> usize {
        self.applications[rule.index()]
    }

    /// Returns `true` if any rule fired at least once.
    #[must_use]
    pub const fn has_progress(&self) -> bool {
        self.steps > 0
    }
}

/// Solves a puzzle with the ordered rule list and grades its difficulty.
///
/// Runs on a private copy of `puzzle`. Each iteration applies the first rule
/// in [`Rule::ALL`] order that fires, then restarts the sequence: placements
/// and eliminations both narrow candidates, which may expose new singles for
/// the cheaper rules. The loop halts when the grid is solved, when no rule
/// fires ("stuck" is a valid terminal classification, not an error), or at
/// the iteration ceiling.
///
/// Invalid or inconsistent grids never panic; they simply report
/// `solved == false`.
#[must_use]
pub fn solve_with_rules(puzzle: &DigitGrid) -> RuleSolveResult {
    let mut grid = CandidateGrid::from_grid(puzzle);
    let mut result = RuleSolveResult {
        solved: false,
        hardest_rule: None,
        total_score: 0,
        steps: 0,
        applications: [0; Rule::COUNT],
    };

    while !grid.is_solved() && result.steps < MAX_STEPS {
        let Some(rule) = Rule::ALL.into_iter().find(|rule| rule.apply(&mut grid)) else {
            break;
        };
        result.total_score += rule.weight();
        result.applications[rule.index()] += 1;
        result.hardest_rule = Some(result.hardest_rule.map_or(rule, |hardest| hardest.max(rule)));
        result.steps += 1;
    }

    result.solved = grid.is_solved();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_already_solved_grid_reports_zero_applications() {
        let grid = testing::grid(testing::SOLVED);
        let result = solve_with_rules(&grid);

        assert!(result.solved());
        assert_eq!(result.steps(), 0);
        assert_eq!(result.total_score(), 0);
        assert_eq!(result.hardest_rule(), None);
        assert_eq!(result.hardest_rule_index(), None);
        assert!(!result.has_progress());
    }

    #[test]
    fn test_naked_singles_only_puzzle() {
        // one cell removed per row, each uniquely determined by its row
        let grid = testing::grid(testing::NAKED_SINGLES_ONLY);
        let result = solve_with_rules(&grid);

        assert!(result.solved());
        assert_eq!(result.steps(), 9);
        assert_eq!(result.total_score(), 9);
        assert_eq!(result.hardest_rule(), Some(Rule::NakedSingle));
        assert_eq!(result.count(Rule::NakedSingle), 9);
        for rule in &Rule::ALL[1..] {
            assert_eq!(result.count(*rule), 0);
        }
    }

    #[test]
    fn test_classic_easy_puzzle_solves() {
        let grid = testing::grid(testing::CLASSIC_EASY);
        let result = solve_with_rules(&grid);

        assert!(result.solved());
        assert!(result.has_progress());
        // 51 empty cells, one placement each; elimination steps may add more
        assert!(result.steps() >= 51);
    }

    #[test]
    fn test_score_equals_weighted_count_sum() {
        for puzzle in [
            testing::CLASSIC_EASY,
            testing::NAKED_SINGLES_ONLY,
            testing::CLUES_17,
        ] {
            let result = solve_with_rules(&testing::grid(puzzle));
            let expected: u32 = Rule::ALL
                .iter()
                .map(|&rule| rule.weight() * u32::try_from(result.count(rule)).unwrap())
                .sum();
            assert_eq!(result.total_score(), expected);
            let steps: usize = result.applications().iter().sum();
            assert_eq!(result.steps(), steps);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        for puzzle in [testing::CLASSIC_EASY, testing::CLUES_17] {
            let grid = testing::grid(puzzle);
            assert_eq!(solve_with_rules(&grid), solve_with_rules(&grid));
        }
    }

    #[test]
    fn test_full_but_invalid_grid_reports_stuck() {
        let grid = testing::grid(testing::DUPLICATE_IN_ROW);
        let result = solve_with_rules(&grid);

        assert!(!result.solved());
        assert_eq!(result.steps(), 0);
        assert_eq!(result.hardest_rule(), None);
    }

    #[test]
    fn test_empty_grid_stops_quickly() {
        let result = solve_with_rules(&DigitGrid::new());

        // an empty grid has no forced singles and no pair structure
        assert!(!result.solved());
        assert_eq!(result.steps(), 0);
    }

    #[test]
    fn test_caller_grid_is_not_mutated() {
        let grid = testing::grid(testing::CLASSIC_EASY);
        let before = grid.clone();
        let _ = solve_with_rules(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_17_clue_classification_is_stable() {
        // a minimal 17-clue puzzle may or may not fall to these seven rules;
        // either way the classification must be identical across runs
        let grid = testing::grid(testing::CLUES_17);
        let first = solve_with_rules(&grid);
        let second = solve_with_rules(&grid);
        assert_eq!(first, second);
        if !first.solved() {
            // partial progress is still reported
            let counted: usize = first.applications().iter().sum();
            assert_eq!(first.steps(), counted);
        }
    }
}
