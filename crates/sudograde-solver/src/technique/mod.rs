//! Solving rules and their application order.
//!
//! The seven rules are a fixed, ordered list: the order defines both the
//! search priority (easier rules are tried first) and the tie-break for the
//! "hardest rule used" classification. [`Rule::ALL`] is the single source of
//! truth for both; weights ride along on the variants.

use std::fmt::{self, Display};

use sudograde_core::{CandidateGrid, Digit, Position};

pub(crate) mod pairs;
pub(crate) mod singles;

/// A solving rule, ordered from easiest to hardest.
///
/// Rules 1-4 are placement rules: finding one places a digit and propagates
/// the elimination to its peers. Rules 5-7 are elimination rules: they only
/// prune candidate sets, and the solver restarts from [`Rule::NakedSingle`]
/// after any successful pruning, since newly narrowed candidates may expose
/// new singles.
///
/// The derived ordering follows declaration order, so
/// `a.max(b)` yields the harder of two rules.
///
/// # Examples
///
/// ```
/// use sudograde_solver::Rule;
///
/// assert_eq!(Rule::ALL.len(), 7);
/// assert_eq!(Rule::NakedSingle.weight(), 1);
/// assert!(Rule::HiddenPairs > Rule::PointingPairs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// An empty cell with exactly one remaining candidate.
    NakedSingle,
    /// A digit with exactly one legal cell within a row.
    HiddenSingleRow,
    /// A digit with exactly one legal cell within a column.
    HiddenSingleCol,
    /// A digit with exactly one legal cell within a 3×3 box.
    HiddenSingleBox,
    /// Two cells in a unit sharing the same two-candidate set; those digits
    /// are removed from the rest of the unit.
    NakedPairs,
    /// All candidates of a digit in a box confined to one row or column;
    /// the digit is removed from that line outside the box.
    PointingPairs,
    /// Two digits confined to the same two cells of a unit; all other
    /// candidates are removed from those cells.
    HiddenPairs,
}

impl Rule {
    /// All rules in application-priority order (easiest first).
    pub const ALL: [Self; 7] = [
        Self::NakedSingle,
        Self::HiddenSingleRow,
        Self::HiddenSingleCol,
        Self::HiddenSingleBox,
        Self::NakedPairs,
        Self::PointingPairs,
        Self::HiddenPairs,
    ];

    /// Number of rules.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the difficulty weight of this rule.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::NakedSingle => 1,
            Self::HiddenSingleRow | Self::HiddenSingleCol | Self::HiddenSingleBox => 2,
            Self::NakedPairs => 4,
            Self::PointingPairs => 5,
            Self::HiddenPairs => 6,
        }
    }

    /// Returns the display name of this rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingle => "Naked Single",
            Self::HiddenSingleRow => "Hidden Single (row)",
            Self::HiddenSingleCol => "Hidden Single (col)",
            Self::HiddenSingleBox => "Hidden Single (box)",
            Self::NakedPairs => "Naked Pairs",
            Self::PointingPairs => "Pointing Pairs",
            Self::HiddenPairs => "Hidden Pairs",
        }
    }

    /// Returns the position of this rule in [`Rule::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Applies this rule once to the candidate state.
    ///
    /// Placement rules place the first matching digit (in scan order) and
    /// propagate; elimination rules prune candidates and stop at the first
    /// unit-level change. Returns `true` if the grid changed.
    pub fn apply(self, grid: &mut CandidateGrid) -> bool {
        let placement: Option<(Position, Digit)> = match self {
            Self::NakedSingle => singles::find_naked_single(grid),
            Self::HiddenSingleRow => singles::find_hidden_single_row(grid),
            Self::HiddenSingleCol => singles::find_hidden_single_col(grid),
            Self::HiddenSingleBox => singles::find_hidden_single_box(grid),
            Self::NakedPairs => return pairs::apply_naked_pairs(grid),
            Self::PointingPairs => return pairs::apply_pointing_pairs(grid),
            Self::HiddenPairs => return pairs::apply_hidden_pairs(grid),
        };
        match placement {
            Some((pos, digit)) => {
                grid.place_and_update(pos, digit);
                true
            }
            None => false,
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
