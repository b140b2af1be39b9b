//! Shared puzzle fixtures for solver tests.

use sudograde_core::DigitGrid;

/// A canonical completed, valid grid.
pub(crate) const SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// [`SOLVED`] with one cell removed per row along the main diagonal; every
/// empty cell is the only gap in its row, so the whole puzzle falls to
/// naked singles alone.
pub(crate) const NAKED_SINGLES_ONLY: &str = "
    _34 678 912
    6_2 195 348
    19_ 342 567
    859 _61 423
    426 8_3 791
    713 92_ 856
    961 537 _84
    287 419 6_5
    345 286 17_
";

/// The widely reproduced 30-clue example puzzle; its solution is [`SOLVED`].
pub(crate) const CLASSIC_EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// A published minimal 17-clue puzzle (Royle collection).
pub(crate) const CLUES_17: &str =
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

/// [`SOLVED`] with the first cell's digit duplicated into its own row:
/// full but invalid.
pub(crate) const DUPLICATE_IN_ROW: &str = "
    534 675 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// Parses a fixture string, panicking on malformed fixtures.
pub(crate) fn grid(s: &str) -> DigitGrid {
    s.parse().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        assert!(grid(SOLVED).is_solved());
        assert!(!grid(DUPLICATE_IN_ROW).is_solved());
        assert_eq!(grid(NAKED_SINGLES_ONLY).filled_count(), 72);
        assert_eq!(grid(CLASSIC_EASY).filled_count(), 30);
        assert_eq!(grid(CLUES_17).filled_count(), 17);
    }
}
