use strum::{Display as StrumDisplay, EnumIter};

/// Where a card sits on the ring relative to the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum RelativePosition {
    Current,
    Next,
    Previous,
    Hidden,
}

/// Circular distance from `active_index` to `index`, always in `0..total`.
pub fn relative_offset(index: usize, active_index: usize, total: usize) -> usize {
    debug_assert!(total > 0, "carousel must hold at least one card");
    (index % total + total - active_index % total) % total
}

/// Maps a card onto the ring. Index 0 neighbours both index 1 and
/// `total - 1`, so the carousel wraps without special cases.
///
/// With two cards the other card is one step away in both directions; `Next`
/// is checked first and wins.
pub fn resolve(index: usize, active_index: usize, total: usize) -> RelativePosition {
    match relative_offset(index, active_index, total) {
        0 => RelativePosition::Current,
        1 => RelativePosition::Next,
        r if r == total - 1 => RelativePosition::Previous,
        _ => RelativePosition::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RelativePosition::*;

    #[test]
    fn test_three_cards_from_first() {
        assert_eq!(resolve(0, 0, 3), Current);
        assert_eq!(resolve(1, 0, 3), Next);
        assert_eq!(resolve(2, 0, 3), Previous);
    }

    #[test]
    fn test_three_cards_rotated() {
        assert_eq!(resolve(0, 1, 3), Previous);
        assert_eq!(resolve(1, 1, 3), Current);
        assert_eq!(resolve(2, 1, 3), Next);
    }

    #[test]
    fn test_wraps_past_last_card() {
        assert_eq!(resolve(0, 2, 3), Next);
        assert_eq!(resolve(1, 2, 3), Previous);
    }

    #[test]
    fn test_active_card_is_always_current() {
        for total in 1..=8 {
            for active in 0..total {
                assert_eq!(resolve(active, active, total), Current);
            }
        }
    }

    #[test]
    fn test_single_card_is_current() {
        assert_eq!(resolve(0, 0, 1), Current);
    }

    #[test]
    fn test_two_cards_next_wins() {
        assert_eq!(resolve(1, 0, 2), Next);
        assert_eq!(resolve(0, 1, 2), Next);
    }

    #[test]
    fn test_ring_has_one_of_each_neighbour() {
        for total in 3..=8 {
            for active in 0..total {
                let positions: Vec<_> = (0..total).map(|i| resolve(i, active, total)).collect();
                let count = |p| positions.iter().filter(|&&x| x == p).count();
                assert_eq!(count(Current), 1);
                assert_eq!(count(Next), 1);
                assert_eq!(count(Previous), 1);
                assert_eq!(count(Hidden), total - 3);
            }
        }
    }

    #[test]
    fn test_five_cards_hide_far_side() {
        assert_eq!(resolve(2, 0, 5), Hidden);
        assert_eq!(resolve(3, 0, 5), Hidden);
        assert_eq!(resolve(4, 0, 5), Previous);
    }
}
