/// Scale for relative bounds: a `max_change` of 10_000 allows a 100% move.
pub const BPS_SCALE: u128 = 10_000;

/// @notice checks that the move from `from` to `to` stays inside the allowed band.
/// @param max_change absolute units, or bps of `from` when `is_relative` is set
/// @dev with `is_relative` and `from == 0` the band is empty: any non-zero `to` is rejected.
pub fn is_within_bound(from: u64, to: u64, max_change: u64, is_relative: bool) -> bool {
    let diff: u128 = from.abs_diff(to).into();

    let max_diff: u128 = if is_relative {
        // u64 * u64 always fits in u128
        u128::from(max_change) * u128::from(from) / BPS_SCALE
    } else {
        max_change.into()
    };

    diff <= max_diff
}

/// @notice one-directional variant: `to` must not be lower than `from`, and may exceed it
///         by at most `max_increase` (absolute units).
pub fn is_increase_within_bound(from: u64, to: u64, max_increase: u64) -> bool {
    to >= from && to - from <= max_increase
}

/// @notice cooldown predicate shared by every debounce class.
/// @dev `last_update == 0` means the class was never updated, so the first update is always allowed.
///      A clock that reads earlier than `last_update` never satisfies the delay.
pub fn is_debounce_respected(last_update: u64, now: u64, min_delay: u64) -> bool {
    if last_update == 0 {
        return true;
    }

    match now.checked_sub(last_update) {
        Some(elapsed) => elapsed > min_delay,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DAYS: u64 = 2 * 24 * 60 * 60;

    #[test]
    fn test_absolute_bound_matches_difference() {
        let cases: [(u64, u64, u64); 8] = [
            (100, 200, 100),
            (100, 201, 100),
            (100, 0, 100),
            (200, 99, 100),
            (0, 0, 0),
            (5, 5, 0),
            (5, 6, 0),
            (u64::MAX, 0, u64::MAX),
        ];

        for (from, to, max_change) in cases {
            let expected = from.abs_diff(to) <= max_change;
            assert_eq!(is_within_bound(from, to, max_change, false), expected);
        }
    }

    #[test]
    fn test_relative_bound_uses_bps_of_current_value() {
        // 10% of 1_000 is 100
        assert!(is_within_bound(1_000, 1_100, 1_000, true));
        assert!(is_within_bound(1_000, 900, 1_000, true));
        assert!(!is_within_bound(1_000, 1_101, 1_000, true));
        assert!(!is_within_bound(1_000, 899, 1_000, true));

        // 100% of u64::MAX does not overflow
        assert!(is_within_bound(u64::MAX, 0, 10_000, true));
    }

    #[test]
    fn test_relative_bound_from_zero_rejects_any_move() {
        for max_change in [1_u64, 10_000, u64::MAX] {
            assert!(is_within_bound(0, 0, max_change, true));
            assert!(!is_within_bound(0, 1, max_change, true));
            assert!(!is_within_bound(0, u64::MAX, max_change, true));
        }
    }

    #[test]
    fn test_increase_bound_is_one_directional() {
        assert!(is_increase_within_bound(100, 200, 100));
        assert!(is_increase_within_bound(100, 100, 100));
        assert!(!is_increase_within_bound(100, 201, 100));
        assert!(!is_increase_within_bound(100, 99, 100));
        assert!(!is_increase_within_bound(0, 1, 0));
    }

    #[test]
    fn test_debounce_requires_strictly_more_than_delay() {
        let last = 1_700_000_000;

        assert!(is_debounce_respected(0, 0, TWO_DAYS));
        assert!(is_debounce_respected(0, last, TWO_DAYS));

        assert!(!is_debounce_respected(last, last, TWO_DAYS));
        assert!(!is_debounce_respected(last, last + TWO_DAYS, TWO_DAYS));
        assert!(is_debounce_respected(last, last + TWO_DAYS + 1, TWO_DAYS));

        // clock behind the stored stamp
        assert!(!is_debounce_respected(last, last - 1, TWO_DAYS));
    }
}
