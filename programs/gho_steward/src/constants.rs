/// @dev minimum delay between two updates of the same parameter class
pub const MINIMUM_DELAY: u64 = 2 * 24 * 60 * 60; // 2 days

/// @dev ceiling for base rate + slope1 + slope2, in bps (1e4 = 100%)
pub const GHO_BORROW_RATE_MAX: u64 = 2_500; // 25%
