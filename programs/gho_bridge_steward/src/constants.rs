/// @dev minimum delay between two updates of the same parameter class
pub const MINIMUM_DELAY: u64 = 2 * 24 * 60 * 60; // 2 days

pub const MAX_CONTROLLED_FACILITATORS: usize = 10;
