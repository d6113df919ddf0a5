use anchor_lang::prelude::*;

/// Rate curve of the GHO reserve as the rate strategy reports it, all values in bps (1e4 = 100%).
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterestRateData {
    pub optimal_usage_ratio: u16,
    pub base_variable_borrow_rate: u32,
    pub variable_rate_slope1: u32,
    pub variable_rate_slope2: u32,
}

/// Maximum absolute change per rate curve coefficient, in the coefficient's own unit.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorrowRateConfig {
    pub optimal_usage_ratio_max_change: u16,
    pub base_variable_borrow_rate_max_change: u32,
    pub variable_rate_slope1_max_change: u32,
    pub variable_rate_slope2_max_change: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveCaps {
    pub borrow_cap: u64,
    pub supply_cap: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhoDebounceClass {
    BorrowRate,
    BorrowCap,
    SupplyCap,
    RiskConfig,
}

pub const GHO_DEBOUNCE_CLASSES: usize = 4;

/// Unix timestamp of the last accepted update, per parameter class. 0 = never updated.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GhoDebounce {
    pub last_updates: [u64; GHO_DEBOUNCE_CLASSES],
}

impl GhoDebounce {
    pub fn last_update(&self, class: GhoDebounceClass) -> u64 {
        self.last_updates[class as usize]
    }

    pub fn stamp(&mut self, class: GhoDebounceClass, now: u64) {
        self.last_updates[class as usize] = now;
    }
}
