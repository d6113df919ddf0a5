use anchor_lang::prelude::*;

use crate::state::*;

#[event]
pub struct LogSetBorrowRateConfig {
    pub owner: Pubkey,
    pub borrow_rate_config: BorrowRateConfig,
}

#[event]
pub struct LogUpdateGhoBorrowRate {
    pub risk_council: Pubkey,
    pub asset: Pubkey,
    pub old_rate_data: InterestRateData,
    pub new_rate_data: InterestRateData,
}

#[event]
pub struct LogUpdateGhoBorrowCap {
    pub risk_council: Pubkey,
    pub asset: Pubkey,
    pub old_borrow_cap: u64,
    pub new_borrow_cap: u64,
}

#[event]
pub struct LogUpdateGhoSupplyCap {
    pub risk_council: Pubkey,
    pub asset: Pubkey,
    pub old_supply_cap: u64,
    pub new_supply_cap: u64,
}

#[event]
pub struct LogTransferOwnership {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
