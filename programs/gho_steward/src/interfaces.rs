use anchor_lang::prelude::*;

use crate::state::{InterestRateData, ReserveCaps};

pub trait PoolAddressesProvider {
    fn get_pool_configurator(&self) -> Result<Pubkey>;
}

pub trait PoolDataProvider {
    fn get_reserve_caps(&self, asset: &Pubkey) -> Result<ReserveCaps>;

    /// Returns the default key when no strategy is set for `asset`.
    fn get_interest_rate_strategy_address(&self, asset: &Pubkey) -> Result<Pubkey>;
}

pub trait RateStrategy {
    fn get_interest_rate_data_bps(
        &self,
        strategy: &Pubkey,
        asset: &Pubkey,
    ) -> Result<InterestRateData>;
}

/// Writes to the pool. The steward must be registered as risk admin on the pool side.
pub trait PoolConfigurator {
    fn set_borrow_cap(&self, configurator: &Pubkey, asset: &Pubkey, borrow_cap: u64) -> Result<()>;

    fn set_supply_cap(&self, configurator: &Pubkey, asset: &Pubkey, supply_cap: u64) -> Result<()>;

    fn set_reserve_interest_rate_data(
        &self,
        configurator: &Pubkey,
        asset: &Pubkey,
        rate_data: Vec<u8>,
    ) -> Result<()>;
}

/// Everything a GHO reserve update touches.
pub trait GhoPool: PoolAddressesProvider + PoolDataProvider + RateStrategy + PoolConfigurator {}

impl<T> GhoPool for T where T: PoolAddressesProvider + PoolDataProvider + RateStrategy + PoolConfigurator {}
