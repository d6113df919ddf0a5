use anchor_lang::prelude::*;

use crate::constants::MINIMUM_DELAY;
use crate::errors::ErrorCodes;
use crate::events::*;
use crate::interfaces::GhoPool;
use crate::state::structs::*;
use crate::validate::{validate_borrow_rate_update, validate_cap_update};

use library::errors::ErrorCodes as LibraryErrorCodes;
use library::math::bounds::is_debounce_respected;

impl InterestRateData {
    /// Borsh bytes handed to the configurator, which decodes them for the rate strategy.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut encoded = Vec::with_capacity(Self::INIT_SPACE);
        self.serialize(&mut encoded)
            .map_err(|_| error!(LibraryErrorCodes::LibraryInvalidInstructionData))?;
        Ok(encoded)
    }
}

#[account]
#[derive(InitSpace, Default)]
pub struct GhoSteward {
    pub owner: Pubkey, // Can change the borrow rate config, can be Governance account or multisig

    // Immutable after init
    pub pool_addresses_provider: Pubkey,
    pub pool_data_provider: Pubkey,
    pub gho_token: Pubkey,
    pub risk_council: Pubkey,

    pub borrow_rate_config: BorrowRateConfig,
    pub gho_debounce: GhoDebounce,

    pub bump: u8,
}

impl GhoSteward {
    pub fn init(
        &mut self,
        owner: Pubkey,
        pool_addresses_provider: Pubkey,
        pool_data_provider: Pubkey,
        gho_token: Pubkey,
        risk_council: Pubkey,
        borrow_rate_config: BorrowRateConfig,
        bump: u8,
    ) -> Result<()> {
        let default_pubkey: Pubkey = Pubkey::default();

        if owner == default_pubkey
            || pool_addresses_provider == default_pubkey
            || pool_data_provider == default_pubkey
            || gho_token == default_pubkey
            || risk_council == default_pubkey
        {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        self.owner = owner;
        self.pool_addresses_provider = pool_addresses_provider;
        self.pool_data_provider = pool_data_provider;
        self.gho_token = gho_token;
        self.risk_council = risk_council;
        self.borrow_rate_config = borrow_rate_config;
        self.gho_debounce = GhoDebounce::default();
        self.bump = bump;

        Ok(())
    }

    pub fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCodes::Unauthorized);
        Ok(())
    }

    pub fn only_risk_council(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.risk_council, ErrorCodes::Unauthorized);
        Ok(())
    }

    pub fn check_debounce(&self, class: GhoDebounceClass, now: u64) -> Result<()> {
        if !is_debounce_respected(self.gho_debounce.last_update(class), now, MINIMUM_DELAY) {
            return Err(ErrorCodes::DebounceNotRespected.into());
        }

        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.only_owner(caller)?;

        if new_owner == Pubkey::default() {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        let previous_owner = self.owner;
        self.owner = new_owner;

        emit!(LogTransferOwnership {
            previous_owner,
            new_owner,
        });

        Ok(())
    }

    /// @notice overwrites the max change thresholds used by `update_gho_borrow_rate`. Only callable by owner.
    /// @dev thresholds themselves are not bounded, owner is trusted.
    pub fn set_borrow_rate_config(
        &mut self,
        caller: &Pubkey,
        now: u64,
        borrow_rate_config: BorrowRateConfig,
    ) -> Result<()> {
        self.only_owner(caller)?;
        self.check_debounce(GhoDebounceClass::RiskConfig, now)?;

        self.borrow_rate_config = borrow_rate_config;
        self.gho_debounce.stamp(GhoDebounceClass::RiskConfig, now);

        emit!(LogSetBorrowRateConfig {
            owner: *caller,
            borrow_rate_config,
        });

        Ok(())
    }

    /// @notice updates the GHO reserve rate curve. Only callable by risk council.
    ///         Each coefficient may move by at most its configured max change and
    ///         base + slope1 + slope2 must stay at or below GHO_BORROW_RATE_MAX.
    pub fn update_gho_borrow_rate<P: GhoPool>(
        &mut self,
        pool: &P,
        caller: &Pubkey,
        now: u64,
        new_rate_data: InterestRateData,
    ) -> Result<()> {
        self.only_risk_council(caller)?;
        self.check_debounce(GhoDebounceClass::BorrowRate, now)?;

        let strategy = pool.get_interest_rate_strategy_address(&self.gho_token)?;
        if strategy == Pubkey::default() {
            return Err(ErrorCodes::StrategyNotFound.into());
        }

        let current_rate_data = pool.get_interest_rate_data_bps(&strategy, &self.gho_token)?;

        validate_borrow_rate_update(&current_rate_data, &new_rate_data, &self.borrow_rate_config)?;

        let configurator = pool.get_pool_configurator()?;
        pool.set_reserve_interest_rate_data(&configurator, &self.gho_token, new_rate_data.encode()?)?;

        self.gho_debounce.stamp(GhoDebounceClass::BorrowRate, now);

        emit!(LogUpdateGhoBorrowRate {
            risk_council: *caller,
            asset: self.gho_token,
            old_rate_data: current_rate_data,
            new_rate_data,
        });

        Ok(())
    }

    /// @notice updates the GHO borrow cap, by at most 100% of the current cap. Only callable by risk council.
    pub fn update_gho_borrow_cap<P: GhoPool>(
        &mut self,
        pool: &P,
        caller: &Pubkey,
        now: u64,
        new_borrow_cap: u64,
    ) -> Result<()> {
        self.only_risk_council(caller)?;
        self.check_debounce(GhoDebounceClass::BorrowCap, now)?;

        let current_borrow_cap = pool.get_reserve_caps(&self.gho_token)?.borrow_cap;

        validate_cap_update(
            current_borrow_cap,
            new_borrow_cap,
            ErrorCodes::InvalidBorrowCapUpdate,
        )?;

        let configurator = pool.get_pool_configurator()?;
        pool.set_borrow_cap(&configurator, &self.gho_token, new_borrow_cap)?;

        self.gho_debounce.stamp(GhoDebounceClass::BorrowCap, now);

        emit!(LogUpdateGhoBorrowCap {
            risk_council: *caller,
            asset: self.gho_token,
            old_borrow_cap: current_borrow_cap,
            new_borrow_cap,
        });

        Ok(())
    }

    /// @notice updates the GHO supply cap, by at most 100% of the current cap. Only callable by risk council.
    pub fn update_gho_supply_cap<P: GhoPool>(
        &mut self,
        pool: &P,
        caller: &Pubkey,
        now: u64,
        new_supply_cap: u64,
    ) -> Result<()> {
        self.only_risk_council(caller)?;
        self.check_debounce(GhoDebounceClass::SupplyCap, now)?;

        let current_supply_cap = pool.get_reserve_caps(&self.gho_token)?.supply_cap;

        validate_cap_update(
            current_supply_cap,
            new_supply_cap,
            ErrorCodes::InvalidSupplyCapUpdate,
        )?;

        let configurator = pool.get_pool_configurator()?;
        pool.set_supply_cap(&configurator, &self.gho_token, new_supply_cap)?;

        self.gho_debounce.stamp(GhoDebounceClass::SupplyCap, now);

        emit!(LogUpdateGhoSupplyCap {
            risk_council: *caller,
            asset: self.gho_token,
            old_supply_cap: current_supply_cap,
            new_supply_cap,
        });

        Ok(())
    }
}
