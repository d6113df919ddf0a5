use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod invokes;
pub mod module;
pub mod state;
pub mod validate;

use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("Bry9p2WbBaNr2FSYK6fr8T3NUuaTGEDfe9jjkgt9yf9Q");

#[cfg(not(feature = "staging"))]
declare_id!("3EBxfChGV1VzofxdgFAAX3dLyDX2eGroqBz5Q3BQ4EGt");

#[program]
pub mod gho_steward {
    use super::*;

    /***********************************|
    |           Owner Module            |
    |__________________________________*/

    pub fn init_gho_steward(
        ctx: Context<InitGhoSteward>,
        owner: Pubkey,
        pool_addresses_provider: Pubkey,
        pool_data_provider: Pubkey,
        gho_token: Pubkey,
        risk_council: Pubkey,
        borrow_rate_config: BorrowRateConfig,
    ) -> Result<()> {
        module::admin::init_gho_steward(
            ctx,
            owner,
            pool_addresses_provider,
            pool_data_provider,
            gho_token,
            risk_council,
            borrow_rate_config,
        )
    }

    pub fn transfer_ownership(ctx: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
        module::admin::transfer_ownership(ctx, new_owner)
    }

    pub fn set_borrow_rate_config(
        ctx: Context<UpdateOwnerConfig>,
        borrow_rate_config: BorrowRateConfig,
    ) -> Result<()> {
        module::admin::set_borrow_rate_config(ctx, borrow_rate_config)
    }

    /***********************************|
    |        Risk Council Module        |
    |__________________________________*/

    pub fn update_gho_borrow_rate(
        ctx: Context<UpdateGhoBorrowRate>,
        new_rate_data: InterestRateData,
    ) -> Result<()> {
        module::council::update_gho_borrow_rate(ctx, new_rate_data)
    }

    pub fn update_gho_borrow_cap(ctx: Context<UpdateGhoCaps>, new_borrow_cap: u64) -> Result<()> {
        module::council::update_gho_borrow_cap(ctx, new_borrow_cap)
    }

    pub fn update_gho_supply_cap(ctx: Context<UpdateGhoCaps>, new_supply_cap: u64) -> Result<()> {
        module::council::update_gho_supply_cap(ctx, new_supply_cap)
    }

    /***********************************|
    |           View Module             |
    |__________________________________*/

    pub fn get_borrow_rate_config(ctx: Context<ReadGhoSteward>) -> Result<BorrowRateConfig> {
        module::admin::get_borrow_rate_config(ctx)
    }

    pub fn get_gho_timelocks(ctx: Context<ReadGhoSteward>) -> Result<GhoDebounce> {
        module::admin::get_gho_timelocks(ctx)
    }
}

#[cfg(test)]
mod tests;
