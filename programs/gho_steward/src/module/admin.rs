use anchor_lang::prelude::*;

use crate::{errors::ErrorCodes, state::*};
use library::math::casting::*;

pub fn init_gho_steward(
    context: Context<InitGhoSteward>,
    owner: Pubkey,
    pool_addresses_provider: Pubkey,
    pool_data_provider: Pubkey,
    gho_token: Pubkey,
    risk_council: Pubkey,
    borrow_rate_config: BorrowRateConfig,
) -> Result<()> {
    context.accounts.gho_steward.init(
        owner,
        pool_addresses_provider,
        pool_data_provider,
        gho_token,
        risk_council,
        borrow_rate_config,
        context.bumps.gho_steward,
    )
}

pub fn transfer_ownership(context: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
    let owner = context.accounts.owner.key();

    context
        .accounts
        .gho_steward
        .transfer_ownership(&owner, new_owner)
}

pub fn set_borrow_rate_config(
    context: Context<UpdateOwnerConfig>,
    borrow_rate_config: BorrowRateConfig,
) -> Result<()> {
    let owner = context.accounts.owner.key();

    if owner != context.accounts.gho_steward.owner {
        // second check on top of context.rs to be extra sure
        return Err(ErrorCodes::Unauthorized.into());
    }

    let now: u64 = Clock::get()?.unix_timestamp.cast()?;

    context
        .accounts
        .gho_steward
        .set_borrow_rate_config(&owner, now, borrow_rate_config)
}

pub fn get_borrow_rate_config(context: Context<ReadGhoSteward>) -> Result<BorrowRateConfig> {
    Ok(context.accounts.gho_steward.borrow_rate_config)
}

pub fn get_gho_timelocks(context: Context<ReadGhoSteward>) -> Result<GhoDebounce> {
    Ok(context.accounts.gho_steward.gho_debounce)
}
