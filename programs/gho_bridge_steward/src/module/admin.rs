use anchor_lang::prelude::*;

use crate::{errors::ErrorCodes, state::*};
use library::{math::casting::*, structs::AddressBool};

pub fn init_gho_bridge_steward(
    context: Context<InitGhoBridgeSteward>,
    owner: Pubkey,
    risk_council: Pubkey,
    gho_token: Pubkey,
    gho_token_pool: Pubkey,
    bridge_limit_enabled: bool,
) -> Result<()> {
    context.accounts.gho_bridge_steward.init(
        owner,
        risk_council,
        gho_token,
        gho_token_pool,
        bridge_limit_enabled,
        context.bumps.gho_bridge_steward,
    )
}

pub fn transfer_ownership(context: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
    let owner = context.accounts.owner.key();

    context
        .accounts
        .gho_bridge_steward
        .transfer_ownership(&owner, new_owner)
}

pub fn set_controlled_facilitators(
    context: Context<UpdateOwnerConfig>,
    facilitator_status: Vec<AddressBool>,
) -> Result<()> {
    let owner = context.accounts.owner.key();
    let now: u64 = Clock::get()?.unix_timestamp.cast()?;

    if owner != context.accounts.gho_bridge_steward.owner {
        // second check on top of context.rs to be extra sure
        return Err(ErrorCodes::Unauthorized.into());
    }

    context
        .accounts
        .gho_bridge_steward
        .set_controlled_facilitators(&owner, now, facilitator_status)
}

pub fn get_ccip_timelocks(context: Context<ReadGhoBridgeSteward>) -> Result<CcipDebounce> {
    Ok(context.accounts.gho_bridge_steward.ccip_debounce)
}

pub fn get_controlled_facilitators(context: Context<ReadGhoBridgeSteward>) -> Result<Vec<Pubkey>> {
    Ok(context.accounts.gho_bridge_steward.get_controlled_facilitators())
}

pub fn is_controlled_facilitator(
    context: Context<ReadGhoBridgeSteward>,
    facilitator: Pubkey,
) -> Result<bool> {
    Ok(context
        .accounts
        .gho_bridge_steward
        .is_controlled_facilitator(&facilitator))
}

pub fn get_facilitator_bucket_capacity_timelock(
    context: Context<ReadGhoBridgeSteward>,
    facilitator: Pubkey,
) -> Result<u64> {
    Ok(context
        .accounts
        .gho_bridge_steward
        .get_facilitator_bucket_capacity_timelock(&facilitator))
}
