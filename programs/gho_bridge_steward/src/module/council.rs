use anchor_lang::prelude::*;

use crate::state::*;
use library::math::casting::*;

pub fn update_facilitator_bucket_capacity(
    context: Context<UpdateFacilitatorBucket>,
    facilitator: Pubkey,
    new_bucket_capacity: u64,
) -> Result<()> {
    let now: u64 = Clock::get()?.unix_timestamp.cast()?;
    let risk_council = context.accounts.risk_council.key();
    let registry = context.accounts.get_gho_token_accounts();

    context.accounts.gho_bridge_steward.update_facilitator_bucket_capacity(
        &registry,
        &risk_council,
        now,
        facilitator,
        new_bucket_capacity,
    )
}

pub fn update_bridge_limit(context: Context<UpdateBridgeLimit>, new_bridge_limit: u64) -> Result<()> {
    let now: u64 = Clock::get()?.unix_timestamp.cast()?;
    let risk_council = context.accounts.risk_council.key();
    let pool = context.accounts.get_token_pool_accounts();

    context
        .accounts
        .gho_bridge_steward
        .update_bridge_limit(&pool, &risk_council, now, new_bridge_limit)
}

pub fn update_rate_limit(
    context: Context<UpdateRateLimit>,
    remote_chain_selector: u64,
    outbound_config: RateLimitConfig,
    inbound_config: RateLimitConfig,
) -> Result<()> {
    let now: u64 = Clock::get()?.unix_timestamp.cast()?;
    let risk_council = context.accounts.risk_council.key();
    let pool = context.accounts.get_token_pool_accounts();

    context.accounts.gho_bridge_steward.update_rate_limit(
        &pool,
        &risk_council,
        now,
        remote_chain_selector,
        outbound_config,
        inbound_config,
    )
}
