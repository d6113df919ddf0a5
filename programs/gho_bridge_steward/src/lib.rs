use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod invokes;
pub mod module;
pub mod state;

use crate::state::*;
use library::structs::AddressBool;

#[cfg(feature = "staging")]
declare_id!("7akHjbJgu7T1bkozCgYnUGnVkGs3pLWmi7ESyJL33mGp");

#[cfg(not(feature = "staging"))]
declare_id!("DpesTBJBoEwamTyzGSWCgUbPsTxJt6oAnQXP5jF6kQYF");

#[program]
pub mod gho_bridge_steward {
    use super::*;

    /***********************************|
    |           Owner Module            |
    |__________________________________*/

    pub fn init_gho_bridge_steward(
        ctx: Context<InitGhoBridgeSteward>,
        owner: Pubkey,
        risk_council: Pubkey,
        gho_token: Pubkey,
        gho_token_pool: Pubkey,
        bridge_limit_enabled: bool,
    ) -> Result<()> {
        module::admin::init_gho_bridge_steward(
            ctx,
            owner,
            risk_council,
            gho_token,
            gho_token_pool,
            bridge_limit_enabled,
        )
    }

    pub fn transfer_ownership(ctx: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
        module::admin::transfer_ownership(ctx, new_owner)
    }

    pub fn set_controlled_facilitators(
        ctx: Context<UpdateOwnerConfig>,
        facilitator_status: Vec<AddressBool>,
    ) -> Result<()> {
        module::admin::set_controlled_facilitators(ctx, facilitator_status)
    }

    /***********************************|
    |        Risk Council Module        |
    |__________________________________*/

    pub fn update_facilitator_bucket_capacity(
        ctx: Context<UpdateFacilitatorBucket>,
        facilitator: Pubkey,
        new_bucket_capacity: u64,
    ) -> Result<()> {
        module::council::update_facilitator_bucket_capacity(ctx, facilitator, new_bucket_capacity)
    }

    pub fn update_bridge_limit(ctx: Context<UpdateBridgeLimit>, new_bridge_limit: u64) -> Result<()> {
        module::council::update_bridge_limit(ctx, new_bridge_limit)
    }

    pub fn update_rate_limit(
        ctx: Context<UpdateRateLimit>,
        remote_chain_selector: u64,
        outbound_config: RateLimitConfig,
        inbound_config: RateLimitConfig,
    ) -> Result<()> {
        module::council::update_rate_limit(ctx, remote_chain_selector, outbound_config, inbound_config)
    }

    /***********************************|
    |           View Module             |
    |__________________________________*/

    pub fn get_ccip_timelocks(ctx: Context<ReadGhoBridgeSteward>) -> Result<CcipDebounce> {
        module::admin::get_ccip_timelocks(ctx)
    }

    pub fn get_controlled_facilitators(ctx: Context<ReadGhoBridgeSteward>) -> Result<Vec<Pubkey>> {
        module::admin::get_controlled_facilitators(ctx)
    }

    pub fn is_controlled_facilitator(
        ctx: Context<ReadGhoBridgeSteward>,
        facilitator: Pubkey,
    ) -> Result<bool> {
        module::admin::is_controlled_facilitator(ctx, facilitator)
    }

    pub fn get_facilitator_bucket_capacity_timelock(
        ctx: Context<ReadGhoBridgeSteward>,
        facilitator: Pubkey,
    ) -> Result<u64> {
        module::admin::get_facilitator_bucket_capacity_timelock(ctx, facilitator)
    }
}
