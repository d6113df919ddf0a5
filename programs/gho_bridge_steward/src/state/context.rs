use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::invokes::{GhoTokenCpiAccounts, TokenPoolCpiAccounts};
use crate::state::seeds::*;
use crate::state::state::*;

#[derive(Accounts)]
pub struct InitGhoBridgeSteward<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + GhoBridgeSteward::INIT_SPACE,
        seeds = [GHO_BRIDGE_STEWARD_SEED],
        bump,
    )]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateOwnerConfig<'info> {
    #[account(address = gho_bridge_steward.owner @ ErrorCodes::Unauthorized)]
    pub owner: Signer<'info>,

    #[account(mut, seeds = [GHO_BRIDGE_STEWARD_SEED], bump = gho_bridge_steward.bump)]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,
}

#[derive(Accounts)]
pub struct ReadGhoBridgeSteward<'info> {
    #[account(seeds = [GHO_BRIDGE_STEWARD_SEED], bump = gho_bridge_steward.bump)]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,
}

#[derive(Accounts)]
pub struct UpdateFacilitatorBucket<'info> {
    #[account(address = gho_bridge_steward.risk_council @ ErrorCodes::Unauthorized)]
    pub risk_council: Signer<'info>,

    #[account(mut, seeds = [GHO_BRIDGE_STEWARD_SEED], bump = gho_bridge_steward.bump)]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,

    /// CHECK: address checked against the steward, data read by its owner program
    #[account(
        address = gho_bridge_steward.gho_token @ ErrorCodes::InvalidGhoToken,
        owner = gho_token_program.key() @ ErrorCodes::InvalidGhoToken
    )]
    pub gho_token: UncheckedAccount<'info>,

    /// CHECK: owner of gho_token
    #[account(executable)]
    pub gho_token_program: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: This will be checked during gho token invoke
    pub facilitator_bucket: UncheckedAccount<'info>,
}

impl<'info> UpdateFacilitatorBucket<'info> {
    pub fn get_gho_token_accounts(&self) -> GhoTokenCpiAccounts<'info> {
        GhoTokenCpiAccounts {
            gho_bridge_steward: self.gho_bridge_steward.to_account_info(),
            gho_bridge_steward_bump: self.gho_bridge_steward.bump,
            gho_token: self.gho_token.to_account_info(),
            gho_token_program: self.gho_token_program.to_account_info(),
            facilitator_bucket: self.facilitator_bucket.to_account_info(),
        }
    }
}

#[derive(Accounts)]
pub struct UpdateBridgeLimit<'info> {
    #[account(address = gho_bridge_steward.risk_council @ ErrorCodes::Unauthorized)]
    pub risk_council: Signer<'info>,

    #[account(mut, seeds = [GHO_BRIDGE_STEWARD_SEED], bump = gho_bridge_steward.bump)]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,

    #[account(
        mut,
        address = gho_bridge_steward.gho_token_pool @ ErrorCodes::InvalidTokenPool,
        owner = token_pool_program.key() @ ErrorCodes::InvalidTokenPool
    )]
    /// CHECK: address checked against the steward
    pub gho_token_pool: UncheckedAccount<'info>,

    /// CHECK: owner of gho_token_pool
    #[account(executable)]
    pub token_pool_program: UncheckedAccount<'info>,
}

impl<'info> UpdateBridgeLimit<'info> {
    pub fn get_token_pool_accounts(&self) -> TokenPoolCpiAccounts<'info> {
        TokenPoolCpiAccounts {
            gho_bridge_steward: self.gho_bridge_steward.to_account_info(),
            gho_bridge_steward_bump: self.gho_bridge_steward.bump,
            gho_token_pool: self.gho_token_pool.to_account_info(),
            token_pool_program: self.token_pool_program.to_account_info(),
            remote_chain_config: None,
        }
    }
}

#[derive(Accounts)]
pub struct UpdateRateLimit<'info> {
    #[account(address = gho_bridge_steward.risk_council @ ErrorCodes::Unauthorized)]
    pub risk_council: Signer<'info>,

    #[account(mut, seeds = [GHO_BRIDGE_STEWARD_SEED], bump = gho_bridge_steward.bump)]
    pub gho_bridge_steward: Account<'info, GhoBridgeSteward>,

    #[account(
        address = gho_bridge_steward.gho_token_pool @ ErrorCodes::InvalidTokenPool,
        owner = token_pool_program.key() @ ErrorCodes::InvalidTokenPool
    )]
    /// CHECK: address checked against the steward
    pub gho_token_pool: UncheckedAccount<'info>,

    /// CHECK: owner of gho_token_pool
    #[account(executable)]
    pub token_pool_program: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: This will be checked during token pool invoke, keyed by remote_chain_selector on the pool side
    pub remote_chain_config: UncheckedAccount<'info>,
}

impl<'info> UpdateRateLimit<'info> {
    pub fn get_token_pool_accounts(&self) -> TokenPoolCpiAccounts<'info> {
        TokenPoolCpiAccounts {
            gho_bridge_steward: self.gho_bridge_steward.to_account_info(),
            gho_bridge_steward_bump: self.gho_bridge_steward.bump,
            gho_token_pool: self.gho_token_pool.to_account_info(),
            token_pool_program: self.token_pool_program.to_account_info(),
            remote_chain_config: Some(self.remote_chain_config.to_account_info()),
        }
    }
}
