use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::invokes::PoolCpiAccounts;
use crate::state::seeds::*;
use crate::state::state::*;

#[derive(Accounts)]
pub struct InitGhoSteward<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + GhoSteward::INIT_SPACE,
        seeds = [GHO_STEWARD_SEED],
        bump,
    )]
    pub gho_steward: Account<'info, GhoSteward>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateOwnerConfig<'info> {
    #[account(address = gho_steward.owner @ ErrorCodes::Unauthorized)]
    pub owner: Signer<'info>,

    #[account(mut, seeds = [GHO_STEWARD_SEED], bump = gho_steward.bump)]
    pub gho_steward: Account<'info, GhoSteward>,
}

#[derive(Accounts)]
pub struct ReadGhoSteward<'info> {
    #[account(seeds = [GHO_STEWARD_SEED], bump = gho_steward.bump)]
    pub gho_steward: Account<'info, GhoSteward>,
}

#[derive(Accounts)]
pub struct UpdateGhoCaps<'info> {
    #[account(address = gho_steward.risk_council @ ErrorCodes::Unauthorized)]
    pub risk_council: Signer<'info>,

    #[account(mut, seeds = [GHO_STEWARD_SEED], bump = gho_steward.bump)]
    pub gho_steward: Account<'info, GhoSteward>,

    /// CHECK: address checked against the steward, data read by its owner program
    #[account(
        address = gho_steward.pool_addresses_provider @ ErrorCodes::InvalidPoolAddressesProvider,
        owner = pool_addresses_provider_program.key() @ ErrorCodes::InvalidPoolAddressesProvider
    )]
    pub pool_addresses_provider: UncheckedAccount<'info>,

    /// CHECK: owner of pool_addresses_provider
    #[account(executable)]
    pub pool_addresses_provider_program: UncheckedAccount<'info>,

    /// CHECK: address checked against the steward, data read by its owner program
    #[account(
        address = gho_steward.pool_data_provider @ ErrorCodes::InvalidPoolDataProvider,
        owner = pool_data_provider_program.key() @ ErrorCodes::InvalidPoolDataProvider
    )]
    pub pool_data_provider: UncheckedAccount<'info>,

    /// CHECK: owner of pool_data_provider
    #[account(executable)]
    pub pool_data_provider_program: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: This will be checked during pool configurator invoke
    pub gho_reserve: UncheckedAccount<'info>,

    /// CHECK: checked against the configurator resolved through the addresses provider
    #[account(executable)]
    pub pool_configurator_program: UncheckedAccount<'info>,
}

impl<'info> UpdateGhoCaps<'info> {
    pub fn get_pool_accounts(&self) -> PoolCpiAccounts<'info> {
        PoolCpiAccounts {
            gho_steward: self.gho_steward.to_account_info(),
            gho_steward_bump: self.gho_steward.bump,
            pool_addresses_provider: self.pool_addresses_provider.to_account_info(),
            pool_addresses_provider_program: self.pool_addresses_provider_program.to_account_info(),
            pool_data_provider: self.pool_data_provider.to_account_info(),
            pool_data_provider_program: self.pool_data_provider_program.to_account_info(),
            gho_reserve: self.gho_reserve.to_account_info(),
            pool_configurator_program: self.pool_configurator_program.to_account_info(),
            rate_strategy: None,
            rate_strategy_program: None,
        }
    }
}

#[derive(Accounts)]
pub struct UpdateGhoBorrowRate<'info> {
    #[account(address = gho_steward.risk_council @ ErrorCodes::Unauthorized)]
    pub risk_council: Signer<'info>,

    #[account(mut, seeds = [GHO_STEWARD_SEED], bump = gho_steward.bump)]
    pub gho_steward: Account<'info, GhoSteward>,

    /// CHECK: address checked against the steward, data read by its owner program
    #[account(
        address = gho_steward.pool_addresses_provider @ ErrorCodes::InvalidPoolAddressesProvider,
        owner = pool_addresses_provider_program.key() @ ErrorCodes::InvalidPoolAddressesProvider
    )]
    pub pool_addresses_provider: UncheckedAccount<'info>,

    /// CHECK: owner of pool_addresses_provider
    #[account(executable)]
    pub pool_addresses_provider_program: UncheckedAccount<'info>,

    /// CHECK: address checked against the steward, data read by its owner program
    #[account(
        address = gho_steward.pool_data_provider @ ErrorCodes::InvalidPoolDataProvider,
        owner = pool_data_provider_program.key() @ ErrorCodes::InvalidPoolDataProvider
    )]
    pub pool_data_provider: UncheckedAccount<'info>,

    /// CHECK: owner of pool_data_provider
    #[account(executable)]
    pub pool_data_provider_program: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: This will be checked during pool configurator invoke
    pub gho_reserve: UncheckedAccount<'info>,

    /// CHECK: checked against the configurator resolved through the addresses provider
    #[account(executable)]
    pub pool_configurator_program: UncheckedAccount<'info>,

    /// CHECK: checked against the strategy reported by the data provider
    pub rate_strategy: UncheckedAccount<'info>,

    /// CHECK: owner of rate_strategy, checked in the invoke
    #[account(executable)]
    pub rate_strategy_program: UncheckedAccount<'info>,
}

impl<'info> UpdateGhoBorrowRate<'info> {
    pub fn get_pool_accounts(&self) -> PoolCpiAccounts<'info> {
        PoolCpiAccounts {
            gho_steward: self.gho_steward.to_account_info(),
            gho_steward_bump: self.gho_steward.bump,
            pool_addresses_provider: self.pool_addresses_provider.to_account_info(),
            pool_addresses_provider_program: self.pool_addresses_provider_program.to_account_info(),
            pool_data_provider: self.pool_data_provider.to_account_info(),
            pool_data_provider_program: self.pool_data_provider_program.to_account_info(),
            gho_reserve: self.gho_reserve.to_account_info(),
            pool_configurator_program: self.pool_configurator_program.to_account_info(),
            rate_strategy: Some(self.rate_strategy.to_account_info()),
            rate_strategy_program: Some(self.rate_strategy_program.to_account_info()),
        }
    }
}
