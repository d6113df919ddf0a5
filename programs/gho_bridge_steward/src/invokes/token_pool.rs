use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;

use crate::errors::ErrorCodes;
use crate::interfaces::TokenPool;
use crate::state::{RateLimitConfig, GHO_BRIDGE_STEWARD_SEED};

use library::cpi::{instruction_data, invoke_instruction, invoke_view};

// discriminator = sha256("global:<instruction name>")[0..8]
const GET_BRIDGE_LIMIT_DISCRIMINATOR: [u8; 8] = [235, 155, 30, 129, 33, 36, 223, 194];
const SET_BRIDGE_LIMIT_DISCRIMINATOR: [u8; 8] = [55, 80, 127, 169, 108, 30, 95, 81];
const SET_CHAIN_RATE_LIMITER_CONFIG_DISCRIMINATOR: [u8; 8] = [75, 130, 32, 45, 129, 22, 64, 156];

pub struct TokenPoolCpiAccounts<'info> {
    pub gho_bridge_steward: AccountInfo<'info>,
    pub gho_bridge_steward_bump: u8,

    pub gho_token_pool: AccountInfo<'info>,
    pub token_pool_program: AccountInfo<'info>,

    // only present for rate limit updates
    pub remote_chain_config: Option<AccountInfo<'info>>,
}

impl<'info> TokenPool for TokenPoolCpiAccounts<'info> {
    fn get_bridge_limit(&self) -> Result<u64> {
        invoke_view(
            &self.token_pool_program,
            vec![AccountMeta::new_readonly(*self.gho_token_pool.key, false)],
            GET_BRIDGE_LIMIT_DISCRIMINATOR.to_vec(),
            &[self.gho_token_pool.clone()],
        )
    }

    fn set_bridge_limit(&self, bridge_limit: u64) -> Result<()> {
        let account_metas = vec![
            // steward PDA, registered as bridge limit admin on the pool
            AccountMeta::new_readonly(*self.gho_bridge_steward.key, true),
            AccountMeta::new(*self.gho_token_pool.key, false),
        ];

        let signer_seeds: &[&[&[u8]]] = &[&[
            GHO_BRIDGE_STEWARD_SEED,
            &[self.gho_bridge_steward_bump],
        ]];

        invoke_instruction(
            &self.token_pool_program,
            account_metas,
            instruction_data(&SET_BRIDGE_LIMIT_DISCRIMINATOR, &bridge_limit)?,
            &[self.gho_bridge_steward.clone(), self.gho_token_pool.clone()],
            signer_seeds,
        )
    }

    fn set_chain_rate_limiter_config(
        &self,
        remote_chain_selector: u64,
        outbound_config: RateLimitConfig,
        inbound_config: RateLimitConfig,
    ) -> Result<()> {
        let remote_chain_config = match &self.remote_chain_config {
            Some(remote_chain_config) => remote_chain_config,
            None => return err!(ErrorCodes::MissingChainConfig),
        };

        let account_metas = vec![
            // steward PDA, registered as rate limit admin on the pool
            AccountMeta::new_readonly(*self.gho_bridge_steward.key, true),
            AccountMeta::new_readonly(*self.gho_token_pool.key, false),
            AccountMeta::new(*remote_chain_config.key, false),
        ];

        let signer_seeds: &[&[&[u8]]] = &[&[
            GHO_BRIDGE_STEWARD_SEED,
            &[self.gho_bridge_steward_bump],
        ]];

        invoke_instruction(
            &self.token_pool_program,
            account_metas,
            instruction_data(
                &SET_CHAIN_RATE_LIMITER_CONFIG_DISCRIMINATOR,
                &(remote_chain_selector, outbound_config, inbound_config),
            )?,
            &[
                self.gho_bridge_steward.clone(),
                self.gho_token_pool.clone(),
                remote_chain_config.clone(),
            ],
            signer_seeds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_requires_chain_config() {
        let (steward_key, pool_key, program_key) =
            (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let (mut steward_lamports, mut pool_lamports, mut program_lamports) = (0u64, 0u64, 0u64);
        let (mut steward_data, mut pool_data, mut program_data) =
            (Vec::<u8>::new(), Vec::<u8>::new(), Vec::<u8>::new());

        let token_pool = TokenPoolCpiAccounts {
            gho_bridge_steward: AccountInfo::new(
                &steward_key,
                false,
                false,
                &mut steward_lamports,
                steward_data.as_mut_slice(),
                &crate::ID,
                false,
                0,
            ),
            gho_bridge_steward_bump: 254,
            gho_token_pool: AccountInfo::new(
                &pool_key,
                false,
                false,
                &mut pool_lamports,
                pool_data.as_mut_slice(),
                &program_key,
                false,
                0,
            ),
            token_pool_program: AccountInfo::new(
                &program_key,
                false,
                false,
                &mut program_lamports,
                program_data.as_mut_slice(),
                &program_key,
                true,
                0,
            ),
            remote_chain_config: None,
        };

        let err = token_pool
            .set_chain_rate_limiter_config(
                5_009_297_550_715_157_269,
                RateLimitConfig::default(),
                RateLimitConfig::default(),
            )
            .unwrap_err();
        assert_eq!(err, Error::from(ErrorCodes::MissingChainConfig));
    }
}
