use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;

use crate::interfaces::FacilitatorRegistry;
use crate::state::{FacilitatorBucket, GHO_BRIDGE_STEWARD_SEED};

use library::cpi::{instruction_data, invoke_instruction, invoke_view};

// discriminator = sha256("global:<instruction name>")[0..8]
const GET_FACILITATOR_BUCKET_DISCRIMINATOR: [u8; 8] = [132, 7, 134, 249, 34, 226, 113, 86];
const SET_FACILITATOR_BUCKET_CAPACITY_DISCRIMINATOR: [u8; 8] = [29, 248, 3, 93, 250, 211, 56, 141];

pub struct GhoTokenCpiAccounts<'info> {
    pub gho_bridge_steward: AccountInfo<'info>,
    pub gho_bridge_steward_bump: u8,

    pub gho_token: AccountInfo<'info>,
    pub gho_token_program: AccountInfo<'info>,

    pub facilitator_bucket: AccountInfo<'info>,
}

impl<'info> FacilitatorRegistry for GhoTokenCpiAccounts<'info> {
    fn get_facilitator_bucket(&self, facilitator: &Pubkey) -> Result<FacilitatorBucket> {
        invoke_view(
            &self.gho_token_program,
            vec![
                AccountMeta::new_readonly(*self.gho_token.key, false),
                AccountMeta::new_readonly(*self.facilitator_bucket.key, false),
            ],
            instruction_data(&GET_FACILITATOR_BUCKET_DISCRIMINATOR, facilitator)?,
            &[self.gho_token.clone(), self.facilitator_bucket.clone()],
        )
    }

    fn set_facilitator_bucket_capacity(&self, facilitator: &Pubkey, capacity: u64) -> Result<()> {
        let account_metas = vec![
            // steward PDA, registered as bucket manager on the token
            AccountMeta::new_readonly(*self.gho_bridge_steward.key, true),
            AccountMeta::new_readonly(*self.gho_token.key, false),
            // bucket being resized (mutable)
            AccountMeta::new(*self.facilitator_bucket.key, false),
        ];

        let signer_seeds: &[&[&[u8]]] = &[&[
            GHO_BRIDGE_STEWARD_SEED,
            &[self.gho_bridge_steward_bump],
        ]];

        invoke_instruction(
            &self.gho_token_program,
            account_metas,
            instruction_data(
                &SET_FACILITATOR_BUCKET_CAPACITY_DISCRIMINATOR,
                &(*facilitator, capacity),
            )?,
            &[
                self.gho_bridge_steward.clone(),
                self.gho_token.clone(),
                self.facilitator_bucket.clone(),
            ],
            signer_seeds,
        )
    }
}
