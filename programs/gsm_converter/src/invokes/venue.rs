use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_spl::token_interface::Mint;

use crate::interfaces::ConversionVenue;
use crate::state::{BuyAssetQuote, GSM_CONVERTER_SEED};

use library::{
    cpi::{instruction_data, invoke_instruction, invoke_instruction_with_return, invoke_view},
    structs::{TokenApproveParams, TokenTransferParams},
    token::*,
};

// discriminator = sha256("global:<instruction name>")[0..8]
const GET_GHO_AMOUNT_FOR_BUY_ASSET_DISCRIMINATOR: [u8; 8] = [118, 203, 173, 13, 175, 113, 85, 42];
const BUY_ASSET_DISCRIMINATOR: [u8; 8] = [197, 37, 177, 1, 180, 23, 175, 98];
const REDEEM_DISCRIMINATOR: [u8; 8] = [184, 12, 86, 149, 70, 196, 97, 225];

pub struct ConversionCpiAccounts<'info> {
    // converter PDA, owner of the three converter token accounts
    pub gsm_converter: AccountInfo<'info>,
    pub gsm_converter_bump: u8,

    pub signer: AccountInfo<'info>,
    pub signer_gho_token_account: AccountInfo<'info>,
    pub receiver_token_account: AccountInfo<'info>,

    pub converter_gho_token_account: AccountInfo<'info>,
    pub converter_issued_asset_token_account: AccountInfo<'info>,
    pub converter_redeemed_asset_token_account: AccountInfo<'info>,

    pub gho_mint: InterfaceAccount<'info, Mint>,
    pub issued_asset_mint: InterfaceAccount<'info, Mint>,
    pub redeemed_asset_mint: InterfaceAccount<'info, Mint>,

    pub gsm: AccountInfo<'info>,
    pub gsm_issued_asset_vault: AccountInfo<'info>,
    pub gsm_program: AccountInfo<'info>,

    pub redemption: AccountInfo<'info>,
    pub redemption_redeemed_asset_vault: AccountInfo<'info>,
    pub redemption_issued_asset_vault: AccountInfo<'info>,
    pub redemption_program: AccountInfo<'info>,

    pub gho_token_program: AccountInfo<'info>,
    pub issued_asset_token_program: AccountInfo<'info>,
    pub redeemed_asset_token_program: AccountInfo<'info>,
}

impl<'info> ConversionVenue for ConversionCpiAccounts<'info> {
    fn stablecoin_balance(&self) -> Result<u64> {
        balance_of(&self.converter_gho_token_account)
    }

    fn issued_asset_balance(&self) -> Result<u64> {
        balance_of(&self.converter_issued_asset_token_account)
    }

    fn redeemed_asset_balance(&self) -> Result<u64> {
        balance_of(&self.converter_redeemed_asset_token_account)
    }

    fn get_gho_amount_for_buy_asset(&self, min_amount: u64) -> Result<BuyAssetQuote> {
        invoke_view(
            &self.gsm_program,
            vec![AccountMeta::new_readonly(*self.gsm.key, false)],
            instruction_data(&GET_GHO_AMOUNT_FOR_BUY_ASSET_DISCRIMINATOR, &min_amount)?,
            &[self.gsm.clone()],
        )
    }

    fn pull_stablecoin(&self, amount: u64) -> Result<()> {
        transfer_spl_tokens(TokenTransferParams {
            source: self.signer_gho_token_account.clone(),
            destination: self.converter_gho_token_account.clone(),
            authority: self.signer.clone(), // msg.sender
            amount,
            token_program: self.gho_token_program.clone(),
            signer_seeds: None,
            mint: self.gho_mint.clone(),
        })
    }

    fn buy_asset(&self, min_amount: u64, gho_amount: u64) -> Result<(u64, u64)> {
        let signer_seeds: &[&[&[u8]]] = &[&[GSM_CONVERTER_SEED, &[self.gsm_converter_bump]]];

        // GSM pulls the GHO through its delegation
        approve_spl_tokens(TokenApproveParams {
            source: self.converter_gho_token_account.clone(),
            delegate: self.gsm.clone(),
            authority: self.gsm_converter.clone(),
            amount: gho_amount,
            token_program: self.gho_token_program.clone(),
            signer_seeds: Some(signer_seeds),
            mint: self.gho_mint.clone(),
        })?;

        let account_metas = vec![
            AccountMeta::new_readonly(*self.gsm_converter.key, true),
            AccountMeta::new(*self.gsm.key, false),
            AccountMeta::new(self.gho_mint.key(), false),
            AccountMeta::new(*self.converter_gho_token_account.key, false),
            AccountMeta::new_readonly(self.issued_asset_mint.key(), false),
            AccountMeta::new(*self.gsm_issued_asset_vault.key, false),
            // receiver of the issued asset is the converter itself
            AccountMeta::new(*self.converter_issued_asset_token_account.key, false),
            AccountMeta::new_readonly(*self.gho_token_program.key, false),
            AccountMeta::new_readonly(*self.issued_asset_token_program.key, false),
        ];

        let (bought_asset_amount, gho_sold): (u64, u64) = invoke_instruction_with_return(
            &self.gsm_program,
            account_metas,
            instruction_data(
                &BUY_ASSET_DISCRIMINATOR,
                &(min_amount, *self.converter_issued_asset_token_account.key),
            )?,
            &[
                self.gsm_converter.clone(),
                self.gsm.clone(),
                self.gho_mint.to_account_info(),
                self.converter_gho_token_account.clone(),
                self.issued_asset_mint.to_account_info(),
                self.gsm_issued_asset_vault.clone(),
                self.converter_issued_asset_token_account.clone(),
                self.gho_token_program.clone(),
                self.issued_asset_token_program.clone(),
            ],
            signer_seeds,
        )?;

        revoke_spl_tokens(
            self.converter_gho_token_account.clone(),
            self.gsm_converter.clone(),
            self.gho_token_program.clone(),
            signer_seeds,
        )?;

        Ok((bought_asset_amount, gho_sold))
    }

    fn redeem(&self, amount: u64) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[GSM_CONVERTER_SEED, &[self.gsm_converter_bump]]];

        approve_spl_tokens(TokenApproveParams {
            source: self.converter_issued_asset_token_account.clone(),
            delegate: self.redemption.clone(),
            authority: self.gsm_converter.clone(),
            amount,
            token_program: self.issued_asset_token_program.clone(),
            signer_seeds: Some(signer_seeds),
            mint: self.issued_asset_mint.clone(),
        })?;

        let account_metas = vec![
            AccountMeta::new_readonly(*self.gsm_converter.key, true),
            AccountMeta::new(*self.redemption.key, false),
            AccountMeta::new_readonly(self.issued_asset_mint.key(), false),
            AccountMeta::new(*self.converter_issued_asset_token_account.key, false),
            AccountMeta::new(*self.redemption_issued_asset_vault.key, false),
            AccountMeta::new_readonly(self.redeemed_asset_mint.key(), false),
            AccountMeta::new(*self.redemption_redeemed_asset_vault.key, false),
            AccountMeta::new(*self.converter_redeemed_asset_token_account.key, false),
            AccountMeta::new_readonly(*self.issued_asset_token_program.key, false),
            AccountMeta::new_readonly(*self.redeemed_asset_token_program.key, false),
        ];

        invoke_instruction(
            &self.redemption_program,
            account_metas,
            instruction_data(&REDEEM_DISCRIMINATOR, &amount)?,
            &[
                self.gsm_converter.clone(),
                self.redemption.clone(),
                self.issued_asset_mint.to_account_info(),
                self.converter_issued_asset_token_account.clone(),
                self.redemption_issued_asset_vault.clone(),
                self.redeemed_asset_mint.to_account_info(),
                self.redemption_redeemed_asset_vault.clone(),
                self.converter_redeemed_asset_token_account.clone(),
                self.issued_asset_token_program.clone(),
                self.redeemed_asset_token_program.clone(),
            ],
            signer_seeds,
        )?;

        revoke_spl_tokens(
            self.converter_issued_asset_token_account.clone(),
            self.gsm_converter.clone(),
            self.issued_asset_token_program.clone(),
            signer_seeds,
        )
    }

    fn send_redeemed_asset(&self, amount: u64) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[GSM_CONVERTER_SEED, &[self.gsm_converter_bump]]];

        transfer_spl_tokens(TokenTransferParams {
            source: self.converter_redeemed_asset_token_account.clone(),
            destination: self.receiver_token_account.clone(),
            authority: self.gsm_converter.clone(),
            amount,
            token_program: self.redeemed_asset_token_program.clone(),
            signer_seeds: Some(signer_seeds),
            mint: self.redeemed_asset_mint.clone(),
        })
    }
}
