use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::errors::ErrorCodes;
use crate::invokes::ConversionCpiAccounts;
use crate::state::seeds::*;
use crate::state::state::*;

#[derive(Accounts)]
pub struct InitGsmConverter<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = 8 + GsmConverter::INIT_SPACE,
        seeds = [GSM_CONVERTER_SEED],
        bump,
    )]
    pub gsm_converter: Box<Account<'info, GsmConverter>>,

    #[account(mint::token_program = gho_token_program)]
    pub gho_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = issued_asset_token_program)]
    pub issued_asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = redeemed_asset_token_program)]
    pub redeemed_asset_mint: Box<InterfaceAccount<'info, Mint>>,

    // converter balances, one per mint it ever holds
    #[account(
        init,
        payer = signer,
        associated_token::mint = gho_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = gho_token_program
    )]
    pub converter_gho_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = signer,
        associated_token::mint = issued_asset_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = issued_asset_token_program
    )]
    pub converter_issued_asset_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = signer,
        associated_token::mint = redeemed_asset_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = redeemed_asset_token_program
    )]
    pub converter_redeemed_asset_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub gho_token_program: Interface<'info, TokenInterface>,
    pub issued_asset_token_program: Interface<'info, TokenInterface>,
    pub redeemed_asset_token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateOwnerConfig<'info> {
    #[account(address = gsm_converter.owner @ ErrorCodes::Unauthorized)]
    pub owner: Signer<'info>,

    #[account(mut, seeds = [GSM_CONVERTER_SEED], bump = gsm_converter.bump)]
    pub gsm_converter: Account<'info, GsmConverter>,
}

#[derive(Accounts)]
pub struct BuyAsset<'info> {
    // GHO payer
    pub signer: Signer<'info>,

    #[account(seeds = [GSM_CONVERTER_SEED], bump = gsm_converter.bump)]
    pub gsm_converter: Box<Account<'info, GsmConverter>>,

    #[account(
        mut,
        token::mint = gho_mint,
        token::authority = signer,
        token::token_program = gho_token_program
    )]
    pub signer_gho_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    // any redeemed asset account, its owner is the receiver
    #[account(
        mut,
        token::mint = redeemed_asset_mint,
        token::token_program = redeemed_asset_token_program
    )]
    pub receiver_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = gho_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = gho_token_program
    )]
    pub converter_gho_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = issued_asset_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = issued_asset_token_program
    )]
    pub converter_issued_asset_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = redeemed_asset_mint,
        associated_token::authority = gsm_converter,
        associated_token::token_program = redeemed_asset_token_program
    )]
    pub converter_redeemed_asset_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = gsm_converter.gho_token @ ErrorCodes::InvalidMint)]
    pub gho_mint: InterfaceAccount<'info, Mint>,

    #[account(address = gsm_converter.issued_asset @ ErrorCodes::InvalidMint)]
    pub issued_asset_mint: InterfaceAccount<'info, Mint>,

    #[account(address = gsm_converter.redeemed_asset @ ErrorCodes::InvalidMint)]
    pub redeemed_asset_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        address = gsm_converter.gsm @ ErrorCodes::InvalidGsm,
        owner = gsm_program.key() @ ErrorCodes::InvalidGsm
    )]
    /// CHECK: address checked against the converter
    pub gsm: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: Safe as this will be verified in gsm program CPI call
    pub gsm_issued_asset_vault: UncheckedAccount<'info>,

    /// CHECK: owner of gsm
    #[account(executable)]
    pub gsm_program: UncheckedAccount<'info>,

    #[account(
        mut,
        address = gsm_converter.redemption @ ErrorCodes::InvalidRedemptionContract,
        owner = redemption_program.key() @ ErrorCodes::InvalidRedemptionContract
    )]
    /// CHECK: address checked against the converter
    pub redemption: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: Safe as this will be verified in redemption program CPI call
    pub redemption_issued_asset_vault: UncheckedAccount<'info>,

    #[account(mut)]
    /// CHECK: Safe as this will be verified in redemption program CPI call
    pub redemption_redeemed_asset_vault: UncheckedAccount<'info>,

    /// CHECK: owner of redemption
    #[account(executable)]
    pub redemption_program: UncheckedAccount<'info>,

    pub gho_token_program: Interface<'info, TokenInterface>,
    pub issued_asset_token_program: Interface<'info, TokenInterface>,
    pub redeemed_asset_token_program: Interface<'info, TokenInterface>,
}

impl<'info> BuyAsset<'info> {
    pub fn get_conversion_accounts(&self) -> ConversionCpiAccounts<'info> {
        ConversionCpiAccounts {
            gsm_converter: self.gsm_converter.to_account_info(),
            gsm_converter_bump: self.gsm_converter.bump,

            signer: self.signer.to_account_info(),
            signer_gho_token_account: self.signer_gho_token_account.to_account_info(),
            receiver_token_account: self.receiver_token_account.to_account_info(),

            converter_gho_token_account: self.converter_gho_token_account.to_account_info(),
            converter_issued_asset_token_account: self
                .converter_issued_asset_token_account
                .to_account_info(),
            converter_redeemed_asset_token_account: self
                .converter_redeemed_asset_token_account
                .to_account_info(),

            gho_mint: self.gho_mint.clone(),
            issued_asset_mint: self.issued_asset_mint.clone(),
            redeemed_asset_mint: self.redeemed_asset_mint.clone(),

            gsm: self.gsm.to_account_info(),
            gsm_issued_asset_vault: self.gsm_issued_asset_vault.to_account_info(),
            gsm_program: self.gsm_program.to_account_info(),

            redemption: self.redemption.to_account_info(),
            redemption_issued_asset_vault: self.redemption_issued_asset_vault.to_account_info(),
            redemption_redeemed_asset_vault: self.redemption_redeemed_asset_vault.to_account_info(),
            redemption_program: self.redemption_program.to_account_info(),

            gho_token_program: self.gho_token_program.to_account_info(),
            issued_asset_token_program: self.issued_asset_token_program.to_account_info(),
            redeemed_asset_token_program: self.redeemed_asset_token_program.to_account_info(),
        }
    }
}
