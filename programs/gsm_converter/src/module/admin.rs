use anchor_lang::prelude::*;

use crate::state::*;
use library::token::check_conversion_mint;

pub fn init_gsm_converter(
    context: Context<InitGsmConverter>,
    owner: Pubkey,
    gsm: Pubkey,
    redemption: Pubkey,
) -> Result<()> {
    // @dev transfer fees or hooks on any of the three mints would break the balance post-conditions
    check_conversion_mint(&context.accounts.gho_mint)?;
    check_conversion_mint(&context.accounts.issued_asset_mint)?;
    check_conversion_mint(&context.accounts.redeemed_asset_mint)?;

    context.accounts.gsm_converter.init(
        owner,
        gsm,
        redemption,
        context.accounts.gho_mint.key(),
        context.accounts.issued_asset_mint.key(),
        context.accounts.redeemed_asset_mint.key(),
        context.bumps.gsm_converter,
    )
}

pub fn transfer_ownership(context: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
    let owner = context.accounts.owner.key();

    context
        .accounts
        .gsm_converter
        .transfer_ownership(&owner, new_owner)
}
