use anchor_lang::prelude::*;

use crate::state::*;

pub fn buy_asset(context: Context<BuyAsset>, min_amount: u64) -> Result<(u64, u64)> {
    let signer = context.accounts.signer.key();
    let receiver = context.accounts.receiver_token_account.owner;
    let venue = context.accounts.get_conversion_accounts();

    context
        .accounts
        .gsm_converter
        .buy_asset(&venue, &signer, receiver, min_amount)
}
