use anchor_lang::prelude::*;

#[event]
pub struct LogBuyAssetThroughRedemption {
    pub originator: Pubkey,
    pub receiver: Pubkey,
    pub redeemed_asset_amount: u64,
    pub gho_amount: u64,
}

#[event]
pub struct LogTransferOwnership {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
