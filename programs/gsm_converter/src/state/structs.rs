use anchor_lang::prelude::*;

/// What the GSM charges for buying `asset_amount` of the issued asset, fee included in `gho_amount`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuyAssetQuote {
    pub asset_amount: u64,
    pub gho_amount: u64,
    pub gross_amount: u64,
    pub fee: u64,
}
