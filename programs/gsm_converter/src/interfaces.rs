use anchor_lang::prelude::*;

use crate::state::BuyAssetQuote;

/// Everything `buy_asset` touches: the converter's own token balances, the GSM,
/// the redemption program and the caller / receiver token accounts.
pub trait ConversionVenue {
    fn stablecoin_balance(&self) -> Result<u64>;

    fn issued_asset_balance(&self) -> Result<u64>;

    fn redeemed_asset_balance(&self) -> Result<u64>;

    fn get_gho_amount_for_buy_asset(&self, min_amount: u64) -> Result<BuyAssetQuote>;

    /// Moves `amount` GHO from the caller to the converter.
    fn pull_stablecoin(&self, amount: u64) -> Result<()>;

    /// Buys at least `min_amount` issued asset for at most `gho_amount` GHO.
    /// Returns (issued asset bought, GHO sold).
    fn buy_asset(&self, min_amount: u64, gho_amount: u64) -> Result<(u64, u64)>;

    /// Redeems `amount` issued asset 1:1 for the redeemed asset.
    fn redeem(&self, amount: u64) -> Result<()>;

    fn send_redeemed_asset(&self, amount: u64) -> Result<()>;
}
