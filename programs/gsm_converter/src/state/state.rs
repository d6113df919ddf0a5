use anchor_lang::prelude::*;

use crate::errors::ErrorCodes;
use crate::events::*;
use crate::interfaces::ConversionVenue;

use library::math::safe_math::*;

#[account]
#[derive(InitSpace, Default)]
pub struct GsmConverter {
    pub owner: Pubkey,

    // Immutable after init
    pub gsm: Pubkey,
    pub redemption: Pubkey,
    pub gho_token: Pubkey,      // GHO mint
    pub issued_asset: Pubkey,   // mint bought from the GSM and redeemed
    pub redeemed_asset: Pubkey, // mint paid out by the redemption program

    pub bump: u8,
}

impl GsmConverter {
    pub fn init(
        &mut self,
        owner: Pubkey,
        gsm: Pubkey,
        redemption: Pubkey,
        gho_token: Pubkey,
        issued_asset: Pubkey,
        redeemed_asset: Pubkey,
        bump: u8,
    ) -> Result<()> {
        let default_pubkey: Pubkey = Pubkey::default();

        if owner == default_pubkey
            || gsm == default_pubkey
            || redemption == default_pubkey
            || gho_token == default_pubkey
            || issued_asset == default_pubkey
            || redeemed_asset == default_pubkey
        {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        // balance post-conditions only hold for three distinct mints
        if gho_token == issued_asset || gho_token == redeemed_asset || issued_asset == redeemed_asset
        {
            return Err(ErrorCodes::InvalidMint.into());
        }

        self.owner = owner;
        self.gsm = gsm;
        self.redemption = redemption;
        self.gho_token = gho_token;
        self.issued_asset = issued_asset;
        self.redeemed_asset = redeemed_asset;
        self.bump = bump;

        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, ErrorCodes::Unauthorized);

        if new_owner == Pubkey::default() {
            return Err(ErrorCodes::ZeroAddress.into());
        }

        let previous_owner = self.owner;
        self.owner = new_owner;

        emit!(LogTransferOwnership {
            previous_owner,
            new_owner,
        });

        Ok(())
    }

    /// @notice buys `min_amount` issued asset from the GSM with the caller's GHO, redeems it
    ///         and sends the redeemed asset to `receiver`.
    /// @return (redeemed asset amount sent, GHO sold)
    /// @dev the converter must end with exactly the GHO and issued asset balances it started with.
    pub fn buy_asset<V: ConversionVenue>(
        &self,
        venue: &V,
        caller: &Pubkey,
        receiver: Pubkey,
        min_amount: u64,
    ) -> Result<(u64, u64)> {
        require!(min_amount > 0, ErrorCodes::InvalidAmount);

        let initial_gho_balance = venue.stablecoin_balance()?;
        let initial_issued_asset_balance = venue.issued_asset_balance()?;
        let initial_redeemed_asset_balance = venue.redeemed_asset_balance()?;

        let quote = venue.get_gho_amount_for_buy_asset(min_amount)?;

        venue.pull_stablecoin(quote.gho_amount)?;

        let (bought_asset_amount, gho_sold) = venue.buy_asset(min_amount, quote.gho_amount)?;

        venue.redeem(bought_asset_amount)?;

        require!(
            venue.redeemed_asset_balance()?
                == initial_redeemed_asset_balance.safe_add(bought_asset_amount)?,
            ErrorCodes::InvalidRedemption
        );
        require!(
            venue.issued_asset_balance()? == initial_issued_asset_balance,
            ErrorCodes::InvalidRemainingIssuedAssetBalance
        );
        require!(
            venue.stablecoin_balance()? == initial_gho_balance,
            ErrorCodes::InvalidRemainingGhoBalance
        );

        venue.send_redeemed_asset(bought_asset_amount)?;

        emit!(LogBuyAssetThroughRedemption {
            originator: *caller,
            receiver,
            redeemed_asset_amount: bought_asset_amount,
            gho_amount: gho_sold,
        });

        Ok((bought_asset_amount, gho_sold))
    }
}
