use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod interfaces;
pub mod invokes;
pub mod module;
pub mod state;

use crate::state::*;

#[cfg(feature = "staging")]
declare_id!("3BB1ZnQDMKidXAQ4d4EFicySq7iXtpkLdsCkkfw1jnVJ");

#[cfg(not(feature = "staging"))]
declare_id!("27BuZN3W82SEsjAg9UnEFbRD8x7uKdHrTq6ixBCoZ9nB");

#[program]
pub mod gsm_converter {
    use super::*;

    /***********************************|
    |           Owner Module            |
    |__________________________________*/

    pub fn init_gsm_converter(
        ctx: Context<InitGsmConverter>,
        owner: Pubkey,
        gsm: Pubkey,
        redemption: Pubkey,
    ) -> Result<()> {
        module::admin::init_gsm_converter(ctx, owner, gsm, redemption)
    }

    pub fn transfer_ownership(ctx: Context<UpdateOwnerConfig>, new_owner: Pubkey) -> Result<()> {
        module::admin::transfer_ownership(ctx, new_owner)
    }

    /***********************************|
    |           User Module             |
    |__________________________________*/

    /// @notice returns (redeemed asset amount sent to the receiver, GHO sold)
    pub fn buy_asset(ctx: Context<BuyAsset>, min_amount: u64) -> Result<(u64, u64)> {
        module::user::buy_asset(ctx, min_amount)
    }
}
