use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(GSM_CONVERTER_UNAUTHORIZED)]
    Unauthorized,

    #[msg(GSM_CONVERTER_ZERO_ADDRESS)]
    ZeroAddress,

    #[msg(GSM_CONVERTER_INVALID_MIN_AMOUNT)]
    InvalidAmount,

    #[msg(GSM_CONVERTER_INVALID_MINT)]
    InvalidMint,

    #[msg(GSM_CONVERTER_INVALID_GSM)]
    InvalidGsm,

    #[msg(GSM_CONVERTER_INVALID_REDEMPTION_CONTRACT)]
    InvalidRedemptionContract,

    /***********************************|
    |      Buy asset post-conditions    |
    |__________________________________*/
    #[msg(GSM_CONVERTER_INVALID_REDEMPTION)]
    InvalidRedemption,

    #[msg(GSM_CONVERTER_INVALID_REMAINING_GHO_BALANCE)]
    InvalidRemainingGhoBalance,

    #[msg(GSM_CONVERTER_INVALID_REMAINING_ISSUED_ASSET_BALANCE)]
    InvalidRemainingIssuedAssetBalance,
}
