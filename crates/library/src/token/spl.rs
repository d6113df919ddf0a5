use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCodes,
    structs::{TokenApproveParams, TokenTransferParams},
};
use anchor_spl::token::{self};
use anchor_spl::token_interface::{self, ApproveChecked, Mint, Revoke, TransferChecked};
use anchor_spl::{
    token::spl_token,
    token_2022::spl_token_2022,
    token_interface::spl_token_2022::extension::{
        BaseStateWithExtensions, ExtensionType, StateWithExtensions,
    },
};

pub fn balance_of(token_account: &AccountInfo) -> Result<u64> {
    let amount = token::accessor::amount(token_account)?;
    Ok(amount)
}

pub fn decimals(token_account: &Mint) -> Result<u8> {
    let decimals = token_account.decimals;
    Ok(decimals)
}

pub fn transfer_spl_tokens(params: TokenTransferParams) -> Result<()> {
    let TokenTransferParams {
        source,
        destination,
        authority,
        amount,
        token_program,
        signer_seeds,
        mint,
    } = params;

    let decimals = decimals(&mint)?;

    let transfer_accounts = TransferChecked {
        from: source,
        to: destination,
        authority,
        mint: mint.to_account_info(),
    };

    match signer_seeds {
        Some(seeds) => token_interface::transfer_checked(
            CpiContext::new_with_signer(token_program, transfer_accounts, seeds),
            amount,
            decimals,
        ),
        None => token_interface::transfer_checked(
            CpiContext::new(token_program, transfer_accounts),
            amount,
            decimals,
        ),
    }
}

/// Grants `delegate` the right to move `amount` out of `source`.
pub fn approve_spl_tokens(params: TokenApproveParams) -> Result<()> {
    let TokenApproveParams {
        source,
        delegate,
        authority,
        amount,
        token_program,
        signer_seeds,
        mint,
    } = params;

    let decimals = decimals(&mint)?;

    let approve_accounts = ApproveChecked {
        to: source,
        mint: mint.to_account_info(),
        delegate,
        authority,
    };

    match signer_seeds {
        Some(seeds) => token_interface::approve_checked(
            CpiContext::new_with_signer(token_program, approve_accounts, seeds),
            amount,
            decimals,
        ),
        None => token_interface::approve_checked(
            CpiContext::new(token_program, approve_accounts),
            amount,
            decimals,
        ),
    }
}

/// Clears any delegation left on `source`.
pub fn revoke_spl_tokens<'info>(
    source: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::revoke(CpiContext::new_with_signer(
        token_program,
        Revoke { source, authority },
        signer_seeds,
    ))
}

// Transfer fees or hooks would break the 1:1 accounting of a conversion, so they must be disabled.
const WHITELISTED_EXTENSIONS: &[ExtensionType] = &[
    ExtensionType::MetadataPointer,
    ExtensionType::TransferFeeConfig,
    ExtensionType::TokenMetadata,
    ExtensionType::TransferHook,
    ExtensionType::DefaultAccountState,
    ExtensionType::MintCloseAuthority,
    ExtensionType::PermanentDelegate,
];

fn validate_token_extensions_2022(mint: &AccountInfo) -> Result<()> {
    let mint_data = mint.data.borrow();
    let mint = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&mint_data)?;

    for mint_ext in mint.get_extension_types()? {
        if !WHITELISTED_EXTENSIONS.contains(&mint_ext) {
            msg!("Unsupported mint extension: {:?}", mint_ext);
            return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
        }

        match mint_ext {
            ExtensionType::TransferFeeConfig => {
                let ext = mint
                    .get_extension::<spl_token_2022::extension::transfer_fee::TransferFeeConfig>(
                    )?;
                if <u16>::from(ext.older_transfer_fee.transfer_fee_basis_points) != 0
                    || <u16>::from(ext.newer_transfer_fee.transfer_fee_basis_points) != 0
                {
                    return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
                }
            }
            ExtensionType::TransferHook => {
                let ext =
                    mint.get_extension::<spl_token_2022::extension::transfer_hook::TransferHook>()?;
                let hook_program_id: Option<Pubkey> = ext.program_id.into();
                if hook_program_id.is_some() {
                    return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
                }
            }
            ExtensionType::DefaultAccountState => {
                let ext = mint.get_extension::<spl_token_2022::extension::default_account_state::DefaultAccountState>()?;
                if ext.state != spl_token_2022::state::AccountState::Initialized as u8 {
                    return err!(ErrorCodes::LibraryUnsupportedTokenExtension);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rejects token-2022 mints whose extensions could make a transfer deliver less than requested.
pub fn check_conversion_mint(mint: &InterfaceAccount<'_, Mint>) -> Result<()> {
    let mint_info = mint.to_account_info();

    if mint_info.owner == &spl_token::ID {
        return Ok(());
    }

    if spl_token_2022::native_mint::check_id(&mint.key()) {
        return err!(ErrorCodes::LibraryInvalidTokenMint);
    }

    validate_token_extensions_2022(&mint_info)
}
